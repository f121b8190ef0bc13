mod cli;
mod logging;
mod progress_bar;

use std::io::{self, IsTerminal, Write};
use std::process;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, CompareArgs};
use colored::*;
use dotenv::dotenv;
use progress_bar::CliReporter;
use simdir::render::write_report;
use simdir::{AppConfig, CompareEngine, ProgressReporter, SilentReporter};
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match simdir::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Compare(compare_args)) => {
            if let Err(err) = run_compare(config, compare_args) {
                error!("Error: {:#}", err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => match toml::to_string_pretty(&config) {
            Ok(text) => print!("{}", text),
            Err(err) => {
                error!("Error printing configuration: {}", err);
                process::exit(1);
            }
        },
        None => {
            let _ = Cli::command().print_long_help();
        }
    }
}

fn run_compare(mut config: AppConfig, args: CompareArgs) -> anyhow::Result<()> {
    config.ignore_patterns.extend(args.ignore);
    if args.strict_utf8 {
        config.strict_utf8 = true;
    }
    if args.sequential {
        config.parallel = false;
    }

    let engine = CompareEngine::new(config);
    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let cli_reporter = CliReporter::new();
    let reporter: &dyn ProgressReporter = if show_progress {
        &cli_reporter
    } else {
        &SilentReporter
    };

    let outcome = engine
        .compare(&args.root_a, &args.root_b, reporter)
        .with_context(|| {
            format!(
                "comparing {} with {}",
                args.root_a.display(),
                args.root_b.display()
            )
        })?;

    info!(
        "Walk: {}, Compare: {}",
        format!("{:.2}s", outcome.walk_duration.as_secs_f64()).green(),
        format!("{:.2}s", outcome.compare_duration.as_secs_f64()).green(),
    );
    if !outcome.unmatched.is_empty() {
        info!(
            "{} files in {} have no counterpart in {}",
            format!("{}", outcome.unmatched.len()).red(),
            args.root_a.display(),
            args.root_b.display(),
        );
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&outcome.report, args.format.into(), &mut handle)
        .context("writing report")?;
    handle.flush().context("flushing report")?;

    Ok(())
}
