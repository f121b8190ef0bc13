use clap::{Args, Parser, Subcommand, ValueEnum};
use simdir::render::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "simdir")]
#[command(about = "Compare two directory trees by text similarity", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare every file of ROOT_A with the file at the same relative path in ROOT_B
    Compare(CompareArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    pub root_a: PathBuf,
    pub root_b: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Extra glob patterns to skip (added to the configured ones)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Fail on files that are not valid UTF-8
    #[arg(long)]
    pub strict_utf8: bool,

    /// Score pairs one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Hide progress bars
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Table,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Table => OutputFormat::Table,
            Format::Csv => OutputFormat::Csv,
        }
    }
}
