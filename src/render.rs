use crate::error::Error;
use crate::report::AggregateReport;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Csv,
}

pub fn write_report<W: Write>(
    report: &AggregateReport,
    format: OutputFormat,
    writer: W,
) -> Result<(), Error> {
    match format {
        OutputFormat::Json => write_json(report, writer),
        OutputFormat::Table => write_table(report, writer),
        OutputFormat::Csv => write_csv(report, writer),
    }
}

pub fn write_json<W: Write>(report: &AggregateReport, mut writer: W) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer).map_err(|e| Error::Report(e.to_string()))
}

pub fn write_csv<W: Write>(report: &AggregateReport, writer: W) -> Result<(), Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["file1", "file2", "similarity"])?;
    for comparison in &report.similarity_file_comparisons {
        csv_writer.serialize(comparison)?;
    }
    csv_writer.flush().map_err(|e| Error::Report(e.to_string()))
}

pub fn write_table<W: Write>(report: &AggregateReport, mut writer: W) -> Result<(), Error> {
    let io_err = |e: std::io::Error| Error::Report(e.to_string());

    for comparison in &report.similarity_file_comparisons {
        writeln!(
            writer,
            "{:>8}  {}  {}",
            comparison.similarity.cyan(),
            comparison.file1,
            format!("<-> {}", comparison.file2).dimmed(),
        )
        .map_err(io_err)?;
    }
    writeln!(
        writer,
        "{} files considered, {} matched, overall similarity {}%",
        format!("{}", report.same_directory_count).yellow(),
        format!("{}", report.same_directory_and_file_count).green(),
        report.overall_similarity_percentage.bold(),
    )
    .map_err(io_err)
}
