use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::{
    config::RunConfig,
    constants::{AGGREGATED_FILE, IMPORT_TREE_FILE},
    types::Report,
};

/// Prints the end-of-run summary for the console.
pub fn print_run_summary<W: Write>(
    writer: &mut W,
    report: &Report,
    cfg: &RunConfig,
    elapsed_ms: u128,
) -> io::Result<()> {
    debug!("Printing run summary");

    writeln!(
        writer,
        "{} Aggregated {} files into {}",
        "✓".green().bold(),
        report.files_aggregated.to_string().cyan(),
        cfg.output_dir.join(AGGREGATED_FILE).display().to_string().blue()
    )?;
    writeln!(
        writer,
        "{} Import hierarchy written to {}",
        "✓".green().bold(),
        cfg.output_dir.join(IMPORT_TREE_FILE).display().to_string().blue()
    )?;

    if report.unresolved_imports > 0 {
        writeln!(
            writer,
            "{} {} import(s) could not be resolved",
            "⚠".yellow().bold(),
            report.unresolved_imports.to_string().yellow()
        )?;
    }
    if report.skipped_entries > 0 {
        writeln!(
            writer,
            "{} {} entry file(s) missing",
            "⚠".yellow().bold(),
            report.skipped_entries.to_string().yellow()
        )?;
    }

    writeln!(writer, "\n{} Finished in {}ms.", "●".bright_blue(), elapsed_ms.to_string().cyan())?;
    writer.flush()?;
    Ok(())
}
