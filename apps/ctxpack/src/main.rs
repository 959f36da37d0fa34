use anyhow::Result;
use clap::Parser;
use ctxpack_aggregate::{RunConfig, print_run_summary, run};
use log::{debug, info};
use std::env;
use std::io::BufWriter;
use std::time::Instant;

/// Behavior is fully determined by the compiled-in constants and the state
/// of the current working directory; there are no tuning flags.
#[derive(Parser)]
#[command(name = "ctxpack")]
#[command(version)]
#[command(about = "Aggregate a project's local source files and import tree into context reports", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let _cli = Cli::parse();

    let start = Instant::now();

    let project_root = env::current_dir()?;
    info!("Using project root: {}", project_root.display());

    let cfg = RunConfig::for_root(project_root);
    debug!("Config: output_dir={:?}, entries={:?}", cfg.output_dir, cfg.entry_files);

    let report = run(&cfg)?;
    debug!(
        "Run complete: {} files aggregated, {} unresolved imports",
        report.files_aggregated, report.unresolved_imports
    );

    let elapsed_ms = start.elapsed().as_millis();
    print_run_summary(&mut stdout, &report, &cfg, elapsed_ms)?;

    Ok(())
}
