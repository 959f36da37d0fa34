use anyhow::{Context, Result};
use log::info;
use std::fs;

use ctxpack_core::read_manifest;

use crate::{
    aggregator::{RunState, aggregate},
    config::RunConfig,
    constants::{AGGREGATED_FILE, DEPENDENCY_MAP_FILE, IMPORT_TREE_FILE},
    hierarchy::generate_import_tree,
    tree::generate_tree,
    types::Report,
};

/// Runs one full aggregation pass: output directory setup, repository tree,
/// manifest, depth-first file aggregation, then the aggregated-context and
/// import-tree reports plus the JSON dependency map.
///
/// Recoverable problems (missing entries, unresolved imports, unreadable
/// files, a missing manifest) are logged and worked around; anything else
/// aborts the run.
pub fn run(cfg: &RunConfig) -> Result<Report> {
    setup_output_dir(cfg)?;

    let repository_tree = generate_tree(&cfg.project_root, &cfg.exclusions, cfg.max_depth)
        .context("Failed to render the repository tree")?;
    let manifest = read_manifest(&cfg.project_root);

    let mut state = RunState::new();

    state.contents.push("📂 Repository Tree:".to_string());
    state.contents.push(repository_tree);
    state.contents.push(String::new());

    state.contents.push("📄 package.json:".to_string());
    state.contents.push(manifest);
    state.contents.push(String::new());

    let skipped_entries = aggregate(cfg, &mut state)?;

    let aggregated_path = cfg.output_dir.join(AGGREGATED_FILE);
    fs::write(&aggregated_path, state.contents.join("\n"))
        .with_context(|| format!("Failed to write {}", aggregated_path.display()))?;
    info!("Aggregated output generated successfully at {}", aggregated_path.display());

    let import_tree = generate_import_tree(&state.dependency_map, &cfg.entry_files);
    let import_tree_path = cfg.output_dir.join(IMPORT_TREE_FILE);
    fs::write(&import_tree_path, import_tree)
        .with_context(|| format!("Failed to write {}", import_tree_path.display()))?;
    info!("Import hierarchy tree generated successfully at {}", import_tree_path.display());

    let dependency_json = serde_json::to_string_pretty(&state.dependency_map)
        .context("Failed to serialize the dependency map")?;
    let dependency_map_path = cfg.output_dir.join(DEPENDENCY_MAP_FILE);
    fs::write(&dependency_map_path, dependency_json)
        .with_context(|| format!("Failed to write {}", dependency_map_path.display()))?;
    info!("Dependency map written to {}", dependency_map_path.display());

    Ok(Report {
        files_aggregated: state.processed.len(),
        unresolved_imports: state.unresolved_imports,
        skipped_entries,
    })
}

fn setup_output_dir(cfg: &RunConfig) -> Result<()> {
    if cfg.output_dir.exists() {
        info!("Output directory already exists at {}", cfg.output_dir.display());
    } else {
        fs::create_dir_all(&cfg.output_dir)
            .with_context(|| format!("Failed to create {}", cfg.output_dir.display()))?;
        info!("Output directory created at {}", cfg.output_dir.display());
    }
    Ok(())
}
