use anyhow::Result;
use dashmap::DashMap;
use log::{info, warn};
use path_clean::clean;
use std::{
    fs,
    path::{Path, PathBuf},
};

use ctxpack_core::{extract, resolve};

use crate::{
    config::RunConfig,
    constants::{FILE_DELIMITER, UNREADABLE_PLACEHOLDER},
    types::DependencyMap,
};

/// Mutable traversal state, threaded by reference through the recursion.
/// Scoped to a single run so repeated runs stay isolated.
pub struct RunState {
    /// Visited marker per absolute (lexically normalized) file path.
    pub processed: DashMap<PathBuf, bool>,
    pub resolve_cache: DashMap<(PathBuf, String), Option<PathBuf>>,
    pub contents: Vec<String>,
    pub dependency_map: DependencyMap,
    pub unresolved_imports: usize,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            processed: DashMap::new(),
            resolve_cache: DashMap::new(),
            contents: Vec::new(),
            dependency_map: DependencyMap::default(),
            unresolved_imports: 0,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregates every entry file and everything locally reachable from it,
/// in entry order. Returns the number of entries skipped because they were
/// missing or not regular files.
pub fn aggregate(cfg: &RunConfig, state: &mut RunState) -> Result<usize> {
    let mut skipped_entries = 0;

    for entry in &cfg.entry_files {
        let entry_path = clean(cfg.project_root.join(entry));
        if entry_path.is_file() {
            info!("Processing entry file: {}", entry);
            process_file(cfg, &entry_path, 0, state)?;
        } else {
            warn!("Entry file not found or is not a file: {}", entry);
            skipped_entries += 1;
        }
    }

    Ok(skipped_entries)
}

/// Visits one file: appends its content block, then recurses depth-first
/// into each resolved import before committing the file's dependency entry
/// (post-order).
///
/// The visited marker is set before any recursion; that ordering terminates
/// cyclic import graphs and keeps aggregation at-most-once.
fn process_file(cfg: &RunConfig, path: &Path, depth: usize, state: &mut RunState) -> Result<()> {
    if depth > cfg.max_depth {
        return Ok(());
    }
    if state.processed.contains_key(path) {
        return Ok(());
    }
    if cfg.exclusions.excludes_extension(path) {
        info!("Skipping excluded file: {}", relative_to_root(cfg, path));
        return Ok(());
    }

    state.processed.insert(path.to_path_buf(), true);

    let relative_path = relative_to_root(cfg, path);
    info!("Processing file: {}", relative_path);

    let content = read_file_content(path);
    let specifiers = extract(&content);

    state.contents.push(FILE_DELIMITER.to_string());
    state.contents.push(relative_path.clone());
    state.contents.push(String::new());
    state.contents.push(content);
    state.contents.push(String::new());

    let mut resolved_imports: Vec<PathBuf> = Vec::new();

    for spec in &specifiers {
        match resolve(&cfg.project_root, path, &spec.request, &state.resolve_cache) {
            Some(resolved) => {
                resolved_imports.push(resolved.clone());
                process_file(cfg, &resolved, depth + 1, state)?;
            }
            None => {
                warn!("Unable to resolve import path \"{}\" in {}", spec.request, relative_path);
                state.unresolved_imports += 1;
            }
        }
    }

    let dependencies = resolved_imports.iter().map(|p| relative_to_root(cfg, p)).collect();
    state.dependency_map.insert(relative_path, dependencies);

    Ok(())
}

fn read_file_content(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Error reading file {}: {}", path.display(), e);
            UNREADABLE_PLACEHOLDER.to_string()
        }
    }
}

fn relative_to_root(cfg: &RunConfig, path: &Path) -> String {
    path.strip_prefix(&cfg.project_root).unwrap_or(path).to_string_lossy().to_string()
}
