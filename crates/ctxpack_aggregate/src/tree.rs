use anyhow::Result;
use log::trace;
use std::{fs, path::Path};

use crate::config::ExclusionRules;

/// Renders a nested listing of `dir`, honoring the exclusion rules.
///
/// Entries appear in the filesystem's native enumeration order; no sorting
/// is applied. Returns an empty string for an empty or fully-excluded
/// directory, or once the recursion passes `max_depth`.
pub fn generate_tree(dir: &Path, rules: &ExclusionRules, max_depth: usize) -> Result<String> {
    generate_subtree(dir, rules, "", 0, max_depth)
}

fn generate_subtree(
    dir: &Path,
    rules: &ExclusionRules,
    prefix: &str,
    depth: usize,
    max_depth: usize,
) -> Result<String> {
    if depth > max_depth {
        return Ok(String::new());
    }

    let mut entries: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if rules.excludes_entry(&name) {
            trace!("Excluding entry from tree: {}", name);
            continue;
        }
        entries.push(name);
    }

    let mut lines: Vec<String> = Vec::new();
    let count = entries.len();

    for (index, name) in entries.into_iter().enumerate() {
        let full_path = dir.join(&name);
        let is_last = index == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        let next_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });

        lines.push(format!("{}{}{}", prefix, connector, name));

        if full_path.is_dir() {
            let subtree = generate_subtree(&full_path, rules, &next_prefix, depth + 1, max_depth)?;
            if !subtree.is_empty() {
                lines.push(subtree);
            }
        }
    }

    Ok(lines.join("\n"))
}
