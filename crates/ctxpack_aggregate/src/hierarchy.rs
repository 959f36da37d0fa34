use log::debug;
use path_clean::clean;
use std::collections::HashSet;

use crate::types::DependencyMap;

/// Renders the cycle-annotated "what imports what" tree for a run.
///
/// Works purely off the dependency map; paths without an entry (excluded or
/// unresolved files) render as leaves. The map may contain cycles.
pub fn generate_import_tree(map: &DependencyMap, entry_files: &[String]) -> String {
    let mut lines: Vec<String> = vec!["📂 Import Hierarchy:".to_string()];
    let mut visited: HashSet<String> = HashSet::new();

    for entry in entry_files {
        let entry_path = clean(entry).to_string_lossy().to_string();
        push_subtree(&entry_path, map, &mut lines, "", &mut visited);
    }

    debug!("Rendered import hierarchy ({} lines)", lines.len());
    lines.join("\n")
}

/// Appends one line per file. Each child call receives the parent's prefix
/// plus a fresh connector segment, so connectors accumulate level by level,
/// and its own copy of the ancestor set, so sibling subtrees never see each
/// other's ancestors. A path already in the set is annotated `(circular)`
/// and not expanded further.
fn push_subtree(
    path: &str,
    map: &DependencyMap,
    lines: &mut Vec<String>,
    prefix: &str,
    visited: &mut HashSet<String>,
) {
    let circular = visited.contains(path);
    let annotation = if circular { " (circular)" } else { "" };
    lines.push(format!("{}{}{}", prefix, path, annotation));

    if circular {
        return;
    }
    visited.insert(path.to_string());

    let dependencies = map.get(path).unwrap_or(&[]);
    let count = dependencies.len();

    for (index, dependency) in dependencies.iter().enumerate() {
        let is_last = index == count - 1;
        let next_prefix = format!("{}{}", prefix, if is_last { "└── " } else { "├── " });
        let mut child_visited = visited.clone();
        push_subtree(dependency, map, lines, &next_prefix, &mut child_visited);
    }
}
