use log::debug;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::constants::{ENTRY_FILES, OUTPUT_DIR, TREE_DEPTH};

/// Names, patterns, and extensions skipped by both the tree renderer and the
/// file aggregator.
#[derive(Debug)]
pub struct ExclusionRules {
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub file_patterns: Vec<Regex>,
    pub extensions: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            directories: to_strings(&["node_modules", ".git", "android", "ios", "vendor"]),
            files: to_strings(&["package-lock.json", "yarn.lock"]),
            file_patterns: vec![Regex::new(r"\.env").unwrap()],
            extensions: to_strings(&[
                ".png", ".jpg", ".jpeg", ".svg", ".gif", ".bmp", ".tiff", ".ico",
            ]),
        }
    }
}

impl ExclusionRules {
    /// Whether a directory entry with this name is filtered from listings
    /// and traversal: by directory name, exact file name, filename pattern,
    /// or extension.
    pub fn excludes_entry(&self, name: &str) -> bool {
        if self.directories.iter().any(|d| d == name) || self.files.iter().any(|f| f == name) {
            return true;
        }
        if self.file_patterns.iter().any(|p| p.is_match(name)) {
            return true;
        }
        let ext = extension_of(name);
        !ext.is_empty() && self.extensions.iter().any(|e| *e == ext)
    }

    /// Whether a file's extension keeps it out of aggregation. Compared
    /// case-insensitively, unlike the listing filter.
    pub fn excludes_extension(&self, path: &Path) -> bool {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => format!(".{}", e.to_lowercase()),
            None => return false,
        };
        self.extensions.iter().any(|e| *e == ext)
    }
}

/// The entry name's suffix including the leading dot, or an empty string for
/// names without one (dotfiles like `.env` count as extensionless).
fn extension_of(name: &str) -> String {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some(e) => format!(".{}", e),
        None => String::new(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Inputs for one aggregation run.
///
/// Constructed from the compiled-in constants; fields are public so tests
/// can substitute their own roots, entries, and ceilings.
#[derive(Debug)]
pub struct RunConfig {
    pub project_root: PathBuf,
    pub output_dir: PathBuf,
    pub entry_files: Vec<String>,
    pub max_depth: usize,
    pub exclusions: ExclusionRules,
}

impl RunConfig {
    /// Run configuration rooted at `project_root`, with every other input
    /// taken from the compiled-in constants.
    pub fn for_root(project_root: PathBuf) -> Self {
        let output_dir = project_root.join(OUTPUT_DIR);
        debug!("Run configuration rooted at {}", project_root.display());
        Self {
            project_root,
            output_dir,
            entry_files: ENTRY_FILES.iter().map(|s| s.to_string()).collect(),
            max_depth: TREE_DEPTH,
            exclusions: ExclusionRules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_directory_names() {
        let rules = ExclusionRules::default();
        assert!(rules.excludes_entry("node_modules"));
        assert!(rules.excludes_entry(".git"));
    }

    #[test]
    fn test_excludes_exact_file_names() {
        let rules = ExclusionRules::default();
        assert!(rules.excludes_entry("package-lock.json"));
        assert!(rules.excludes_entry("yarn.lock"));
    }

    #[test]
    fn test_excludes_env_pattern() {
        let rules = ExclusionRules::default();
        assert!(rules.excludes_entry(".env"));
        assert!(rules.excludes_entry(".env.local"));
    }

    #[test]
    fn test_excludes_image_extensions() {
        let rules = ExclusionRules::default();
        assert!(rules.excludes_entry("logo.png"));
        assert!(!rules.excludes_entry("app.js"));
    }

    #[test]
    fn test_source_files_not_excluded() {
        let rules = ExclusionRules::default();
        assert!(!rules.excludes_entry("index.js"));
        assert!(!rules.excludes_entry("pages"));
    }

    #[test]
    fn test_excludes_extension_case_insensitive() {
        let rules = ExclusionRules::default();
        assert!(rules.excludes_extension(Path::new("/p/LOGO.PNG")));
        assert!(rules.excludes_extension(Path::new("/p/logo.png")));
        assert!(!rules.excludes_extension(Path::new("/p/index.js")));
        assert!(!rules.excludes_extension(Path::new("/p/Makefile")));
    }

    #[test]
    fn test_for_root_uses_constants() {
        let cfg = RunConfig::for_root(PathBuf::from("/project"));
        assert_eq!(cfg.output_dir, PathBuf::from("/project/runner/local-data"));
        assert_eq!(cfg.entry_files, vec!["pages/index.js".to_string()]);
        assert_eq!(cfg.max_depth, usize::MAX);
    }
}
