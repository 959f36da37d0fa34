//! Run constants for the context aggregator.
//!
//! Behavior is fully determined by these compiled-in values and the state of
//! the filesystem at run time; there are no runtime flags.

/// Output directory, relative to the project root. Created if absent.
pub const OUTPUT_DIR: &str = "runner/local-data";

/// Aggregated-context report file name.
pub const AGGREGATED_FILE: &str = "aggregated-context.txt";

/// Import-hierarchy report file name.
pub const IMPORT_TREE_FILE: &str = "import-tree.txt";

/// Machine-readable dependency map file name.
pub const DEPENDENCY_MAP_FILE: &str = "dependency-map.json";

/// Entry files the traversal starts from, in order, relative to the root.
pub const ENTRY_FILES: &[&str] = &["pages/index.js"];

/// Delimiter line preceding each aggregated file block.
pub const FILE_DELIMITER: &str = "<---New File--->";

/// Placeholder substituted when a file's content cannot be read as text.
pub const UNREADABLE_PLACEHOLDER: &str = "// Unable to read file content.";

/// Traversal depth ceiling. Unbounded in practice; the `depth > TREE_DEPTH`
/// check only bites when a finite ceiling is configured.
pub const TREE_DEPTH: usize = usize::MAX;
