//! Constants for specifier resolution.
//!
//! Resolution probes candidates suffix by suffix: for each entry below, the
//! base path with the suffix appended is tried as a file, then the base path
//! is tried as a directory holding `index<suffix>`. The leading empty entry
//! makes the bare path (and a bare `index` file) the first candidates.

/// Suffixes probed when resolving an import specifier, in priority order.
pub const RESOLVE_SUFFIXES: &[&str] = &["", ".ts", ".tsx", ".js", ".jsx"];

/// Alias prefix that remaps onto `ALIAS_ROOT_DIR` under the project root
/// instead of resolving against the importing file's directory.
pub const ALIAS_PREFIX: &str = "@/";

/// Directory under the project root that `ALIAS_PREFIX` maps to.
pub const ALIAS_ROOT_DIR: &str = "src";

/// Project manifest inlined at the top of the aggregated report.
pub const MANIFEST_FILE: &str = "package.json";
