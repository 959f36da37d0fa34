//! Context aggregation for JavaScript/TypeScript projects.
//!
//! Starting from a fixed set of entry files, this crate walks the local
//! import graph depth-first, inlines every reachable file's contents into a
//! single aggregated report, and renders a cycle-annotated import tree.
//! Traversal is single-threaded and strictly ordered: each file's full
//! dependency subtree is explored before the next sibling import, and a
//! visited cache guarantees every file is aggregated at most once even when
//! the import graph contains cycles.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use ctxpack_aggregate::{RunConfig, print_run_summary, run};
//! use std::io::BufWriter;
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = RunConfig::for_root(std::env::current_dir()?);
//! let report = run(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! print_run_summary(&mut stdout, &report, &cfg, 0)?;
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod config;
mod constants;
mod hierarchy;
mod reporter;
mod runner;
mod tree;
mod types;

// Re-export public API
pub use config::{ExclusionRules, RunConfig};
pub use constants::{AGGREGATED_FILE, DEPENDENCY_MAP_FILE, IMPORT_TREE_FILE, OUTPUT_DIR};
pub use hierarchy::generate_import_tree;
pub use reporter::print_run_summary;
pub use runner::run;
pub use tree::generate_tree;
pub use types::{DependencyMap, Report};
