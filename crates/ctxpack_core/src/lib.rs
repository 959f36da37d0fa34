//! Core utilities for the ctxpack tool.
//!
//! This crate provides the leaf pieces of the context aggregator:
//! - Extracting import specifiers from JS/TS file text (lexical scan, not a
//!   parser)
//! - Resolving relative and `@/`-aliased specifiers to files on disk
//! - Reading the project manifest

mod config;
mod constants;
mod extractor;
mod resolver;
mod types;

// Re-export public API
pub use config::read_manifest;
pub use constants::{ALIAS_PREFIX, ALIAS_ROOT_DIR, MANIFEST_FILE, RESOLVE_SUFFIXES};
pub use extractor::{extract, is_local_or_alias};
pub use resolver::resolve;
pub use types::{SpecKind, Specifier};
