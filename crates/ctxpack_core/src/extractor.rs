use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::ALIAS_PREFIX;
use crate::types::{SpecKind, Specifier};

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:[\w*\s{},]*\s+from\s+)?["']([^"']+)["'];?"#).unwrap()
});

static REQUIRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"require\(["']([^"']+)["']\)"#).unwrap());

/// Scans file text for import statements and require calls, keeping only
/// specifiers that name local or alias-prefixed modules.
///
/// This is a lexical scan, not a parser: non-literal specifiers are missed,
/// and import-shaped text inside comments or strings is matched. All
/// import-statement matches (in textual order) precede all require matches
/// (in textual order); duplicates are kept.
pub fn extract(src: &str) -> Vec<Specifier> {
    let mut specs: Vec<Specifier> = Vec::new();

    for caps in IMPORT_RE.captures_iter(src) {
        push_if_local(&caps[1], SpecKind::Import, &mut specs);
    }

    for caps in REQUIRE_RE.captures_iter(src) {
        push_if_local(&caps[1], SpecKind::Require, &mut specs);
    }

    debug!("Extracted {} local import specifiers", specs.len());
    specs
}

fn push_if_local(request: &str, kind: SpecKind, specs: &mut Vec<Specifier>) {
    if is_local_or_alias(request) {
        trace!("Found {:?} specifier: '{}'", kind, request);
        specs.push(Specifier { request: request.to_string(), kind });
    } else {
        trace!("Ignoring non-local specifier: '{}'", request);
    }
}

/// A specifier is locally relevant when it is relative (`.`-leading) or
/// alias-prefixed; bare package names never reach the resolver.
pub fn is_local_or_alias(request: &str) -> bool {
    request.starts_with('.') || request.starts_with(ALIAS_PREFIX)
}
