use dashmap::DashMap;
use log::{debug, trace};
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::{ALIAS_PREFIX, ALIAS_ROOT_DIR, RESOLVE_SUFFIXES};

/// Resolves an import specifier to a concrete file on disk.
///
/// `@/`-prefixed specifiers rebase onto the alias root under `root`; all
/// other specifiers resolve against the importing file's directory. Joined
/// paths are normalized lexically, so the cache keys stay consistent across
/// `./` and `../` spellings. Returns `None` when no candidate exists as a
/// regular file; callers treat that as a warning, not an error.
pub fn resolve(
    root: &Path,
    from_file: &Path,
    request: &str,
    cache: &DashMap<(PathBuf, String), Option<PathBuf>>,
) -> Option<PathBuf> {
    let key = (from_file.to_path_buf(), request.to_string());
    if let Some(v) = cache.get(&key) {
        trace!("Cache hit for resolve: '{}' from {}", request, from_file.display());
        return v.clone();
    }
    trace!("Resolving: '{}' from {}", request, from_file.display());

    let base = if let Some(sub_path) = request.strip_prefix(ALIAS_PREFIX) {
        clean(root.join(ALIAS_ROOT_DIR).join(sub_path))
    } else {
        let dir = from_file.parent().unwrap_or(root);
        clean(dir.join(request))
    };

    let resolved = probe(&base);
    match &resolved {
        Some(p) => debug!("Resolved '{}' to {}", request, p.display()),
        None => trace!("No candidate found for '{}'", request),
    }

    cache.insert(key, resolved.clone());
    resolved
}

/// Probes candidates in fixed priority order: for each suffix, the base path
/// with the suffix appended, then the base path as a directory holding an
/// `index` file with that suffix. The first regular file wins.
fn probe(base: &Path) -> Option<PathBuf> {
    for suffix in RESOLVE_SUFFIXES {
        let candidate = PathBuf::from(format!("{}{}", base.display(), suffix));
        if candidate.is_file() {
            return Some(candidate);
        }

        let index = base.join(format!("index{}", suffix));
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_relative_with_extension_probing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        let about = create_test_file(root, "pages/about.ts", "");

        let cache = DashMap::new();
        let resolved = resolve(root, &from, "./about", &cache);
        assert_eq!(resolved, Some(about));
    }

    #[test]
    fn test_typescript_beats_javascript() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        let ts = create_test_file(root, "pages/about.ts", "");
        create_test_file(root, "pages/about.js", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "./about", &cache), Some(ts));
    }

    #[test]
    fn test_bare_path_beats_suffixed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        let bare = create_test_file(root, "pages/LICENSE", "");
        create_test_file(root, "pages/LICENSE.ts", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "./LICENSE", &cache), Some(bare));
    }

    #[test]
    fn test_directory_index_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        let index = create_test_file(root, "pages/components/index.tsx", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "./components", &cache), Some(index));
    }

    #[test]
    fn test_index_probed_before_later_suffixes() {
        // about/index.ts is tried during the ".ts" round, before about.js.
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        let index = create_test_file(root, "pages/about/index.ts", "");
        create_test_file(root, "pages/about.js", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "./about", &cache), Some(index));
    }

    #[test]
    fn test_parent_relative_specifier() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/blog/post.js", "");
        let helpers = create_test_file(root, "utils/helpers.js", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "../../utils/helpers", &cache), Some(helpers));
    }

    #[test]
    fn test_alias_resolves_under_src() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        let widget = create_test_file(root, "src/components/Widget.tsx", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "@/components/Widget", &cache), Some(widget));
    }

    #[test]
    fn test_alias_index_variant() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        let lib = create_test_file(root, "src/lib/index.ts", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "@/lib", &cache), Some(lib));
    }

    #[test]
    fn test_unresolved_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "./missing", &cache), None);
        // Misses are cached too.
        assert_eq!(cache.len(), 1);
        assert_eq!(resolve(root, &from, "./missing", &cache), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_directory_without_index_unresolved() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "pages/index.js", "");
        fs::create_dir_all(root.join("pages/empty")).unwrap();

        let cache = DashMap::new();
        assert_eq!(resolve(root, &from, "./empty", &cache), None);
    }
}
