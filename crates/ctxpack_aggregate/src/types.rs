use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Per-file record of which other files it imports, by root-relative
/// resolved path.
///
/// A file's entry is committed exactly once, after its entire dependency
/// subtree has been explored, so the insertion order is a post-order of the
/// traversal. The map may describe cycles; consumers must not assume
/// acyclicity. Serializes as a plain JSON object with sorted keys.
#[derive(Debug, Default)]
pub struct DependencyMap {
    entries: BTreeMap<String, Vec<String>>,
    order: Vec<String>,
}

impl DependencyMap {
    pub fn insert(&mut self, file: String, dependencies: Vec<String>) {
        if !self.entries.contains_key(&file) {
            self.order.push(file.clone());
        }
        self.entries.insert(file, dependencies);
    }

    pub fn get(&self, file: &str) -> Option<&[String]> {
        self.entries.get(file).map(|deps| deps.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File paths in the order their entries were committed.
    pub fn insertion_order(&self) -> &[String] {
        &self.order
    }
}

impl Serialize for DependencyMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

/// Outcome of one aggregation run, for the console summary.
#[derive(Debug, Clone)]
pub struct Report {
    pub files_aggregated: usize,
    pub unresolved_imports: usize,
    pub skipped_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_tracked() {
        let mut map = DependencyMap::default();
        map.insert("b.js".to_string(), vec![]);
        map.insert("a.js".to_string(), vec!["b.js".to_string()]);
        assert_eq!(map.insertion_order(), &["b.js".to_string(), "a.js".to_string()]);
    }

    #[test]
    fn test_serializes_as_sorted_object() {
        let mut map = DependencyMap::default();
        map.insert("b.js".to_string(), vec![]);
        map.insert("a.js".to_string(), vec!["b.js".to_string()]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a.js":["b.js"],"b.js":[]}"#);
    }
}
