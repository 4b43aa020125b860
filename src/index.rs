//! In-memory token-prefix matcher over the known contact names.

use hashbrown::HashSet;

/// Autocomplete index over the cached, ordered list of contact names.
///
/// Matching splits each full name into whitespace tokens and keeps the name
/// when any token starts with the typed prefix, case-insensitively. The
/// scan is O(names × tokens) per call, which is fine at contact-list scale;
/// no per-keystroke data structure is maintained.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over `names`, keeping their given order.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Replaces the cached name list, after a create or rename.
    pub fn rebuild(&mut self, names: Vec<String>) {
        self.names = names;
    }

    /// The cached names in store order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no names are cached.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Full names to suggest for a typed prefix.
    ///
    /// The empty prefix matches every name. Results are deduplicated and
    /// returned in lexicographic order, so equal inputs always yield equal
    /// suggestion lists.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for name in &self.names {
            let hit = prefix.is_empty()
                || name
                    .split_whitespace()
                    .any(|token| token.to_lowercase().starts_with(&prefix));
            if hit && seen.insert(name.as_str()) {
                out.push(name.clone());
            }
        }

        out.sort();
        out
    }
}
