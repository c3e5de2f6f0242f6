//! Label interner for graph nodes.
//!
//! Maps node labels to dense `usize` ids in order of first appearance, so the
//! traversal can work over `Vec`-indexed adjacency lists and visited flags.
//! Ids are never reused; there is no removal.
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::LabelInterner;
//!
//! let mut interner = LabelInterner::new();
//! let a = interner.intern("A");
//! let b = interner.intern("B");
//! assert_eq!(interner.intern("A"), a);
//!
//! assert_eq!((a, b), (0, 1));
//! assert_eq!(interner.resolve(b), Some("B"));
//! ```

use rustc_hash::FxHashMap;

/// Assigns dense ids to string labels in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct LabelInterner {
    index: FxHashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, assigning the next id if it is new.
    pub fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), id);
        id
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn resolve(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Labels in id order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
