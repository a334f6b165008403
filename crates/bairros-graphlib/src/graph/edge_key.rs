//! Edge key types.
//!
//! Keys are stored canonicalized (`v <= w`), so `{a, b}` and `{b, a}` hash to the same slot.

use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a> {
    pub(in crate::graph) v: &'a str,
    pub(in crate::graph) w: &'a str,
}

impl<'a> EdgeKeyView<'a> {
    pub(in crate::graph) fn canonical(v: &'a str, w: &'a str) -> Self {
        if v <= w { Self { v, w } } else { Self { v: w, w: v } }
    }
}

impl hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.v == self.v && key.w == self.w
    }
}

/// An unordered pair of node ids.
///
/// `v` is always the lexicographically smaller endpoint.
#[derive(Debug, Clone)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        let (v, w) = (v.into(), w.into());
        if v <= w { Self { v, w } } else { Self { v: w, w: v } }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }

    /// Returns the endpoint opposite to `id`, or `None` when `id` is not an endpoint.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.v == id {
            Some(self.w.as_str())
        } else if self.w == id {
            Some(self.v.as_str())
        } else {
            None
        }
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && self.w == other.w
    }
}

impl Eq for EdgeKey {}

// Must hash exactly like `EdgeKeyView` for `Equivalent` lookups to work.
impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v.as_str().hash(state);
        self.w.as_str().hash(state);
    }
}
