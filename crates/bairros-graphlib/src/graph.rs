//! Undirected simple-graph container.
//!
//! Nodes and edges are kept in insertion order; lookups go through Fx-hashed indexes. There are
//! no multi-edges: setting an edge that already exists (in either orientation) only updates its
//! label.

mod edge_key;
mod entries;

pub use edge_key::EdgeKey;

use edge_key::EdgeKeyView;
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Graph<N = (), E = ()>
where
    N: Default,
    E: Default,
{
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,
}

impl<N, E> Default for Graph<N, E>
where
    N: Default,
    E: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E>
where
    N: Default,
    E: Default,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    fn node_ix(&mut self, id: String) -> usize {
        if let Some(&idx) = self.node_index.get(id.as_str()) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label: N::default(),
        });
        self.node_index.insert(id, idx);
        idx
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let idx = self.node_ix(id.into());
        self.nodes[idx].label = label;
        self
    }

    /// Adds `id` with a default label unless it is already present.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        self.node_ix(id.into());
        self
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge keys in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        for e in &self.edges {
            f(&e.key, &e.label);
        }
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_inner(v.into(), w.into(), None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_inner(v.into(), w.into(), Some(label))
    }

    fn set_edge_inner(&mut self, v: String, w: String, label: Option<E>) -> &mut Self {
        if let Some(idx) = self.edge_index_of(&v, &w) {
            if let Some(label) = label {
                self.edges[idx].label = label;
            }
            return self;
        }

        let key = EdgeKey::new(v, w);
        let v_ix = self.node_ix(key.v.clone());
        let w_ix = self.node_ix(key.w.clone());
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            v_ix,
            w_ix,
            label: label.unwrap_or_default(),
        });
        self.edge_index.insert(key, idx);
        self
    }

    /// Connects consecutive ids: `[a, b, c]` sets `a-b` and `b-c`.
    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    fn edge_index_of(&self, v: &str, w: &str) -> Option<usize> {
        self.edge_index
            .get(&EdgeKeyView::canonical(v, w))
            .copied()
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index_of(v, w).is_some()
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        let idx = self.edge_index_of(v, w)?;
        Some(&self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str) -> Option<&mut E> {
        let idx = self.edge_index_of(v, w)?;
        Some(&mut self.edges[idx].label)
    }

    /// Edges incident to `v`, in insertion order.
    pub fn node_edges(&self, v: &str) -> Vec<&EdgeKey> {
        self.edges
            .iter()
            .filter(|e| e.key.v == v || e.key.w == v)
            .map(|e| &e.key)
            .collect()
    }

    /// Distinct nodes adjacent to `v`. A self-loop makes `v` its own neighbor.
    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in &self.edges {
            let Some(u) = e.key.other(v) else {
                continue;
            };
            if !out.contains(&u) {
                out.push(u);
            }
        }
        out
    }

    /// Number of edge endpoints at `v`; a self-loop contributes two.
    pub fn degree(&self, v: &str) -> usize {
        let Some(&ix) = self.node_index.get(v) else {
            return 0;
        };
        self.edges
            .iter()
            .map(|e| usize::from(e.v_ix == ix) + usize::from(e.w_ix == ix))
            .sum()
    }

    /// Degree of every node, in node insertion order.
    pub fn degrees(&self) -> Vec<(&str, usize)> {
        let mut counts = vec![0usize; self.nodes.len()];
        for e in &self.edges {
            counts[e.v_ix] += 1;
            counts[e.w_ix] += 1;
        }
        self.nodes
            .iter()
            .zip(counts)
            .map(|(n, d)| (n.id.as_str(), d))
            .collect()
    }
}
