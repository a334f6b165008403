#![forbid(unsafe_code)]

//! Graph container APIs used by `bairros`.
//!
//! A small undirected simple graph keyed by string ids: no multi-edges, endpoints canonicalized
//! so `{a, b}` and `{b, a}` are the same edge, insertion order preserved for both nodes and
//! edges.

mod graph;

pub use graph::{EdgeKey, Graph};
