//! Degree statistics.

use crate::build::NeighborhoodGraph;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedNeighborhood {
    pub name: String,
    pub degree: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DegreeReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Highest degree first; equal degrees keep node order.
    pub top: Vec<RankedNeighborhood>,
}

/// Degree of every neighborhood, keyed in graph node order.
pub fn degree_map(graph: &NeighborhoodGraph) -> IndexMap<String, usize> {
    graph
        .degrees()
        .into_iter()
        .map(|(name, degree)| (name.to_string(), degree))
        .collect()
}

pub fn analyze_degrees(graph: &NeighborhoodGraph, top_n: usize) -> DegreeReport {
    let mut ranked: Vec<(String, usize)> = degree_map(graph).into_iter().collect();
    // `sort_by` is stable; ties stay in node order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    DegreeReport {
        vertex_count: graph.node_count(),
        edge_count: graph.edge_count(),
        top: ranked
            .into_iter()
            .map(|(name, degree)| RankedNeighborhood { name, degree })
            .collect(),
    }
}
