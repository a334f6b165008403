use crate::extract::Adjacency;
use bairros_graphlib::Graph;

/// Undirected neighborhood graph. Node and edge labels are unused.
pub type NeighborhoodGraph = Graph<(), ()>;

/// Adds every neighborhood (in the given order) and then every connection.
///
/// Repeated connections, in either orientation, collapse into one edge.
pub fn build_graph(adjacency: &Adjacency) -> NeighborhoodGraph {
    let mut g = NeighborhoodGraph::new();
    for n in &adjacency.neighborhoods {
        g.ensure_node(n.as_str());
    }
    for (v, w) in &adjacency.connections {
        g.set_edge(v.as_str(), w.as_str());
    }

    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        merged = adjacency.connections.len().saturating_sub(g.edge_count()),
        "built graph"
    );
    g
}
