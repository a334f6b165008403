//! Adjacency extraction.
//!
//! Each row is read as a path: `[a, b, c]` yields `(a, b)` and `(b, c)`, never `(a, c)`.

use crate::loader::Row;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Adjacency {
    /// Distinct labels across all rows, sorted.
    pub neighborhoods: Vec<String>,
    /// Consecutive pairs in row order. Not deduplicated.
    pub connections: Vec<(String, String)>,
}

pub fn extract_adjacency(rows: &[Row]) -> Adjacency {
    let mut neighborhoods: BTreeSet<&str> = BTreeSet::new();
    let mut connections: Vec<(String, String)> = Vec::new();

    for row in rows {
        neighborhoods.extend(row.iter().map(String::as_str));
        // Adjacent repeats are paired as-is and become self-loops.
        connections.extend(
            row.windows(2)
                .map(|pair| (pair[0].clone(), pair[1].clone())),
        );
    }

    tracing::debug!(
        neighborhoods = neighborhoods.len(),
        connections = connections.len(),
        "extracted adjacency"
    );

    Adjacency {
        neighborhoods: neighborhoods.into_iter().map(str::to_string).collect(),
        connections,
    }
}
