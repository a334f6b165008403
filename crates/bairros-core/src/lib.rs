#![forbid(unsafe_code)]

//! Neighborhood adjacency graph.
//!
//! Reads a CSV where each row lists neighborhoods in street order, turns every row into a path
//! of undirected edges, writes the deduplicated edge list back out as CSV and ranks
//! neighborhoods by degree.
//!
//! The stages are usable on their own (`load_rows` → `extract_adjacency` → `build_graph` →
//! `edge_records` / `analyze_degrees`), or all at once through [`run`].

pub mod analyze;
pub mod build;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod loader;
mod pipeline;

pub use bairros_graphlib as graphlib;

pub use analyze::{DegreeReport, RankedNeighborhood, analyze_degrees, degree_map};
pub use build::{NeighborhoodGraph, build_graph};
pub use config::{ExportHeader, ExportOptions, LoadOptions, PipelineConfig};
pub use error::{Error, Result};
pub use export::{EdgeRecord, edge_records, export_edges, write_edge_records};
pub use extract::{Adjacency, extract_adjacency};
pub use loader::{Row, filter_row, load_rows, read_rows};
pub use pipeline::{RunReport, run};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
