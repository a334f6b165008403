use crate::analyze::{DegreeReport, analyze_degrees};
use crate::build::build_graph;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::export::export_edges;
use crate::extract::extract_adjacency;
use crate::loader::load_rows;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Every neighborhood found, sorted.
    pub neighborhoods: Vec<String>,
    /// Consecutive pairs read from the input, before duplicate edges merge.
    pub raw_connection_count: usize,
    pub output_path: PathBuf,
    pub exported_edges: usize,
    pub degrees: DegreeReport,
}

/// Load, extract, build, export, analyze.
///
/// A load failure returns before anything is written to `config.output`.
pub fn run(config: &PipelineConfig) -> Result<RunReport> {
    let _span = tracing::info_span!("run", input = %config.input.display()).entered();

    let rows = load_rows(&config.input, &config.load)?;
    tracing::info!(rows = rows.len(), "read input");

    let adjacency = extract_adjacency(&rows);
    let graph = build_graph(&adjacency);
    let exported_edges = export_edges(&graph, &config.output, &config.export)?;
    let degrees = analyze_degrees(&graph, config.top_n);

    tracing::info!(
        vertices = degrees.vertex_count,
        edges = degrees.edge_count,
        "analysis complete"
    );

    Ok(RunReport {
        raw_connection_count: adjacency.connections.len(),
        neighborhoods: adjacency.neighborhoods,
        output_path: config.output.clone(),
        exported_edges,
        degrees,
    })
}
