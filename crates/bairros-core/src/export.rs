//! Edge-list export.
//!
//! Records are built in full by [`edge_records`] and then written in one pass.

use crate::build::NeighborhoodGraph;
use crate::config::ExportOptions;
use crate::error::{Error, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub origin: String,
    pub link: String,
    pub destination: String,
}

/// One record per distinct edge, in the graph's edge order.
pub fn edge_records(graph: &NeighborhoodGraph, options: &ExportOptions) -> Vec<EdgeRecord> {
    graph
        .edges()
        .map(|e| EdgeRecord {
            origin: e.v.clone(),
            link: options.link_label(&e.v, &e.w),
            destination: e.w.clone(),
        })
        .collect()
}

pub fn write_edge_records<W: Write>(
    writer: W,
    sink: &str,
    records: &[EdgeRecord],
    options: &ExportOptions,
) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(options.header.as_record())
        .map_err(|err| Error::write(sink, err))?;
    for r in records {
        out.write_record([&r.origin, &r.link, &r.destination])
            .map_err(|err| Error::write(sink, err))?;
    }
    out.flush().map_err(|err| Error::write(sink, err))
}

/// Writes the edge list of `graph` to `path`, returning the number of data rows.
pub fn export_edges(
    graph: &NeighborhoodGraph,
    path: &Path,
    options: &ExportOptions,
) -> Result<usize> {
    let sink = path.display().to_string();
    let records = edge_records(graph, options);
    let file = std::fs::File::create(path).map_err(|err| Error::write(sink.as_str(), err))?;
    write_edge_records(std::io::BufWriter::new(file), &sink, &records, options)?;

    tracing::info!(path = %sink, edges = records.len(), "saved edge list");
    Ok(records.len())
}
