//! Row loading.
//!
//! Every record of the input becomes one [`Row`]: its cells in column order, trimmed, with blank
//! cells dropped. Rows may be ragged.

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Neighborhood labels of one input record, in column order.
pub type Row = Vec<String>;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

pub fn load_rows(path: &Path, options: &LoadOptions) -> Result<Vec<Row>> {
    if path == Path::new(STDIN_PATH) {
        return read_rows(std::io::stdin().lock(), "<stdin>", options);
    }

    let file = std::fs::File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::parse(path.display().to_string(), err),
    })?;
    read_rows(file, &path.display().to_string(), options)
}

pub fn read_rows<R: Read>(reader: R, source_name: &str, options: &LoadOptions) -> Result<Vec<Row>> {
    // Headers are handled here rather than by `csv` so an empty source can be told apart from a
    // header-only one.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Row> = Vec::new();
    let mut seen_any = false;
    for record in reader.records() {
        let record = record.map_err(|err| Error::parse(source_name, err))?;
        if !seen_any {
            seen_any = true;
            if options.has_headers {
                tracing::debug!(header = ?record, "skipping header record");
                continue;
            }
        }
        rows.push(filter_row(record.iter()));
    }

    if !seen_any {
        return Err(Error::parse(source_name, "no columns to parse from file"));
    }

    tracing::debug!(source = source_name, rows = rows.len(), "loaded rows");
    Ok(rows)
}

/// Keeps non-blank cells, trimmed, in their original order.
pub fn filter_row<'a, I>(cells: I) -> Row
where
    I: IntoIterator<Item = &'a str>,
{
    cells
        .into_iter()
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}
