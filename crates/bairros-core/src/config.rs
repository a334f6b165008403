//! Run configuration.
//!
//! Every field has a default matching the conventional file names, so an empty JSON object is a
//! valid config.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "bairros_recife.csv";
pub const DEFAULT_OUTPUT: &str = "conexoes_bairros.csv";
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_LINK_TEMPLATE: &str = "Rua entre {origin} e {destination}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Adjacency CSV. `-` reads stdin.
    pub input: PathBuf,
    /// Edge-list CSV written by the exporter.
    pub output: PathBuf,
    pub load: LoadOptions,
    pub export: ExportOptions,
    /// How many neighborhoods the degree report lists.
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            load: LoadOptions::default(),
            export: ExportOptions::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| Error::Config {
            message: err.to_string(),
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| Error::Config {
            message: format!("{}: {err}", path.display()),
        })?;
        Self::from_json_str(&text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadOptions {
    /// Skip the first record instead of treating it as a row of neighborhoods.
    pub has_headers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    pub header: ExportHeader,
    /// Link label; `{origin}` and `{destination}` are replaced with the edge endpoints.
    pub link_template: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            header: ExportHeader::default(),
            link_template: DEFAULT_LINK_TEMPLATE.to_string(),
        }
    }
}

impl ExportOptions {
    /// Single pass, so endpoint names containing `{destination}` are not substituted again.
    pub fn link_label(&self, origin: &str, destination: &str) -> String {
        let mut out = String::with_capacity(
            self.link_template.len() + origin.len() + destination.len(),
        );
        let mut rest = self.link_template.as_str();
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{origin}") {
                out.push_str(origin);
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{destination}") {
                out.push_str(destination);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportHeader {
    pub origin: String,
    pub link: String,
    pub destination: String,
}

impl Default for ExportHeader {
    fn default() -> Self {
        Self {
            origin: "Bairro".to_string(),
            link: "Rua de ligação".to_string(),
            destination: "Bairro de destino".to_string(),
        }
    }
}

impl ExportHeader {
    pub fn as_record(&self) -> [&str; 3] {
        [&self.origin, &self.link, &self.destination]
    }
}
