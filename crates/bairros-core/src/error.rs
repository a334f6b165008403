use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Failed to write {sink}: {message}")]
    Write { sink: String, message: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl Error {
    pub(crate) fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(sink: impl Into<String>, message: impl ToString) -> Self {
        Self::Write {
            sink: sink.into(),
            message: message.to_string(),
        }
    }
}
