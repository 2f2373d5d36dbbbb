//! Failure taxonomy for reading an entries document.

use thiserror::Error;

/// Coarse category of a [`ReadError`], for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Malformed,
    Schema,
}

#[derive(Debug, Error)]
pub enum ReadError {
    /// The source does not exist or cannot be read. `location` is the file
    /// path, or `<reader>` for sources handed in as a byte stream.
    #[error("cannot read entries from {location}: {source}")]
    NotFound {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The content is not syntactically valid JSON.
    #[error("entries document is not valid JSON: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    /// The JSON is valid but does not have the expected shape.
    #[error("entries document schema error at {path}: {reason}")]
    Schema { path: String, reason: String },
}

impl ReadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::NotFound { .. } => ErrorKind::NotFound,
            ReadError::Malformed { .. } => ErrorKind::Malformed,
            ReadError::Schema { .. } => ErrorKind::Schema,
        }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        ReadError::Schema {
            path: path.into(),
            reason: "required key is missing".to_string(),
        }
    }
}
