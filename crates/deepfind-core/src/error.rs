//! Error type for document decoding.
//!
//! Searching never fails: a missing key is `None`, not an error. Only reading
//! and decoding input documents can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid JSON on line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
