use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The two numeric input streams feeding an embedding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Cover,
    Secret,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Cover => write!(f, "cover"),
            StreamKind::Secret => write!(f, "secret"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a cover or secret source that could not be opened
    #[error("Source {path:?} is not available")]
    SourceUnavailable { path: PathBuf, source: io::Error },

    /// Represents a secret stream that ran out before every pixel received its digits
    #[error("Secret bit stream exhausted: {needed} digits required, {got} available")]
    SecretExhausted { needed: usize, got: usize },

    /// Represents a cover stream holding fewer pixels than the matrix
    #[error("Cover pixel stream exhausted: {needed} pixels required, {got} available")]
    CoverExhausted { needed: usize, got: usize },

    /// Represents a malformed or out-of-range token in one of the input streams
    #[error("Invalid {stream} value {token:?} at position {index}")]
    InvalidInput {
        stream: StreamKind,
        index: usize,
        token: String,
    },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: io::Error },
}
