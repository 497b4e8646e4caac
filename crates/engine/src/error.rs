// crates/engine/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Invalid UTF-8 found while decoding a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid UTF-8 sequence of {len} byte(s) at byte offset {offset}")]
    InvalidSequence { offset: u64, len: usize },

    #[error("incomplete UTF-8 sequence at end of input (byte offset {offset})")]
    Truncated { offset: u64 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("open failed: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A source failure carried out of a strict run, tagged with its name.
    #[error("{name}: {error}")]
    Source {
        name: String,
        error: Box<EngineError>,
    },
}

impl EngineError {
    pub fn is_decode(&self) -> bool {
        match self {
            Self::Decode(_) => true,
            Self::Source { error, .. } => error.is_decode(),
            _ => false,
        }
    }

    pub fn in_source(self, name: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            error: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
