// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] stream_wc_engine::error::EngineError),

    #[error("cannot read file list '{path}': {source}")]
    FileList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{list}: invalid zero-length file name at entry {index}")]
    EmptyFileName { list: String, index: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;
