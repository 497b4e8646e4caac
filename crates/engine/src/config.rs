// crates/engine/src/config.rs
use derive_builder::Builder;

use crate::error::{EngineError, Result};
use crate::options::{CountSelection, OutputFormat, TotalMode};
use crate::source::InputSource;

/// Bytes requested from a source per read.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

const ZERO_CHUNK: &str = "chunk size must be greater than zero";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Sources in the order they are reported. Empty means standard input.
    #[builder(default)]
    pub sources: Vec<InputSource>,
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: usize,
    /// Abort the batch at the first failing source.
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub counts: CountSelection,
    #[builder(default)]
    pub total: TotalMode,
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match self.chunk_size {
            Some(0) => Err(ZERO_CHUNK.to_string()),
            _ => Ok(()),
        }
    }
}

impl Config {
    /// Finish a builder, mapping its failure into [`EngineError::Config`].
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] if a field fails validation.
    pub fn from_builder(builder: &ConfigBuilder) -> Result<Self> {
        builder
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))
    }

    pub(crate) fn check(&self) -> Result<()> {
        check_chunk_size(self.chunk_size)
    }
}

pub(crate) fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(EngineError::Config(ZERO_CHUNK.to_string()));
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            strict: false,
            format: OutputFormat::default(),
            counts: CountSelection::default(),
            total: TotalMode::default(),
        }
    }
}
