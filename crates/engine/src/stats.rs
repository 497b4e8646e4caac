// crates/engine/src/stats.rs
use serde::Serialize;
use stream_wc_shared_kernel::Counters;

use crate::error::EngineError;

/// Counts for one successfully processed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub name: String,
    #[serde(flatten)]
    pub counters: Counters,
}

impl FileStats {
    pub fn new(name: impl Into<String>, counters: Counters) -> Self {
        Self {
            name: name.into(),
            counters,
        }
    }
}

/// Outcome of a batch run.
///
/// `stats` and `errors` keep the order in which sources were given.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<FileStats>,
    pub errors: Vec<(String, EngineError)>,
    /// Set only when more than one source was counted.
    pub total: Option<Counters>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Combined counts of every successful source.
    pub fn aggregate(&self) -> Counters {
        self.stats.iter().map(|s| s.counters).sum()
    }
}
