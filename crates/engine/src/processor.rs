// crates/engine/src/processor.rs
use std::io::Read;

use log::debug;
use stream_wc_shared_kernel::Counters;

use crate::config::{Config, check_chunk_size};
use crate::error::Result;
use crate::scan::ScanState;
use crate::source::{InputSource, TextChunks};
use crate::stats::FileStats;

/// Open and count a single source.
///
/// The source handle is dropped before returning, whether or not counting
/// succeeded.
///
/// # Errors
/// Returns the open, read or decode failure of this source.
pub fn process_source(source: &InputSource, config: &Config) -> Result<FileStats> {
    let reader = source.open()?;
    debug!("counting {source}");
    let counters = process(reader, config.chunk_size)?;
    debug!(
        "{source}: {} lines, {} words, {} chars",
        counters.lines, counters.words, counters.chars
    );
    Ok(FileStats::new(source.display_name(), counters))
}

/// Count everything `reader` yields, decoding it `chunk_size` bytes at a time.
///
/// # Errors
/// Returns [`crate::error::EngineError::Config`] for a zero `chunk_size`, and
/// [`crate::error::EngineError::Read`] or [`crate::error::EngineError::Decode`]
/// when the input fails; partial counts are discarded.
pub fn process<R: Read>(reader: R, chunk_size: usize) -> Result<Counters> {
    check_chunk_size(chunk_size)?;
    process_chunks(TextChunks::new(reader, chunk_size))
}

/// Fold already decoded chunks into counts and finalize once at the end.
///
/// # Errors
/// Returns the first error yielded by `chunks`.
pub fn process_chunks<I>(chunks: I) -> Result<Counters>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut state = ScanState::new();
    for chunk in chunks {
        state = state.feed(&chunk?);
    }
    Ok(state.finish())
}
