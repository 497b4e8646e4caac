// crates/engine/src/lib.rs
use log::debug;

pub mod config;
pub mod decode;
pub mod error;
pub mod options;
pub mod processor;
pub mod scan;
pub mod source;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::source::InputSource;
use crate::stats::RunResult;

/// Count every source named in `config`, or standard input if there are none.
///
/// # Errors
///
/// Returns an error for an invalid configuration, or, in strict mode, for the
/// first source that fails. Otherwise per-source failures are collected in
/// `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    run_sources(&config.sources, config)
}

/// Count `sources` one after another, in order.
///
/// Each source gets a fresh scan state, so a word that ends one source and a
/// word that starts the next are counted separately. A failing source is
/// recorded under its display name and left out of the total.
///
/// # Errors
///
/// See [`run`].
pub fn run_sources(sources: &[InputSource], config: &Config) -> Result<RunResult> {
    config.check()?;

    let implicit = [InputSource::Stdin];
    let sources = if sources.is_empty() {
        &implicit[..]
    } else {
        sources
    };

    let mut result = RunResult::default();
    for source in sources {
        match processor::process_source(source, config) {
            Ok(stats) => result.stats.push(stats),
            Err(e) if config.strict => return Err(e.in_source(source.label())),
            Err(e) => {
                debug!("skipping {source}: {e}");
                result.errors.push((source.display_name(), e));
            }
        }
    }

    if result.stats.len() > 1 {
        result.total = Some(result.aggregate());
    }
    debug!(
        "{} source(s) counted, {} failed",
        result.stats.len(),
        result.errors.len()
    );

    Ok(result)
}
