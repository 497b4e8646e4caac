// src/app.rs
use std::io::{self, Write};
use std::process::ExitCode;

use log::LevelFilter;

use crate::args::Args;
use crate::config::Config;
use crate::presentation::{self, failure_label};

/// Install the stderr logger. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Count the sources named by `args` and print the report to stdout.
///
/// Failed sources are reported on stderr and turn the exit status into a
/// failure; the other sources are still counted and printed.
///
/// # Errors
/// Returns an error if the arguments cannot be turned into a configuration,
/// if a strict run hits a failing source, or if writing the report fails.
pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = Config::try_from(args)?;
    let result = stream_wc_engine::run(&config)?;

    for (name, err) in &result.errors {
        eprintln!("stream_wc: {}: {err}", failure_label(name));
    }

    let mut out = io::stdout().lock();
    presentation::emit(&result, &config, &mut out)?;
    out.flush()?;

    Ok(if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
