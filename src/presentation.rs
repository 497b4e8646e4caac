// src/presentation.rs
use std::io::Write;

use serde::Serialize;
use stream_wc_engine::config::Config;
use stream_wc_engine::source::STDIN_LABEL;
use stream_wc_engine::options::{CountSelection, OutputFormat, TotalMode};
use stream_wc_engine::stats::{FileStats, RunResult};
use stream_wc_shared_kernel::Counters;

/// Write the report for `result` in the configured format.
pub fn emit(result: &RunResult, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let total = total_row(result, config.total);
    match config.format {
        OutputFormat::Plain => write_plain(result, total, config.counts.resolved(), out),
        OutputFormat::Json => write_json(result, total, out),
    }
}

/// Name printed for a failed source; standard input has an empty name.
pub fn failure_label(name: &str) -> &str {
    if name.is_empty() { STDIN_LABEL } else { name }
}

fn total_row(result: &RunResult, mode: TotalMode) -> Option<Counters> {
    match mode {
        TotalMode::Auto => result.total,
        TotalMode::Always => Some(result.total.unwrap_or_else(|| result.aggregate())),
        TotalMode::Never => None,
    }
}

fn write_plain(
    result: &RunResult,
    total: Option<Counters>,
    counts: CountSelection,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let widest = result
        .stats
        .iter()
        .map(|s| s.counters)
        .chain(total)
        .map(|c| widest_selected(&c, counts))
        .max()
        .unwrap_or(0);
    let width = widest.to_string().len();

    for s in &result.stats {
        writeln!(out, "{}", format_row(&s.counters, &s.name, counts, width))?;
    }
    if let Some(total) = total {
        writeln!(out, "{}", format_row(&total, "total", counts, width))?;
    }
    Ok(())
}

fn widest_selected(counters: &Counters, counts: CountSelection) -> usize {
    [
        (counts.lines, counters.lines.value()),
        (counts.words, counters.words.value()),
        (counts.chars, counters.chars.value()),
    ]
    .into_iter()
    .filter_map(|(shown, value)| shown.then_some(value))
    .max()
    .unwrap_or(0)
}

/// One `wc` style line: selected counts right aligned, then the name if any.
pub fn format_row(counters: &Counters, name: &str, counts: CountSelection, width: usize) -> String {
    let mut columns = Vec::with_capacity(3);
    if counts.lines {
        columns.push(format!("{:>width$}", counters.lines));
    }
    if counts.words {
        columns.push(format!("{:>width$}", counters.words));
    }
    if counts.chars {
        columns.push(format!("{:>width$}", counters.chars));
    }

    let mut row = columns.join(" ");
    if !name.is_empty() {
        row.push(' ');
        row.push_str(name);
    }
    row
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileStats],
    errors: Vec<JsonError<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<Counters>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    name: &'a str,
    message: String,
}

fn write_json(result: &RunResult, total: Option<Counters>, out: &mut impl Write) -> anyhow::Result<()> {
    let report = JsonReport {
        files: &result.stats,
        errors: result
            .errors
            .iter()
            .map(|(name, e)| JsonError {
                name,
                message: e.to_string(),
            })
            .collect(),
        total,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
