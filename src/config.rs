// src/config.rs
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::error::{AppError, Result};
pub use stream_wc_engine::config::{Config, ConfigBuilder};
use stream_wc_engine::options::CountSelection;
use stream_wc_engine::source::InputSource;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let sources = match &args.files0_from {
            Some(list) => sources_from_list(list)?,
            None => args.paths.iter().map(InputSource::from_arg).collect(),
        };

        let counts = CountSelection {
            lines: args.lines,
            words: args.words,
            chars: args.chars,
        };

        let config = Config::from_builder(
            ConfigBuilder::default()
                .sources(sources)
                .chunk_size(args.chunk_size.0)
                .strict(args.strict)
                .format(args.format)
                .counts(counts)
                .total(args.total),
        )?;
        Ok(config)
    }
}

fn sources_from_list(list: &Path) -> Result<Vec<InputSource>> {
    let list_err = |source| AppError::FileList {
        path: list.to_path_buf(),
        source,
    };
    let mut raw = Vec::new();
    if list == Path::new("-") {
        io::stdin().lock().read_to_end(&mut raw).map_err(list_err)?;
    } else {
        File::open(list)
            .and_then(|mut f| f.read_to_end(&mut raw))
            .map_err(list_err)?;
    }
    parse_file_list(&raw, &list.display().to_string())
}

/// Split a NUL separated list of names. A trailing NUL is optional.
pub fn parse_file_list(raw: &[u8], list_name: &str) -> Result<Vec<InputSource>> {
    let body = raw.strip_suffix(b"\0").unwrap_or(raw);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(|&b| b == 0)
        .enumerate()
        .map(|(i, name)| {
            if name.is_empty() {
                return Err(AppError::EmptyFileName {
                    list: list_name.to_string(),
                    index: i + 1,
                });
            }
            Ok(InputSource::from_arg(path_from_bytes(name)))
        })
        .collect()
}

/// File names are raw bytes on Unix and need not be UTF-8.
#[cfg(unix)]
fn path_from_bytes(name: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(name))
}

#[cfg(not(unix))]
fn path_from_bytes(name: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(name).into_owned())
}
