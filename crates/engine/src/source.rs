// crates/engine/src/source.rs
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::trace;

use crate::decode::Utf8Decoder;
use crate::error::{EngineError, Result};

/// How standard input is named when it fails.
pub const STDIN_LABEL: &str = "standard input";

/// Where the bytes of one source come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// `-` names standard input, anything else is a path.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let arg = arg.as_ref();
        if arg == Path::new("-") {
            Self::Stdin
        } else {
            Self::Path(arg.to_path_buf())
        }
    }

    /// Name shown next to the counts; empty for standard input.
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => String::new(),
            Self::Path(path) => path.display().to_string(),
        }
    }

    /// Name used in error messages; standard input is spelled out.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => STDIN_LABEL.to_string(),
            Self::Path(_) => self.display_name(),
        }
    }

    /// Open the source for reading. The handle is released when dropped.
    ///
    /// # Errors
    /// Returns [`EngineError::Open`] if the file cannot be opened or is a
    /// directory.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin())),
            Self::Path(path) => {
                let open_err = |source| EngineError::Open {
                    path: path.clone(),
                    source,
                };
                let file = File::open(path).map_err(open_err)?;
                if file.metadata().map_err(open_err)?.is_dir() {
                    return Err(open_err(io::Error::new(
                        io::ErrorKind::IsADirectory,
                        "Is a directory",
                    )));
                }
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Lazy sequence of decoded text chunks read from a byte source.
///
/// Each item is the text decoded from one buffer fill. An item may be empty
/// when a read delivered only the first bytes of a multi-byte character. The
/// sequence ends at end of input and is not restartable; after an error it
/// yields nothing more.
pub struct TextChunks<R> {
    reader: BufReader<R>,
    decoder: Utf8Decoder,
    done: bool,
}

impl<R: Read> TextChunks<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(chunk_size, reader),
            decoder: Utf8Decoder::new(),
            done: false,
        }
    }

    fn next_chunk(&mut self) -> Result<Option<String>> {
        let buf = self
            .reader
            .fill_buf()
            .map_err(|source| EngineError::Read { source })?;

        if buf.is_empty() {
            self.decoder.finish()?;
            return Ok(None);
        }

        let mut text = String::with_capacity(buf.len());
        self.decoder.decode(buf, &mut text)?;
        let len = buf.len();
        self.reader.consume(len);
        trace!("decoded {len} bytes into {} chars", text.chars().count());
        Ok(Some(text))
    }
}

impl<R: Read> Iterator for TextChunks<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_chunk() {
            Ok(Some(text)) => Some(Ok(text)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
