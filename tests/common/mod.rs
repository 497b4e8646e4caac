use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub fn stream_wc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stream_wc"))
}

/// Temporary directory pre-filled with the given files.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let fixture = Self { dir: TempDir::new().unwrap() };
        for (name, contents) in files {
            fixture.write_bytes(name, contents.as_bytes());
        }
        fixture
    }

    /// Write raw bytes, for contents that are not valid UTF-8.
    pub fn write_bytes(&self, name: &str, contents: &[u8]) {
        fs::write(self.path(name), contents).unwrap();
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Command whose working directory is the fixture root, so names print short.
    pub fn command(&self) -> Command {
        let mut cmd = stream_wc();
        cmd.current_dir(self.dir.path());
        cmd
    }
}
