//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with scripted mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read raw file contents.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write raw bytes, overwriting any existing file in place.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Console abstraction: blocking line input and user-facing output.
pub trait Console: Send + Sync {
    /// Print a prompt (no trailing newline) and read one line of input.
    /// The returned string has the line terminator stripped.
    fn read_line(&self, prompt: &str) -> io::Result<String>;

    /// Print one line of output.
    fn line(&self, msg: &str);

    /// Print an empty line.
    fn blank(&self) {
        self.line("");
    }
}

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Real console on stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        print!("{} ", prompt.cyan());
        io::stdout().flush()?;
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            // stdin closed mid-session; there is no way to continue the loop
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    fn line(&self, msg: &str) {
        println!("{}", msg);
    }
}
