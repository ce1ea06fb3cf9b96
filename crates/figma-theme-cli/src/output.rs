//! Where the serialized theme goes.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to standard output
    Stdout,
    /// Write to a specific file
    File(PathBuf),
}

impl OutputDestination {
    /// Pick the destination for an optional `--out` path.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputDestination::File(path),
            None => OutputDestination::Stdout,
        }
    }

    /// Writes text content to this destination.
    ///
    /// Stdout gets a trailing newline, files get the content as is.
    pub fn write_text(&self, content: &str) -> std::io::Result<()> {
        match self {
            OutputDestination::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", content)?;
                handle.flush()
            }
            OutputDestination::File(path) => {
                validate_path(path)?;
                log::info!("writing theme to {}", path.display());
                std::fs::write(path, content)
            }
        }
    }
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
    }
    Ok(())
}
