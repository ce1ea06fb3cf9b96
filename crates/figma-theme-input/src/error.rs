//! Error types for document acquisition.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while acquiring a document.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input path does not exist.
    #[error("The specified file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The input path exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read from stdin.
    #[error("Failed to read stdin: {0}")]
    StdinFailed(#[source] io::Error),

    /// No API token is available for a download.
    #[error(
        "the FIGMA_TOKEN environment variable must be set to download files from the Figma API"
    )]
    MissingToken,

    /// The HTTP request could not be completed.
    #[error("Figma API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK.
    #[error("Non-200 status code from Figma API: {status}")]
    ApiStatus { status: u16 },
}

impl InputError {
    /// Create a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}
