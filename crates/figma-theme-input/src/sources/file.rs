//! Local file source.

use std::io;
use std::path::{Path, PathBuf};

use crate::source::DocumentSource;
use crate::InputError;

/// Read a Figma export from a file on disk.
///
/// # Example
///
/// ```no_run
/// use figma_theme_input::{DocumentSource, FileSource};
///
/// let json = FileSource::new("./figma-file.json").read()?;
/// # Ok::<(), figma_theme_input::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn read(&self) -> Result<String, InputError> {
        log::info!("reading Figma export from {}", self.path.display());
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(InputError::FileNotFound(self.path.clone()))
            }
            Err(e) => Err(InputError::file_read(&self.path, e)),
        }
    }
}
