//! Stdin source.

use std::sync::Arc;

use crate::env::{RealStdin, StdinReader};
use crate::source::DocumentSource;
use crate::InputError;

/// Read a Figma export from stdin.
///
/// Unlike a fallback source, this one is chosen explicitly (the CLI
/// selects it for the `-` argument), so it reads stdin even when it is a
/// terminal and returns whatever text arrives, empty included. An empty
/// document is then rejected by the parser.
///
/// # Testing
///
/// Use [`StdinSource::with_reader`] to inject a mock:
///
/// ```
/// use figma_theme_input::{DocumentSource, StdinSource, env::MockStdin};
///
/// let source = StdinSource::with_reader(MockStdin::piped("{}"));
/// assert_eq!(source.read().unwrap(), "{}");
/// ```
#[derive(Clone)]
pub struct StdinSource<R: StdinReader = RealStdin> {
    reader: Arc<R>,
}

impl StdinSource<RealStdin> {
    /// Create a new stdin source using real stdin.
    pub fn new() -> Self {
        Self {
            reader: Arc::new(RealStdin),
        }
    }
}

impl Default for StdinSource<RealStdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StdinReader> StdinSource<R> {
    /// Create a stdin source with a custom reader.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
        }
    }
}

impl<R: StdinReader + 'static> DocumentSource for StdinSource<R> {
    fn name(&self) -> &'static str {
        "stdin"
    }

    fn read(&self) -> Result<String, InputError> {
        if self.reader.is_terminal() {
            log::warn!("reading Figma export from a terminal; end input with EOF");
        } else {
            log::info!("reading Figma export from stdin");
        }
        self.reader.read_to_string().map_err(InputError::StdinFailed)
    }
}
