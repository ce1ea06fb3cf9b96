//! Core document source trait.
//!
//! The [`DocumentSource`] trait defines the interface for every place a
//! Figma export can come from: a local file, piped stdin, or the Figma API.

use crate::InputError;

/// A source that yields the raw JSON text of a Figma file export.
///
/// Sources do not parse what they read. Parsing and validation belong to
/// `figma_theme::FigmaDocument`, so every source fails only for
/// acquisition problems (missing file, unreadable stdin, HTTP failure).
///
/// # Example
///
/// ```
/// use figma_theme_input::{DocumentSource, InputError};
///
/// struct Fixed(&'static str);
///
/// impl DocumentSource for Fixed {
///     fn name(&self) -> &'static str { "fixed" }
///
///     fn read(&self) -> Result<String, InputError> {
///         Ok(self.0.to_string())
///     }
/// }
///
/// assert_eq!(Fixed("{}").read().unwrap(), "{}");
/// ```
pub trait DocumentSource: Send + Sync {
    /// Human-readable name for this source.
    ///
    /// Used in log messages. Examples: "file", "stdin", "figma-api".
    fn name(&self) -> &'static str;

    /// Read the whole document as text.
    fn read(&self) -> Result<String, InputError>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn read(&self) -> Result<String, InputError> {
        (**self).read()
    }
}
