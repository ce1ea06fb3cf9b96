//! Document acquisition for `figma-theme`.
//!
//! `figma-theme-input` fetches the raw JSON of a Figma file export from
//! one of three places: a local file, piped stdin, or the Figma REST API.
//! Every source implements [`DocumentSource`], so callers pick one and
//! hand the text to `figma_theme::FigmaDocument::from_json`.
//!
//! # Quick Start
//!
//! ```no_run
//! use figma_theme_input::{DocumentSource, FileSource};
//!
//! let json = FileSource::new("./figma-file.json").read()?;
//! # Ok::<(), figma_theme_input::InputError>(())
//! ```
//!
//! # Testing
//!
//! OS interactions go through the traits in [`env`], which have mock
//! implementations:
//!
//! ```
//! use figma_theme_input::{env::MockEnv, FigmaApiSource, InputError};
//!
//! let err = FigmaApiSource::from_env("abc123", &MockEnv::new()).unwrap_err();
//! assert!(matches!(err, InputError::MissingToken));
//! ```

pub mod env;
mod error;
mod source;
pub mod sources;

pub use error::InputError;
pub use source::DocumentSource;
pub use sources::{FigmaApiSource, FileSource, StdinSource, DEFAULT_API_BASE, FIGMA_TOKEN};

// Re-export mock types for testing
pub use env::{MockEnv, MockStdin};
