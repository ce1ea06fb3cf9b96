//! Document source implementations.
//!
//! - [`FileSource`] - Read an export from disk
//! - [`StdinSource`] - Read an export from stdin
//! - [`FigmaApiSource`] - Download an export from the Figma API

mod figma_api;
mod file;
mod stdin;

pub use figma_api::{FigmaApiSource, DEFAULT_API_BASE, FIGMA_TOKEN};
pub use file::FileSource;
pub use stdin::StdinSource;
