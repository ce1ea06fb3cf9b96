//! Error types for the document-to-theme transform.
//!
//! Every variant is fatal: the transform never returns a partial theme.

use thiserror::Error;

use crate::style::PaintRole;

/// Errors that can occur while parsing a document or building a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The input is not JSON, or does not have the shape of a Figma export.
    #[error("The data is not an exported Figma file or is corrupt: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// The paint list backing a style does not hold exactly one definition.
    #[error(
        "style '{style_id}' has {count} {role} definitions; exactly one color definition is supported"
    )]
    AmbiguousColor {
        style_id: String,
        role: PaintRole,
        count: usize,
    },

    /// The single paint backing a style carries no solid color (image, gradient).
    #[error("style '{style_id}' is backed by a {role} definition without a solid color")]
    MissingColor { style_id: String, role: PaintRole },

    /// A style name nests deeper than a theme may.
    #[error("style '{style_id}' has a name {depth} levels deep; at most {max} are supported")]
    NameTooDeep {
        style_id: String,
        depth: usize,
        max: usize,
    },

    /// A node matched the style search but neither of its paint roles names the style.
    #[error("could not find color definition for style '{0}'")]
    Internal(String),

    /// Serializing a theme failed.
    #[error("theme serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ThemeError {
    /// Create an ambiguous color error.
    pub fn ambiguous(style_id: impl Into<String>, role: PaintRole, count: usize) -> Self {
        Self::AmbiguousColor {
            style_id: style_id.into(),
            role,
            count,
        }
    }

    /// Returns true if this error means the input was not a usable document.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ThemeError::MalformedDocument(_))
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
