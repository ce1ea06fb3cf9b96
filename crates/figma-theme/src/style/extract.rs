//! Picks the single paint definition behind a style and encodes its color.

use std::fmt;

use super::color::Color;
use crate::document::StyleDefinition;

/// The paint role a style plays on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintRole {
    /// Interior color, from the node's `fills`.
    Fill,
    /// Outline color, from the node's `strokes`.
    Stroke,
}

impl fmt::Display for PaintRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintRole::Fill => f.write_str("fill"),
            PaintRole::Stroke => f.write_str("stroke"),
        }
    }
}

/// Why a paint list could not produce a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The list did not hold exactly one definition.
    DefinitionCount(usize),
    /// The definition is not a solid paint.
    NoSolidColor,
}

/// Extracts the color string from a paint list holding exactly one definition.
///
/// Alpha comes from the definition's `opacity` (defaulting to `1`), never from
/// the color's own `a` component.
pub fn extract_color(definitions: &[StyleDefinition]) -> Result<String, ExtractError> {
    let [definition] = definitions else {
        return Err(ExtractError::DefinitionCount(definitions.len()));
    };
    let paint = definition.color.ok_or(ExtractError::NoSolidColor)?;
    let alpha = definition.opacity.unwrap_or(1.0);

    Ok(Color::new(paint.r, paint.g, paint.b, alpha).to_css_string())
}
