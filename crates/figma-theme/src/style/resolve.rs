//! Resolves a style id to the color painted on the first node that uses it.

use log::debug;

use super::extract::{extract_color, ExtractError, PaintRole};
use crate::document::DocumentNode;
use crate::error::{Result, ThemeError};

/// Returns the role under which `node` references `style_id`, fill first.
pub fn paint_role(node: &DocumentNode, style_id: &str) -> Option<PaintRole> {
    let refs = node.styles.as_ref()?;
    if refs.is_fill(style_id) {
        Some(PaintRole::Fill)
    } else if refs.is_stroke(style_id) {
        Some(PaintRole::Stroke)
    } else {
        None
    }
}

/// Resolves the color string for `style_id`.
///
/// Scans `nodes` in order and uses the first node that references the style.
/// Returns `Ok(None)` when no node uses the style.
///
/// # Errors
///
/// - [`ThemeError::AmbiguousColor`] if the node's paint list for the matched
///   role does not hold exactly one definition
/// - [`ThemeError::MissingColor`] if that definition is not a solid paint
/// - [`ThemeError::Internal`] if the matched node names the style under
///   neither role
pub fn resolve_style_color(nodes: &[&DocumentNode], style_id: &str) -> Result<Option<String>> {
    let Some(node) = nodes.iter().find(|node| node.references(style_id)) else {
        debug!("style {} is not used by any node", style_id);
        return Ok(None);
    };

    let role = paint_role(node, style_id).ok_or_else(|| ThemeError::Internal(style_id.into()))?;
    let definitions = match role {
        PaintRole::Fill => node.fills.as_deref(),
        PaintRole::Stroke => node.strokes.as_deref(),
    }
    .unwrap_or_default();

    let color = extract_color(definitions).map_err(|err| match err {
        ExtractError::DefinitionCount(count) => ThemeError::ambiguous(style_id, role, count),
        ExtractError::NoSolidColor => ThemeError::MissingColor {
            style_id: style_id.into(),
            role,
        },
    })?;

    debug!(
        "style {} resolved to {} via {} of {}",
        style_id,
        color,
        role,
        node.label()
    );
    Ok(Some(color))
}
