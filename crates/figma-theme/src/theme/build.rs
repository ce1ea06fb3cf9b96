//! Builds a theme from a parsed document.

use log::{debug, info};

use super::aggregate::AggregateStyle;
use super::theme::{Theme, ThemeEntry};
use crate::document::{flatten_document, FigmaDocument};
use crate::error::{Result, ThemeError};
use crate::style::resolve_style_color;

/// Deepest style name, in segments, a theme accepts.
///
/// Themes are dropped and serialized recursively, so nesting depth is
/// bounded the way `serde_json` bounds parse depth.
pub const MAX_NAME_DEPTH: usize = 128;

/// Splits a style name into trimmed path segments.
///
/// `"functional / fill / blue"` becomes `["functional", "fill", "blue"]`.
/// Only `/` separates segments; empty segments are kept.
pub fn name_segments(name: &str) -> Vec<&str> {
    name.split('/').map(str::trim).collect()
}

/// Builds the full-metadata theme for every style declared in `document`.
///
/// Styles are visited in declaration-table order. Each one is resolved
/// against the flattened node tree and stored at the path derived from its
/// name. When two names normalize to the same path, the later declaration
/// wins.
///
/// # Errors
///
/// Fails on the first style whose color cannot be resolved unambiguously,
/// or whose name is deeper than [`MAX_NAME_DEPTH`]; no partial theme is
/// returned.
pub fn build_theme(document: &FigmaDocument) -> Result<Theme> {
    let nodes = flatten_document(&document.document);
    debug!(
        "flattened document into {} nodes, resolving {} styles",
        nodes.len(),
        document.styles.len()
    );

    let mut theme = Theme::new();
    for (id, declaration) in &document.styles {
        let path = name_segments(&declaration.name);
        if path.len() > MAX_NAME_DEPTH {
            return Err(ThemeError::NameTooDeep {
                style_id: id.clone(),
                depth: path.len(),
                max: MAX_NAME_DEPTH,
            });
        }
        let color = resolve_style_color(&nodes, id)?;
        let style = AggregateStyle::new(id.as_str(), color, declaration.clone());
        theme.insert_path(path, ThemeEntry::Style(style));
    }

    info!("built theme from {} styles", document.styles.len());
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StyleDeclaration;
    use serde_json::json;

    #[test]
    fn test_name_segments_trims() {
        assert_eq!(
            name_segments("functional / fill / blue"),
            vec!["functional", "fill", "blue"]
        );
        assert_eq!(name_segments("  a/b  /  c "), vec!["a", "b", "c"]);
        assert_eq!(name_segments("solo"), vec!["solo"]);
    }

    #[test]
    fn test_name_segments_dots_are_literal() {
        assert_eq!(name_segments("opacity / 0.5"), vec!["opacity", "0.5"]);
    }

    #[test]
    fn test_name_segments_keep_empty() {
        assert_eq!(name_segments("a//b"), vec!["a", "", "b"]);
        assert_eq!(name_segments("a /"), vec!["a", ""]);
    }

    #[test]
    fn test_build_places_style_at_name_path() {
        let doc = FigmaDocument::from_json(
            r#"{
                "document": {"children": [{
                    "fills": [{"blendMode": "NORMAL", "type": "SOLID", "color": {"r": 0, "g": 0.5215686559677124, "b": 1, "a": 1}}],
                    "styles": {"fill": "1:7"}
                }]},
                "styles": {
                    "1:7": {
                        "key": "f8cb2ed792374ea2986769525a417b26fdcd072f",
                        "name": "functional / fill / blue",
                        "styleType": "FILL",
                        "description": ""
                    }
                }
            }"#,
        )
        .unwrap();

        let theme = build_theme(&doc).unwrap();
        assert_eq!(
            theme.to_value().unwrap(),
            json!({"functional": {"fill": {"blue": {
                "id": "1:7",
                "color": "#0085ff",
                "key": "f8cb2ed792374ea2986769525a417b26fdcd072f",
                "name": "functional / fill / blue",
                "styleType": "FILL",
                "description": ""
            }}}})
        );
    }

    #[test]
    fn test_build_unused_style_has_null_color() {
        let doc = FigmaDocument::from_json(
            r#"{"document": {}, "styles": {
                "1:8": {"key": "k", "name": "functional / fill / gray", "styleType": "FILL", "description": ""}
            }}"#,
        )
        .unwrap();

        let theme = build_theme(&doc).unwrap();
        let entry = theme.get_path(["functional", "fill", "gray"]).unwrap();
        assert_eq!(entry.as_style().unwrap().color, None);
    }

    #[test]
    fn test_build_colliding_paths_later_declaration_wins() {
        let doc = FigmaDocument::from_json(
            r#"{
                "document": {"children": [
                    {"fills": [{"color": {"r": 1, "g": 0, "b": 0}}], "styles": {"fill": "1:1"}},
                    {"fills": [{"color": {"r": 0, "g": 0, "b": 1}}], "styles": {"fill": "1:2"}}
                ]},
                "styles": {
                    "1:1": {"key": "k1", "name": "brand/primary", "styleType": "FILL"},
                    "1:2": {"key": "k2", "name": "brand / primary ", "styleType": "FILL"}
                }
            }"#,
        )
        .unwrap();

        let theme = build_theme(&doc).unwrap();
        let style = theme.get_path(["brand", "primary"]).unwrap().as_style().unwrap();
        assert_eq!(style.id, "1:2");
        assert_eq!(style.color.as_deref(), Some("#0000ff"));
        assert_eq!(theme.get("brand").unwrap().as_group().unwrap().len(), 1);
    }

    #[test]
    fn test_build_aborts_on_ambiguous_style() {
        let doc = FigmaDocument::from_json(
            r#"{
                "document": {"children": [
                    {"fills": [{"color": {"r": 1, "g": 0, "b": 0}}], "styles": {"fill": "1:1"}},
                    {"strokes": [
                        {"color": {"r": 1, "g": 0, "b": 0}},
                        {"color": {"r": 0, "g": 1, "b": 0}}
                    ], "styles": {"stroke": "1:2"}}
                ]},
                "styles": {
                    "1:1": {"key": "k1", "name": "ok", "styleType": "FILL"},
                    "1:2": {"key": "k2", "name": "layered", "styleType": "STROKE"}
                }
            }"#,
        )
        .unwrap();

        let err = build_theme(&doc).unwrap_err();
        assert!(matches!(err, ThemeError::AmbiguousColor { ref style_id, count: 2, .. } if style_id == "1:2"));
    }

    fn document_with_name(name: &str) -> FigmaDocument {
        let mut doc = FigmaDocument::default();
        doc.styles.insert(
            "1:1".into(),
            StyleDeclaration {
                name: name.into(),
                ..Default::default()
            },
        );
        doc
    }

    #[test]
    fn test_build_rejects_name_deeper_than_limit() {
        let doc = document_with_name(&["x"; 200_000].join("/"));
        let err = build_theme(&doc).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::NameTooDeep { ref style_id, depth: 200_000, max: MAX_NAME_DEPTH }
                if style_id == "1:1"
        ));
    }

    #[test]
    fn test_build_accepts_name_at_limit() {
        let doc = document_with_name(&["x"; MAX_NAME_DEPTH].join(" / "));
        let theme = build_theme(&doc).unwrap().strip_metadata();
        let json = theme.to_json().unwrap();
        assert!(json.starts_with(r#"{"x":{"x":"#));
        assert!(json.ends_with(&format!("null{}", "}".repeat(MAX_NAME_DEPTH))));
    }

    #[test]
    fn test_build_empty_style_table() {
        let doc = FigmaDocument::from_json(r#"{"document": {}, "styles": {}}"#).unwrap();
        let theme = build_theme(&doc).unwrap();
        assert!(theme.is_empty());
        assert_eq!(theme.to_json().unwrap(), "{}");
    }
}
