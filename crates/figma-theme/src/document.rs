//! Figma document export model.
//!
//! Only the parts of the export that style resolution needs are modeled.
//! Everything else in the file (geometry, text, effects, plugin data) is
//! ignored during deserialization.
//!
//! ```text
//! FigmaDocument
//! ├── document: DocumentNode          (tree, walked by flatten_document)
//! │   ├── fills / strokes             (paint definitions on the node)
//! │   ├── styles: StyleReferences     (style ids bound to fill/stroke)
//! │   └── children: [DocumentNode]
//! └── styles: { id → StyleDeclaration }
//! ```

use std::io::Read;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ThemeError};

/// A parsed Figma file export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FigmaDocument {
    /// Root of the node tree.
    pub document: DocumentNode,
    /// Style table keyed by style id, in document order.
    pub styles: IndexMap<String, StyleDeclaration>,
}

impl FigmaDocument {
    /// Parses a document from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(ThemeError::MalformedDocument)
    }

    /// Parses a document from raw JSON bytes.
    pub fn from_slice(input: &[u8]) -> Result<Self> {
        serde_json::from_slice(input).map_err(ThemeError::MalformedDocument)
    }

    /// Parses a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(ThemeError::MalformedDocument)
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentNode {
    /// Node id, e.g. `"1:4"`. Diagnostics only.
    #[serde(default)]
    pub id: Option<String>,
    /// Layer name. Diagnostics only.
    #[serde(default)]
    pub name: Option<String>,
    /// Node type such as `FRAME` or `RECTANGLE`. Diagnostics only.
    #[serde(default, rename = "type")]
    pub node_type: Option<String>,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
    #[serde(default)]
    pub fills: Option<Vec<StyleDefinition>>,
    #[serde(default)]
    pub strokes: Option<Vec<StyleDefinition>>,
    /// Style ids applied to this node, by paint role.
    #[serde(default)]
    pub styles: Option<StyleReferences>,
}

impl DocumentNode {
    /// Returns true if any of the node's style references names `style_id`.
    pub fn references(&self, style_id: &str) -> bool {
        self.styles
            .as_ref()
            .is_some_and(|refs| refs.contains(style_id))
    }

    /// Short human-readable label for log lines.
    pub(crate) fn label(&self) -> String {
        match (&self.id, &self.name) {
            (Some(id), Some(name)) => format!("{} ({})", id, name),
            (Some(id), None) => id.clone(),
            (None, Some(name)) => name.clone(),
            (None, None) => "<anonymous node>".to_string(),
        }
    }
}

/// Style ids bound to a node. Figma uses both singular and plural keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleReferences {
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub fills: Option<String>,
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default)]
    pub strokes: Option<String>,
}

impl StyleReferences {
    /// Returns true if any of the four references equals `style_id`.
    pub fn contains(&self, style_id: &str) -> bool {
        [&self.fill, &self.fills, &self.stroke, &self.strokes]
            .into_iter()
            .any(|r| r.as_deref() == Some(style_id))
    }

    /// Returns true if `fill` or `fills` equals `style_id`.
    pub fn is_fill(&self, style_id: &str) -> bool {
        self.fill.as_deref() == Some(style_id) || self.fills.as_deref() == Some(style_id)
    }

    /// Returns true if `stroke` or `strokes` equals `style_id`.
    pub fn is_stroke(&self, style_id: &str) -> bool {
        self.stroke.as_deref() == Some(style_id) || self.strokes.as_deref() == Some(style_id)
    }
}

/// A declared style in the document's style table.
///
/// Only `name` is required. `key`, `styleType` and `description` default to
/// empty strings when an export leaves them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IndexMap<String, Value>")]
pub struct StyleDeclaration {
    pub key: String,
    /// Slash-delimited hierarchical name, e.g. `"functional / fill / blue"`.
    pub name: String,
    pub style_type: String,
    pub description: String,
    /// Any other declaration fields (`remote`, ...), kept in document order.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
    /// Field names as they appeared in the export. Empty when built by hand.
    #[serde(skip)]
    pub field_order: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeclarationFields {
    #[serde(default)]
    key: String,
    name: String,
    #[serde(default)]
    style_type: String,
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl TryFrom<IndexMap<String, Value>> for StyleDeclaration {
    type Error = serde_json::Error;

    fn try_from(fields: IndexMap<String, Value>) -> std::result::Result<Self, Self::Error> {
        let field_order = fields.keys().cloned().collect();
        let DeclarationFields {
            key,
            name,
            style_type,
            description,
            extra,
        } = serde_json::from_value(Value::Object(fields.into_iter().collect()))?;

        Ok(Self {
            key,
            name,
            style_type,
            description,
            extra,
            field_order,
        })
    }
}

/// A single paint attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefinition {
    #[serde(default)]
    pub blend_mode: Option<String>,
    #[serde(default, rename = "type")]
    pub paint_type: Option<String>,
    /// Absent for image and gradient paints.
    #[serde(default)]
    pub color: Option<PaintColor>,
    #[serde(default)]
    pub opacity: Option<f64>,
}

/// Color components as exported, each in `[0, 1]`.
///
/// The exported `a` is always `1` in practice; real transparency lives in
/// [`StyleDefinition::opacity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub a: Option<f64>,
}

/// Flattens the tree under `root` into pre-order: each node precedes its
/// children, and children keep their document order.
pub fn flatten_document(root: &DocumentNode) -> Vec<&DocumentNode> {
    let mut nodes = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(node.children.iter().rev());
    }

    nodes
}
