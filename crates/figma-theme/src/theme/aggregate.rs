//! The full metadata record emitted for each declared style.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::document::StyleDeclaration;

const DECLARED_FIELDS: [&str; 4] = ["key", "name", "styleType", "description"];

/// A resolved style with its declaration metadata.
///
/// Serializes as `{id, color, ...declaration}`: the computed `id` and
/// `color` first, then the declaration's fields in the order the export
/// listed them. Hand-built declarations fall back to
/// `key, name, styleType, description`, then extra fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStyle {
    pub id: String,
    /// Resolved color string, `None` when no node uses the style.
    pub color: Option<String>,
    pub key: String,
    pub name: String,
    pub style_type: String,
    pub description: String,
    pub extra: IndexMap<String, Value>,
    layout: Vec<String>,
}

impl AggregateStyle {
    /// Combines a style id, its resolved color and its declaration.
    ///
    /// Declaration fields take precedence: an `id` or `color` carried by the
    /// declaration itself replaces the computed value.
    pub fn new(id: impl Into<String>, color: Option<String>, declaration: StyleDeclaration) -> Self {
        let StyleDeclaration {
            key,
            name,
            style_type,
            description,
            mut extra,
            field_order,
        } = declaration;

        let id = match extra.shift_remove("id") {
            Some(Value::String(declared)) => declared,
            Some(other) => other.to_string(),
            None => id.into(),
        };
        let color = match extra.shift_remove("color") {
            Some(Value::String(declared)) => Some(declared),
            Some(Value::Null) => None,
            Some(other) => Some(other.to_string()),
            None => color,
        };

        let mut layout: Vec<String> = field_order
            .into_iter()
            .filter(|field| field != "id" && field != "color")
            .collect();
        let remaining = DECLARED_FIELDS
            .iter()
            .map(|field| field.to_string())
            .chain(extra.keys().cloned());
        for field in remaining {
            if !layout.contains(&field) {
                layout.push(field);
            }
        }

        Self {
            id,
            color,
            key,
            name,
            style_type,
            description,
            extra,
            layout,
        }
    }
}

impl Serialize for AggregateStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("color", &self.color)?;
        for field in &self.layout {
            match field.as_str() {
                "key" => map.serialize_entry(field, &self.key)?,
                "name" => map.serialize_entry(field, &self.name)?,
                "styleType" => map.serialize_entry(field, &self.style_type)?,
                "description" => map.serialize_entry(field, &self.description)?,
                other => {
                    if let Some(value) = self.extra.get(other) {
                        map.serialize_entry(field, value)?;
                    }
                }
            }
        }
        map.end()
    }
}
