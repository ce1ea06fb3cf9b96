//! # Figma Theme - Color themes from Figma document exports
//!
//! `figma-theme` turns a Figma file export (the JSON returned by the
//! `/v1/files/:id` endpoint) into a compact, hierarchically named color theme.
//! Every style declared in the file becomes one leaf, placed at the path
//! spelled by its slash-delimited name and holding the color actually painted
//! by the first node that uses it.
//!
//! ## Quick Start
//!
//! ```rust
//! use figma_theme::{parse_theme, ThemeOptions};
//!
//! let export = r#"{
//!     "document": {
//!         "children": [{
//!             "fills": [{"blendMode": "NORMAL", "type": "SOLID",
//!                        "color": {"r": 1, "g": 0, "b": 0, "a": 1}}],
//!             "styles": {"fill": "1:5"}
//!         }]
//!     },
//!     "styles": {
//!         "1:5": {"key": "abc", "name": "functional / fill / red",
//!                 "styleType": "FILL", "description": ""},
//!         "1:6": {"key": "def", "name": "functional / fill / gray",
//!                 "styleType": "FILL", "description": ""}
//!     }
//! }"#;
//!
//! let theme = parse_theme(export, &ThemeOptions::default())?;
//! assert_eq!(
//!     theme.to_json()?,
//!     r##"{"functional":{"fill":{"red":"#ff0000","gray":null}}}"##
//! );
//! # Ok::<(), figma_theme::ThemeError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! FigmaDocument ──flatten_document──▶ [&DocumentNode]  (pre-order)
//!       │
//!       └─ for each declared style id, in table order:
//!             resolve_style_color ──▶ extract_color ──▶ Color::to_css_string
//!             name_segments(name)  ──▶ Theme::insert_path(AggregateStyle)
//!
//! Theme ──strip_metadata (unless metadata requested)──▶ output
//! ```
//!
//! ## Color Strings
//!
//! Opaque colors encode as lowercase `#rrggbb`. Anything else encodes as
//! `rgba(r,g,b,a)` with alpha rounded to two decimals. Alpha is read from the
//! paint's `opacity`, not from the color's `a` component.
//!
//! ## Failure Modes
//!
//! All errors abort the transform; see [`ThemeError`]. In particular a style
//! backed by a multi-layer paint (more than one fill or stroke on the node) is
//! an error rather than a silent pick.

mod document;
mod error;
pub mod style;
pub mod theme;

pub use document::{
    flatten_document, DocumentNode, FigmaDocument, PaintColor, StyleDeclaration, StyleDefinition,
    StyleReferences,
};
pub use error::{Result, ThemeError};
pub use style::{
    encode_color, extract_color, resolve_style_color, Color, ExtractError, PaintRole,
};
pub use theme::{
    build_theme, name_segments, AggregateStyle, Theme, ThemeEntry, MAX_NAME_DEPTH,
};

/// Options for [`transform`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Keep full [`AggregateStyle`] records instead of bare colors.
    pub metadata: bool,
}

impl ThemeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether leaves keep their metadata records.
    pub fn metadata(mut self, metadata: bool) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Builds a theme from a parsed document, stripping metadata unless requested.
pub fn transform(document: &FigmaDocument, options: &ThemeOptions) -> Result<Theme> {
    let theme = build_theme(document)?;
    if options.metadata {
        Ok(theme)
    } else {
        Ok(theme.strip_metadata())
    }
}

/// Parses JSON export text and transforms it in one step.
pub fn parse_theme(input: &str, options: &ThemeOptions) -> Result<Theme> {
    let document = FigmaDocument::from_json(input)?;
    transform(&document, options)
}
