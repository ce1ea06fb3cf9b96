//! Style color resolution.
//!
//! Resolution runs in three steps, each in its own module:
//!
//! 1. [`resolve_style_color`] finds the first node referencing a style id and
//!    picks the paint list for the role (fill or stroke) it was bound under.
//! 2. [`extract_color`] requires that list to hold exactly one definition and
//!    combines its color with its `opacity`.
//! 3. [`Color::to_css_string`] encodes the result as `#rrggbb` or `rgba(...)`.

mod color;
mod extract;
mod resolve;

pub use color::{encode_color, Color};
pub use extract::{extract_color, ExtractError, PaintRole};
pub use resolve::{paint_role, resolve_style_color};
