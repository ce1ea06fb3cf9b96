//! Nested color themes built from style names.
//!
//! Style names are slash-delimited paths. Each declared style becomes one
//! leaf at the path spelled by its trimmed name segments:
//!
//! ```text
//! "functional / fill / blue"   →   functional
//!                                  └── fill
//!                                      └── blue: {id, color, key, name, ...}
//! ```
//!
//! ## Metadata
//!
//! [`build_theme`] stores a full [`AggregateStyle`] at each leaf.
//! [`Theme::strip_metadata`] collapses those records to their bare color
//! strings (or `null` for styles no node uses), which is the usual output.
//!
//! ## Ordering
//!
//! Levels keep insertion order, so serialized themes list groups and leaves
//! in the order their styles were first declared.

mod aggregate;
mod build;
#[allow(clippy::module_inception)]
mod theme;

pub use aggregate::AggregateStyle;
pub use build::{build_theme, name_segments, MAX_NAME_DEPTH};
pub use theme::{Theme, ThemeEntry};
