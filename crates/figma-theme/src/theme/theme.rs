//! The nested theme tree.
//!
//! A [`Theme`] maps name segments to [`ThemeEntry`] values. Interior levels
//! are groups; leaves are either full [`AggregateStyle`] records or, after
//! [`Theme::strip_metadata`], bare color strings and nulls.
//!
//! # Example
//!
//! ```rust
//! use figma_theme::{Theme, ThemeEntry};
//!
//! let mut theme = Theme::new();
//! theme.insert_path(["functional", "fill", "red"], ThemeEntry::Color("#ff0000".into()));
//! theme.insert_path(["functional", "fill", "gray"], ThemeEntry::Absent);
//!
//! assert_eq!(
//!     theme.to_json().unwrap(),
//!     r##"{"functional":{"fill":{"red":"#ff0000","gray":null}}}"##
//! );
//! ```

use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

use super::aggregate::AggregateStyle;
use crate::error::{Result, ThemeError};

/// A value stored in the theme tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThemeEntry {
    /// Full metadata record for a style.
    Style(AggregateStyle),
    /// A bare color string.
    Color(String),
    /// A declared style no node uses. Serializes as `null`.
    Absent,
    /// A nested level keyed by the next name segment.
    Group(Theme),
}

impl ThemeEntry {
    /// Builds a bare leaf from an optional color.
    pub fn from_color(color: Option<String>) -> Self {
        match color {
            Some(color) => ThemeEntry::Color(color),
            None => ThemeEntry::Absent,
        }
    }

    /// Returns the leaf's color, if it is a leaf with one.
    pub fn color(&self) -> Option<&str> {
        match self {
            ThemeEntry::Style(style) => style.color.as_deref(),
            ThemeEntry::Color(color) => Some(color),
            ThemeEntry::Absent | ThemeEntry::Group(_) => None,
        }
    }

    /// Returns true for anything that is not a group.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, ThemeEntry::Group(_))
    }

    pub fn as_group(&self) -> Option<&Theme> {
        match self {
            ThemeEntry::Group(theme) => Some(theme),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<&AggregateStyle> {
        match self {
            ThemeEntry::Style(style) => Some(style),
            _ => None,
        }
    }
}

impl From<AggregateStyle> for ThemeEntry {
    fn from(style: AggregateStyle) -> Self {
        ThemeEntry::Style(style)
    }
}

impl From<Theme> for ThemeEntry {
    fn from(theme: Theme) -> Self {
        ThemeEntry::Group(theme)
    }
}

/// An insertion-ordered, nested mapping from name segments to entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Theme {
    entries: IndexMap<String, ThemeEntry>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry stored directly under `key`.
    pub fn get(&self, key: &str) -> Option<&ThemeEntry> {
        self.entries.get(key)
    }

    /// Iterates this level's entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Stores `entry` at the nested location named by `path`.
    ///
    /// Missing intermediate levels are created. An intermediate segment that
    /// currently holds a leaf is replaced by a new group. A value already at
    /// the final segment is overwritten in place, keeping its position.
    /// An empty path leaves the theme unchanged.
    pub fn insert_path<I, S>(&mut self, path: I, entry: ThemeEntry)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments: Vec<String> = path
            .into_iter()
            .map(|segment| segment.as_ref().to_string())
            .collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut level = self;
        for segment in segments {
            let slot = level
                .entries
                .entry(segment)
                .or_insert_with(|| ThemeEntry::Group(Theme::new()));
            if slot.is_leaf() {
                warn!("replacing theme leaf with a group to make room for a nested style");
                *slot = ThemeEntry::Group(Theme::new());
            }
            let ThemeEntry::Group(child) = slot else {
                return;
            };
            level = child;
        }

        if level.entries.insert(last.clone(), entry).is_some() {
            warn!("theme path ending in '{}' was defined twice; keeping the later style", last);
        }
    }

    /// Returns the entry at the nested location named by `path`.
    pub fn get_path<I, S>(&self, path: I) -> Option<&ThemeEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = path.into_iter();
        let first = segments.next()?;
        let mut entry = self.entries.get(first.as_ref())?;
        for segment in segments {
            entry = entry.as_group()?.entries.get(segment.as_ref())?;
        }
        Some(entry)
    }

    /// Collapses every metadata record to its bare color (or null).
    ///
    /// Consumes the theme, so the stripped tree never aliases the original.
    /// Applying it twice is the same as applying it once.
    pub fn strip_metadata(mut self) -> Theme {
        {
            let mut stack: Vec<&mut Theme> = vec![&mut self];
            while let Some(level) = stack.pop() {
                for entry in level.entries.values_mut() {
                    if let ThemeEntry::Style(style) = entry {
                        let color = style.color.take();
                        *entry = ThemeEntry::from_color(color);
                    } else if let ThemeEntry::Group(child) = entry {
                        stack.push(child);
                    }
                }
            }
        }

        self
    }

    /// Returns true if no leaf anywhere carries a metadata record.
    pub fn is_stripped(&self) -> bool {
        let mut stack = vec![self];
        while let Some(level) = stack.pop() {
            for entry in level.entries.values() {
                match entry {
                    ThemeEntry::Style(_) => return false,
                    ThemeEntry::Group(child) => stack.push(child),
                    ThemeEntry::Color(_) | ThemeEntry::Absent => {}
                }
            }
        }
        true
    }

    /// Serializes the theme as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ThemeError::Serialize)
    }

    /// Serializes the theme as JSON indented with two spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ThemeError::Serialize)
    }

    /// Converts the theme into a `serde_json::Value`.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(ThemeError::Serialize)
    }
}
