//! Category colors
//!
//! Maps each category label to a display color. Lookup is total-or-error:
//! a category without a color is a configuration defect and is reported as
//! `ProjectionError::MissingColor`, never papered over with a default color.

use super::error::{ProjectionError, Result};
use std::collections::HashMap;
use tracing::warn;

/// RGB color as `[r, g, b]`
pub type Rgb = [u8; 3];

/// Categorical color mapping: category name → RGB
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryColorMap {
    mappings: HashMap<String, Rgb>,
}

impl CategoryColorMap {
    /// Build from `category → "#RRGGBB"` pairs
    ///
    /// Every value must parse as a hex color.
    pub fn from_hex<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut mappings = HashMap::new();
        for (category, hex) in entries {
            let category = category.into();
            let rgb = parse_hex_color(hex.as_ref()).ok_or_else(|| ProjectionError::InvalidColor {
                name: category.clone(),
                value: hex.as_ref().to_string(),
            })?;
            mappings.insert(category, rgb);
        }
        Ok(Self { mappings })
    }

    /// Add or replace the color of a category
    pub fn insert(&mut self, category: impl Into<String>, color: Rgb) {
        self.mappings.insert(category.into(), color);
    }

    /// Color of a category
    pub fn color(&self, category: &str) -> Result<Rgb> {
        self.mappings
            .get(category)
            .copied()
            .ok_or_else(|| ProjectionError::MissingColor(category.to_string()))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.mappings.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Parse a hex color string to RGB array
///
/// Supports formats:
/// - `#RRGGBB` (6 hex digits)
/// - `#RRGGBBAA` (8 hex digits, alpha ignored)
/// - `RRGGBB` / `RRGGBBAA` (without #)
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');

    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        warn!("Invalid hex color '{}'", hex);
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some([r, g, b])
}

/// Format an RGB array as `#RRGGBB`
pub fn to_hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}
