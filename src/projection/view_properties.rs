//! View property definitions with defaults from view.json
//!
//! view.json is embedded at compile time and lists every configurable view
//! property with its kind, default value and (for enumerations) valid values.
//! Defaults are defined in ONE place (view.json); the reader only layers user
//! overrides on top of them.

use super::error::{ProjectionError, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// view.json embedded at compile time
const VIEW_JSON: &str = include_str!("../../view.json");

/// Property definition from view.json
#[derive(Debug, Clone)]
pub struct PropertyDef {
    pub name: String,
    pub kind: PropertyKind,
    pub default_value: String,
    pub description: String,
    /// For EnumeratedProperty, the valid values
    pub valid_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    String,
    Enumerated,
    Boolean,
    Double,
}

/// Registry of all view properties with their defaults from view.json
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    properties: HashMap<String, PropertyDef>,
}

impl PropertyRegistry {
    /// Registry from the embedded view.json
    pub fn embedded() -> Result<Self> {
        Self::from_json(VIEW_JSON)
    }

    /// Parse a view.json document
    pub fn from_json(json: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(json)?;

        let properties_array = json["properties"]
            .as_array()
            .ok_or_else(|| ProjectionError::Data("view.json missing 'properties' array".into()))?;

        let mut properties = HashMap::new();

        for prop in properties_array {
            let name = prop["name"]
                .as_str()
                .ok_or_else(|| ProjectionError::Data("property missing 'name'".into()))?
                .to_string();

            let kind = match prop["kind"].as_str() {
                Some("StringProperty") => PropertyKind::String,
                Some("EnumeratedProperty") => PropertyKind::Enumerated,
                Some("BooleanProperty") => PropertyKind::Boolean,
                Some("DoubleProperty") => PropertyKind::Double,
                other => {
                    return Err(ProjectionError::Data(format!(
                        "Unknown kind {:?} for property '{}'",
                        other, name
                    )))
                }
            };

            let default_value = prop["defaultValue"].as_str().unwrap_or("").to_string();
            let description = prop["description"].as_str().unwrap_or("").to_string();

            let valid_values = if kind == PropertyKind::Enumerated {
                prop["values"].as_array().map(|arr| {
                    arr.iter()
                        .filter_map(|v| v.as_str().map(|s| s.to_string()))
                        .collect()
                })
            } else {
                None
            };

            properties.insert(
                name.clone(),
                PropertyDef {
                    name,
                    kind,
                    default_value,
                    description,
                    valid_values,
                },
            );
        }

        debug!("PropertyRegistry: loaded {} view properties", properties.len());
        Ok(Self { properties })
    }

    /// Get the default value for a property
    pub fn get_default(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|p| p.default_value.as_str())
    }

    /// Get the property definition
    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.get(name)
    }

    /// Check if a value is valid for an enumerated property
    pub fn is_valid_enum_value(&self, name: &str, value: &str) -> bool {
        self.properties
            .get(name)
            .and_then(|p| p.valid_values.as_ref())
            .map(|values| values.iter().any(|v| v.eq_ignore_ascii_case(value)))
            .unwrap_or(true) // Non-enumerated properties accept any value
    }
}

/// Typed view property reader
///
/// Returns the user override when present and valid, otherwise the default
/// from view.json. Invalid overrides are logged and ignored.
#[derive(Debug, Clone)]
pub struct PropertyReader {
    registry: PropertyRegistry,
    /// User-set values; empty strings are treated as unset
    user_values: HashMap<String, String>,
}

impl PropertyReader {
    pub fn new(registry: PropertyRegistry, overrides: HashMap<String, String>) -> Self {
        let user_values = overrides
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .inspect(|(name, _)| {
                if registry.get_property(name).is_none() {
                    warn!("Unknown view property '{}' ignored", name);
                }
            })
            .collect();

        Self {
            registry,
            user_values,
        }
    }

    /// Reader with no overrides
    pub fn defaults(registry: PropertyRegistry) -> Self {
        Self::new(registry, HashMap::new())
    }

    /// Reader with overrides from a JSON object
    ///
    /// String, number and boolean values are accepted; other values are skipped.
    pub fn from_json_overrides(registry: PropertyRegistry, json: &str) -> Result<Self> {
        let config_map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut overrides = HashMap::new();
        for (key, value) in config_map {
            let value_str = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => {
                    warn!("Skipping non-scalar value for view property '{}': {}", key, other);
                    continue;
                }
            };
            overrides.insert(key, value_str);
        }

        Ok(Self::new(registry, overrides))
    }

    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    fn default_of(&self, name: &str) -> &str {
        self.registry.get_default(name).unwrap_or("")
    }

    /// Get string property (user value or default from view.json)
    pub fn get_string(&self, name: &str) -> String {
        if let Some(value) = self.user_values.get(name) {
            return value.clone();
        }
        self.default_of(name).to_string()
    }

    /// Get enumerated property with validation
    pub fn get_enum(&self, name: &str) -> String {
        let default = self.default_of(name);

        if let Some(value) = self.user_values.get(name) {
            if self.registry.is_valid_enum_value(name, value) {
                return value.clone();
            }
            let valid_values = self
                .registry
                .get_property(name)
                .and_then(|p| p.valid_values.as_ref())
                .map(|v| v.join(", "))
                .unwrap_or_default();
            warn!(
                "Invalid value '{}' for property '{}'. Valid values: [{}]. Using default: '{}'",
                value, name, valid_values, default
            );
        }

        default.to_string()
    }

    /// Get f64 property, falling back to the default if the value does not parse
    pub fn get_f64(&self, name: &str) -> f64 {
        let default = self.default_of(name).parse::<f64>().unwrap_or(0.0);

        match self.user_values.get(name) {
            None => default,
            Some(value) => match value.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    warn!(
                        "Invalid numeric value '{}' for property '{}'. Using default: {}",
                        value, name, default
                    );
                    default
                }
            },
        }
    }

    /// Get f64 property with range validation
    pub fn get_f64_in_range(&self, name: &str, min: f64, max: f64) -> f64 {
        let value = self.get_f64(name);
        let default = self.default_of(name).parse::<f64>().unwrap_or(0.0);

        if (min..=max).contains(&value) {
            value
        } else {
            warn!(
                "Value {} for property '{}' out of range [{}, {}]. Using default: {}",
                value, name, min, max, default
            );
            default
        }
    }

    /// Get boolean property ("true"/"false", case-insensitive)
    pub fn get_bool(&self, name: &str) -> bool {
        let default = self.default_of(name).eq_ignore_ascii_case("true");

        match self.user_values.get(name) {
            None => default,
            Some(value) if value.eq_ignore_ascii_case("true") => true,
            Some(value) if value.eq_ignore_ascii_case("false") => false,
            Some(value) => {
                warn!(
                    "Invalid boolean value '{}' for property '{}'. Using default: {}",
                    value, name, default
                );
                default
            }
        }
    }

    /// Parse coordinate string "x,y" with x,y in [0,1]
    ///
    /// An invalid override falls back to the default; None if neither parses.
    pub fn get_coords(&self, name: &str) -> Option<(f64, f64)> {
        if let Some(value) = self.user_values.get(name) {
            match parse_coords(value) {
                Some(coords) => return Some(coords),
                None => warn!(
                    "Invalid coordinates '{}' for property '{}', expected 'x,y' in [0,1]",
                    value, name
                ),
            }
        }
        parse_coords(self.default_of(name))
    }

    /// Get comma separated list property, trimming entries and dropping empty ones
    pub fn get_list(&self, name: &str) -> Vec<String> {
        self.get_string(name)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn parse_coords(value: &str) -> Option<(f64, f64)> {
    let (x, y) = value.split_once(',')?;
    let x = x.trim().parse::<f64>().ok()?;
    let y = y.trim().parse::<f64>().ok()?;

    if (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) {
        Some((x, y))
    } else {
        None
    }
}
