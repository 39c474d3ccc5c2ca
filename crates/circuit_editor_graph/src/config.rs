// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor configuration loaded from RON.
//!
//! Only tunes geometry and interaction; circuits themselves are never
//! written to disk.

use crate::element::ElementType;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default half-width of the square window around a port that counts as a click on it
pub const DEFAULT_PORT_TOLERANCE: f32 = 15.0;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The RON text is malformed
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// A value is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Field name
        field: &'static str,
        /// What is wrong
        reason: String,
    },
}

/// Bounding box size per element family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSizes {
    /// Input elements
    pub input: [f32; 2],
    /// Gates (Not, And, Or)
    pub gate: [f32; 2],
}

impl ElementSizes {
    /// Size of an element of the given type
    pub fn for_type(&self, element_type: ElementType) -> [f32; 2] {
        match element_type {
            ElementType::Input => self.input,
            ElementType::Not | ElementType::And | ElementType::Or => self.gate,
        }
    }
}

impl Default for ElementSizes {
    fn default() -> Self {
        Self {
            input: [30.0, 30.0],
            gate: [80.0, 80.0],
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Port hit window half-width in connect mode
    pub port_tolerance: f32,
    /// Where elements added from the toolbar appear
    pub spawn_point: Point,
    /// Element sizes
    pub sizes: ElementSizes,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            port_tolerance: DEFAULT_PORT_TOLERANCE,
            spawn_point: Point::new(20.0, 20.0),
            sizes: ElementSizes::default(),
        }
    }
}

impl EditorConfig {
    /// Parse from RON text; missing fields take their defaults
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&text)?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.port_tolerance) {
            return Err(ConfigError::Invalid {
                field: "port_tolerance",
                reason: format!("must be positive, got {}", self.port_tolerance),
            });
        }
        let sizes = [("sizes.input", self.sizes.input), ("sizes.gate", self.sizes.gate)];
        for (field, [w, h]) in sizes {
            if !(is_positive(w) && is_positive(h)) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {w}x{h}"),
                });
            }
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.port_tolerance, 15.0);
        assert_eq!(config.spawn_point, Point::new(20.0, 20.0));
        assert_eq!(config.sizes.for_type(ElementType::Input), [30.0, 30.0]);
        assert_eq!(config.sizes.for_type(ElementType::Not), [80.0, 80.0]);
    }

    #[test]
    fn test_partial_ron() {
        let config =
            EditorConfig::from_ron("(port_tolerance: 8.0, sizes: (gate: (60.0, 40.0)))").unwrap();
        assert_eq!(config.port_tolerance, 8.0);
        assert_eq!(config.sizes.gate, [60.0, 40.0]);
        assert_eq!(config.sizes.input, [30.0, 30.0]);
        assert_eq!(config.spawn_point, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EditorConfig::from_ron("(port_tolerance: 0.0)"),
            Err(ConfigError::Invalid { field: "port_tolerance", .. })
        ));
        assert!(matches!(EditorConfig::from_ron("(port_tolerance: "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = EditorConfig::load(Path::new("/nonexistent/circuit_editor.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
