//! Button metrics and the trait environment.
//!
//! [`ButtonMetrics`] holds the fixed design constants of the pill button and
//! can be loaded from TOML. [`TraitEnvironment`] carries the externally
//! supplied text size and display scale.
//!
//! ```
//! use capsule::config::ButtonMetrics;
//!
//! let metrics = ButtonMetrics::from_toml_str("corner_radius = 12.0").unwrap();
//! assert_eq!(metrics.corner_radius, 12.0);
//! assert_eq!(metrics.system_spacing, 8.0);
//! ```

use capsule_render::{DeviceMetrics, TextSizeCategory};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into metrics.
    #[error("invalid button metrics: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Design constants of the pill button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonMetrics {
    /// Corner radius of the background; also drives the content inset.
    pub corner_radius: f32,
    /// The system spacing unit between icon and text and between text lines.
    pub system_spacing: f32,
    /// Stroke width of the border.
    pub border_width: f32,
    /// Fonts never grow beyond this size category.
    pub max_text_size: TextSizeCategory,
    /// Text wraps when wider than this.
    pub max_text_width: Option<f32>,
}

impl Default for ButtonMetrics {
    fn default() -> Self {
        Self {
            corner_radius: 8.0,
            system_spacing: 8.0,
            border_width: 1.0,
            max_text_size: TextSizeCategory::AccessibilityMedium,
            max_text_width: None,
        }
    }
}

impl ButtonMetrics {
    /// Parse metrics from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the spacing unit.
    pub fn with_system_spacing(mut self, spacing: f32) -> Self {
        self.system_spacing = spacing;
        self
    }

    /// Set the maximum text width before wrapping.
    pub fn with_max_text_width(mut self, width: Option<f32>) -> Self {
        self.max_text_width = width;
        self
    }
}

/// Externally supplied display traits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitEnvironment {
    /// The preferred text size category.
    pub text_size: TextSizeCategory,
    /// Pixel scale of the display.
    pub device: DeviceMetrics,
}

impl TraitEnvironment {
    /// Set the text size category.
    pub fn with_text_size(mut self, text_size: TextSizeCategory) -> Self {
        self.text_size = text_size;
        self
    }

    /// Set the device metrics.
    pub fn with_device(mut self, device: DeviceMetrics) -> Self {
        self.device = device;
        self
    }
}
