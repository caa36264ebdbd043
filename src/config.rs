// SPDX-License-Identifier: MPL-2.0
//! Optional style overrides loaded from a TOML table.
//!
//! Embeddings that theme the banner from disk read a small override file
//! and fold it onto [`BannerStyle`]; absent fields keep the built-in
//! defaults.
//!
//! # Examples
//!
//! ```no_run
//! use iced_shout::config;
//! use iced_shout::style::BannerStyle;
//! use std::path::Path;
//!
//! let overrides = config::load_from_path(Path::new("shout.toml")).unwrap_or_default();
//! let style = BannerStyle::default().with_overrides(&overrides);
//! ```

use crate::error::Result;
use crate::style::BannerStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Geometry and opacity overrides for the banner skin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOverrides {
    #[serde(default)]
    pub expanded_height: Option<f32>,
    #[serde(default)]
    pub top_inset: Option<f32>,
    #[serde(default)]
    pub subtitle_max_lines: Option<u32>,
    #[serde(default)]
    pub background_opacity: Option<f32>,
    #[serde(default)]
    pub drag_enabled: Option<bool>,
}

/// Loads overrides from a TOML file.
pub fn load_from_path(path: &Path) -> Result<StyleOverrides> {
    let contents = fs::read_to_string(path)?;
    let overrides = toml::from_str(&contents)?;
    Ok(overrides)
}

/// Saves overrides to a TOML file.
pub fn save_to_path(overrides: &StyleOverrides, path: &Path) -> Result<()> {
    let contents = toml::to_string(overrides)?;
    fs::write(path, contents)?;
    Ok(())
}

impl BannerStyle {
    /// Applies overrides, keeping defaults for absent fields.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &StyleOverrides) -> Self {
        if let Some(height) = overrides.expanded_height {
            self.metrics.expanded_height = height;
        }
        if let Some(inset) = overrides.top_inset {
            self.metrics.top_inset = inset;
        }
        if let Some(lines) = overrides.subtitle_max_lines {
            self.metrics.subtitle_max_lines = lines;
        }
        if let Some(opacity) = overrides.background_opacity {
            self.background.a = opacity.clamp(0.0, 1.0);
        }
        if let Some(drag_enabled) = overrides.drag_enabled {
            self.drag_enabled = drag_enabled;
        }
        self
    }
}
