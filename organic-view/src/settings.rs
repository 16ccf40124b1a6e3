//! Viewer configuration.
//!
//! Loaded from an optional TOML file with `ORGANIC_*` environment
//! overrides, e.g. `ORGANIC_NETWORK__SCROLL_SPEED=80` or
//! `ORGANIC_STYLES__BACKGROUND="#000000"`.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use organic_core::{NetworkConfig, StyleTable};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ViewerConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub styles: StyleTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,

    #[serde(default)]
    pub padding: Padding,

    /// Fixed seed; a random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            padding: Padding::default(),
            seed: None,
        }
    }
}

fn default_title() -> String {
    "Organic Network".to_string()
}

fn default_width() -> f32 {
    540.0
}

fn default_height() -> f32 {
    960.0
}

/// Space between the surface edges and the animated viewport, in px.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn uniform(v: f32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// Size left for the network once padding is removed from `surface`.
    pub fn inner_size(&self, surface: egui::Vec2) -> glam::Vec2 {
        glam::Vec2::new(
            surface.x - self.left - self.right,
            surface.y - self.top - self.bottom,
        )
    }

    /// Offset of the viewport origin from the surface's top-left corner.
    pub fn offset(&self) -> egui::Vec2 {
        egui::vec2(self.left, self.top)
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("ORGANIC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading config from {}", path.display()))?;

        let viewer_config: ViewerConfig = config
            .try_deserialize()
            .context("deserializing viewer config")?;
        Ok(viewer_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = ViewerConfig::load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(cfg.window.width, 540.0);
        assert_eq!(cfg.window.height, 960.0);
        assert_eq!(cfg.window.padding, Padding::default());
        assert_eq!(cfg.network, NetworkConfig::default());
    }

    #[test]
    fn padding_shrinks_surface() {
        let p = Padding {
            left: 10.0,
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
        };
        assert_eq!(
            p.inner_size(egui::vec2(500.0, 900.0)),
            glam::Vec2::new(460.0, 840.0)
        );
        assert_eq!(p.offset(), egui::vec2(10.0, 20.0));
        assert_eq!(
            Padding::uniform(5.0).inner_size(egui::vec2(100.0, 100.0)),
            glam::Vec2::new(90.0, 90.0)
        );
    }
}
