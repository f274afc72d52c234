// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo configuration, loaded from TOML.

use std::path::Path;

use anyhow::{Context, ensure};
use log::info;
use serde::{Deserialize, Serialize};

use crate::frame::Mode;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl DemoConfig {
    /// Load configuration from `path`, or use defaults if it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No {} found, using default config", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Reject settings the dataset generator or camera cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.world.area > 0.0, "world.area must be positive");
        ensure!(
            self.dataset.min_size > 0.0 && self.dataset.min_size < self.dataset.max_size,
            "dataset sizes must satisfy 0 < min_size < max_size"
        );
        ensure!(
            self.camera.screen_width > 0.0 && self.camera.screen_height > 0.0,
            "camera screen size must be positive"
        );
        ensure!(
            self.camera.scale > 0.0 && self.camera.zoom_per_frame > 0.0,
            "camera scale and zoom_per_frame must be positive"
        );
        Ok(())
    }
}

/// World extent. The world is the square `[0, area)²`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldConfig {
    #[serde(default = "default_area")]
    pub area: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            area: default_area(),
        }
    }
}

/// Random dataset parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Number of rectangles to generate.
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Smallest side length.
    #[serde(default = "default_min_size")]
    pub min_size: f64,
    /// Largest side length (exclusive).
    #[serde(default = "default_max_size")]
    pub max_size: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: default_seed(),
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Screen size and the scripted pan/zoom applied every frame.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraConfig {
    #[serde(default = "default_screen_width")]
    pub screen_width: f64,
    #[serde(default = "default_screen_height")]
    pub screen_height: f64,
    /// Initial screen pixels per world unit.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Zoom factor applied about the screen centre each frame.
    #[serde(default = "default_zoom_per_frame")]
    pub zoom_per_frame: f64,
    /// Screen-space pan per frame.
    #[serde(default = "default_pan")]
    pub pan_x: f64,
    #[serde(default = "default_pan")]
    pub pan_y: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
            scale: default_scale(),
            zoom_per_frame: default_zoom_per_frame(),
            pan_x: default_pan(),
            pan_y: default_pan(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_frames")]
    pub frames: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            frames: default_frames(),
        }
    }
}

fn default_area() -> f64 {
    100_000.0
}
fn default_count() -> usize {
    1_000_000
}
fn default_seed() -> u64 {
    124_124_124
}
fn default_min_size() -> f64 {
    0.1
}
fn default_max_size() -> f64 {
    100.0
}
fn default_max_depth() -> usize {
    understory_quadtree::DEFAULT_MAX_DEPTH
}
fn default_screen_width() -> f64 {
    1000.0
}
fn default_screen_height() -> f64 {
    500.0
}
fn default_scale() -> f64 {
    1.0
}
fn default_zoom_per_frame() -> f64 {
    0.97
}
fn default_pan() -> f64 {
    -40.0
}
fn default_frames() -> usize {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config.dataset.count, 1_000_000);
        assert_eq!(config.index.max_depth, 8);
        assert_eq!(config.run.mode, Mode::Alternate);
        config.validate().unwrap();
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
            [dataset]
            count = 500

            [run]
            mode = "quadtree"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.count, 500);
        assert_eq!(config.dataset.seed, 124_124_124);
        assert_eq!(config.run.mode, Mode::Quadtree);
        assert_eq!(config.run.frames, 120);
    }

    #[test]
    fn validate_rejects_inverted_sizes() {
        let mut config = DemoConfig::default();
        config.dataset.min_size = 10.0;
        config.dataset.max_size = 1.0;
        assert!(config.validate().is_err());
    }
}
