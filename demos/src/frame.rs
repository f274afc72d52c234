// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame visibility query, timed, in linear or quadtree mode.

use std::fmt;
use std::time::{Duration, Instant};

use kurbo::Vec2;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use understory_quadtree::{Container, Handle, Rect};

use crate::camera::Camera;
use crate::config::DemoConfig;
use crate::dataset::Object2d;

/// Which strategy a run uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Linear,
    Quadtree,
    /// Switch strategy every frame.
    #[default]
    Alternate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Linear,
    Quadtree,
}

impl Strategy {
    fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::Quadtree,
            Self::Quadtree => Self::Linear,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::Quadtree => f.write_str("Quadtree"),
        }
    }
}

/// Stand-in for a renderer: counts and fingerprints what would be drawn.
#[derive(Debug, Default)]
struct Canvas {
    drawn: usize,
    checksum: u64,
}

impl Canvas {
    fn fill_rect(&mut self, object: &Object2d) {
        let [r, g, b] = object.colour;
        self.drawn += 1;
        self.checksum = self
            .checksum
            .wrapping_add((u64::from(r) << 16) | (u64::from(g) << 8) | u64::from(b));
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FrameReport {
    pub strategy: Strategy,
    pub visible: usize,
    pub total: usize,
    pub checksum: u64,
    pub elapsed: Duration,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{} in {:.6}s",
            self.strategy,
            self.visible,
            self.total,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Draw every object overlapping `view` and time it.
pub fn draw_visible(
    objects: &Container<f64, Object2d>,
    view: &Rect<f64>,
    strategy: Strategy,
    hits: &mut Vec<Handle>,
) -> FrameReport {
    let start = Instant::now();
    let mut canvas = Canvas::default();
    match strategy {
        Strategy::Linear => {
            for (_, bounds, object) in objects {
                if bounds.overlaps(view) {
                    canvas.fill_rect(object);
                }
            }
        }
        Strategy::Quadtree => {
            hits.clear();
            objects.search_into(view, hits);
            for object in hits.iter().filter_map(|h| objects.get(*h)) {
                canvas.fill_rect(object);
            }
        }
    }
    FrameReport {
        strategy,
        visible: canvas.drawn,
        total: objects.len(),
        checksum: canvas.checksum,
        elapsed: start.elapsed(),
    }
}

/// Accumulated timings per strategy.
#[derive(Debug, Default)]
pub struct Summary {
    pub linear: Totals,
    pub quadtree: Totals,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Totals {
    pub frames: usize,
    pub visible: usize,
    pub elapsed: Duration,
}

impl Totals {
    fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.visible += report.visible;
        self.elapsed += report.elapsed;
    }

    pub fn mean(&self) -> Option<Duration> {
        let frames = u32::try_from(self.frames).ok().filter(|&n| n > 0)?;
        Some(self.elapsed / frames)
    }
}

/// Run the scripted camera path for `config.run.frames` frames.
pub fn run(config: &DemoConfig, objects: &Container<f64, Object2d>) -> Summary {
    let mut camera = Camera::from_config(&config.camera);
    let pan = Vec2::new(config.camera.pan_x, config.camera.pan_y);
    let mut strategy = match config.run.mode {
        Mode::Linear => Strategy::Linear,
        Mode::Quadtree | Mode::Alternate => Strategy::Quadtree,
    };
    let mut hits = Vec::new();
    let mut summary = Summary::default();

    for frame in 0..config.run.frames {
        let view = camera.visible_world();
        debug!(
            "frame {frame}: view {view:?}, centre {:?}, scale {:.4}",
            camera.screen_to_world(camera.screen_centre()),
            camera.scale()
        );
        let report = draw_visible(objects, &view, strategy, &mut hits);
        info!("{report}");
        debug!("frame {frame}: checksum {:#x}", report.checksum);
        match strategy {
            Strategy::Linear => summary.linear.record(&report),
            Strategy::Quadtree => summary.quadtree.record(&report),
        }

        camera.pan(pan);
        camera.zoom_about_centre(config.camera.zoom_per_frame);
        if config.run.mode == Mode::Alternate {
            strategy = strategy.toggled();
        }
    }
    summary
}
