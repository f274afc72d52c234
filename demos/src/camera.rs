// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-and-zoom camera mapping world space to screen space.

use kurbo::{Affine, Point, Size, Vec2};
use understory_quadtree::Rect;

use crate::config::CameraConfig;

/// A 2D camera. `world_to_screen` maps world units to screen pixels.
#[derive(Clone, Debug)]
pub struct Camera {
    screen: Size,
    world_to_screen: Affine,
}

impl Camera {
    pub fn new(screen: Size, scale: f64) -> Self {
        Self {
            screen,
            world_to_screen: Affine::scale(scale),
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            Size::new(config.screen_width, config.screen_height),
            config.scale,
        )
    }

    /// Move the view by a screen-space offset.
    pub fn pan(&mut self, delta: Vec2) {
        self.world_to_screen = Affine::translate(delta) * self.world_to_screen;
    }

    /// Zoom by `factor` keeping the world point under `anchor` fixed.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        let to_anchor = Affine::translate(anchor.to_vec2());
        self.world_to_screen =
            to_anchor * Affine::scale(factor) * to_anchor.inverse() * self.world_to_screen;
    }

    pub fn zoom_about_centre(&mut self, factor: f64) {
        self.zoom_about(self.screen_centre(), factor);
    }

    pub fn screen_centre(&self) -> Point {
        self.screen.to_rect().center()
    }

    pub fn screen_to_world(&self, p: Point) -> Point {
        self.world_to_screen.inverse() * p
    }

    /// World-space rectangle currently on screen.
    pub fn visible_world(&self) -> Rect<f64> {
        let screen = self.screen.to_rect();
        self.world_to_screen
            .inverse()
            .transform_rect_bbox(screen)
            .into()
    }

    pub fn scale(&self) -> f64 {
        self.world_to_screen.as_coeffs()[0]
    }
}
