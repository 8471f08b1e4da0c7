// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress-to-offset mapping.

use kurbo::Vec2;

use crate::config::{Direction, Distance, LayerConfig};
use crate::progress::Progress;

/// How far a layer has travelled, and along which direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerOffset {
    /// Direction of travel.
    pub direction: Direction,
    /// Distance travelled in pixels. Negative when the budget is negative.
    pub pixels: f64,
}

impl LayerOffset {
    /// The zero offset along [`Direction::Down`].
    pub const ZERO: Self = Self {
        direction: Direction::Down,
        pixels: 0.0,
    };

    /// Returns the 2-D translation `(dx, dy)` for this offset.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        let t = self.pixels;
        match self.direction {
            Direction::Down => Vec2::new(0.0, t),
            Direction::Up => Vec2::new(0.0, -t),
            Direction::Right => Vec2::new(t, 0.0),
            Direction::Left => Vec2::new(-t, 0.0),
        }
    }
}

/// Resolves a layer's configured distance to a pixel budget for the full
/// progress range.
///
/// Percentages are relative to the layer's overflow,
/// `layer_outer_height - container_outer_height`, which is negative for
/// layers shorter than their container.
#[must_use]
pub fn travel_budget(distance: Distance, layer_outer_height: f64, container_outer_height: f64) -> f64 {
    match distance {
        Distance::Percent(p) => p / 100.0 * (layer_outer_height - container_outer_height),
        Distance::Pixels(n) => n,
    }
}

/// Maps progress to the offset a layer should be translated by.
#[must_use]
pub fn resolve_offset(
    config: &LayerConfig,
    progress: Progress,
    layer_outer_height: f64,
    container_outer_height: f64,
) -> LayerOffset {
    let budget = travel_budget(config.distance, layer_outer_height, container_outer_height);
    LayerOffset {
        direction: config.direction,
        pixels: progress.fraction() * budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(p: f64) -> Progress {
        Progress::new(p).unwrap()
    }

    fn config(distance: Distance, direction: Direction) -> LayerConfig {
        LayerConfig {
            distance,
            direction,
        }
    }

    #[test]
    fn percent_of_overflow() {
        let down = config(Distance::Percent(100.0), Direction::Down);
        let offset = resolve_offset(&down, progress(50.0), 800.0, 400.0);
        assert_eq!(offset.pixels, 200.0);
        assert_eq!(offset.translation(), Vec2::new(0.0, 200.0));

        let up = config(Distance::Percent(100.0), Direction::Up);
        let offset = resolve_offset(&up, progress(50.0), 800.0, 400.0);
        assert_eq!(offset.translation(), Vec2::new(0.0, -200.0));
    }

    #[test]
    fn absolute_pixels_ignore_heights() {
        let right = config(Distance::Pixels(50.0), Direction::Right);
        let offset = resolve_offset(&right, progress(40.0), 10.0, 9999.0);
        assert_eq!(offset.pixels, 20.0);
        assert_eq!(offset.translation(), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn left_is_negative_x() {
        let left = config(Distance::Pixels(80.0), Direction::Left);
        let offset = resolve_offset(&left, progress(25.0), 0.0, 0.0);
        assert_eq!(offset.translation(), Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn short_layer_travels_backwards() {
        let down = config(Distance::Percent(100.0), Direction::Down);
        let offset = resolve_offset(&down, progress(100.0), 300.0, 400.0);
        assert_eq!(offset.pixels, -100.0);
        assert_eq!(offset.translation(), Vec2::new(0.0, -100.0));
    }

    #[test]
    fn negative_percent_inverts_travel() {
        assert_eq!(
            travel_budget(Distance::Percent(-50.0), 600.0, 400.0),
            -100.0
        );
    }

    #[test]
    fn zero_progress_is_zero_travel() {
        let cfg = config(Distance::Percent(100.0), Direction::Right);
        let offset = resolve_offset(&cfg, Progress::START, 1200.0, 400.0);
        assert_eq!(offset.pixels, 0.0);
        assert_eq!(LayerOffset::ZERO.translation(), Vec2::ZERO);
    }
}
