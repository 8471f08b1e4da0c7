// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.
//!
//! A [`ParallaxConfig`] names the [`ReferenceMode`] of one container and an
//! ordered list of [`LayerSpec`]s. Each entry pairs an opaque selector (resolved
//! by the caller into concrete layer handles) with [`LayerOptions`], which are
//! merged over [`LayerConfig::default`] once, when the engine is built.
//!
//! The `parse` helpers accept the loose string forms that page authors tend to
//! write (`"50%"`, `"120px"`, `"left"`, `"true"`). They never fail: anything
//! unrecognized degrades to a harmless value instead.

use alloc::vec::Vec;

/// Which edge or threshold defines the start of the scroll window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ReferenceMode {
    /// 0% when the container's top reaches the top of the viewport, 100% when
    /// its bottom does.
    #[default]
    TopOfViewport,
    /// 0% when the container's top enters from the bottom of the viewport,
    /// 100% when its bottom leaves through the top.
    BottomOfViewport,
    /// Like [`BottomOfViewport`](Self::BottomOfViewport), but the window only
    /// opens once the scroll position plus this many pixels passes the
    /// container's top.
    CustomOffset(f64),
}

impl ReferenceMode {
    /// Parses a `top` setting: `"true"`, `"false"`, or a pixel-like value.
    ///
    /// ```
    /// # use parallax_core::config::ReferenceMode;
    /// assert_eq!(ReferenceMode::parse("true"), ReferenceMode::TopOfViewport);
    /// assert_eq!(ReferenceMode::parse("false"), ReferenceMode::BottomOfViewport);
    /// assert_eq!(ReferenceMode::parse("120px"), ReferenceMode::CustomOffset(120.0));
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "true" => Self::TopOfViewport,
            "false" => Self::BottomOfViewport,
            other => Self::CustomOffset(parse_leading_int(other)),
        }
    }

    /// Returns the pixel threshold used by the scroll window formulas.
    ///
    /// Only [`CustomOffset`](Self::CustomOffset) carries one; the other modes
    /// report `0`.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::CustomOffset(n) => n,
            Self::TopOfViewport | Self::BottomOfViewport => 0.0,
        }
    }
}

/// How far a layer travels over the full `[0, 100]` progress range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance {
    /// Percentage of the layer's overflow (layer height minus container
    /// height). Overflow may be negative.
    Percent(f64),
    /// Absolute pixel distance.
    Pixels(f64),
}

impl Default for Distance {
    #[inline]
    fn default() -> Self {
        Self::Percent(100.0)
    }
}

impl Distance {
    /// Parses `"50%"` as a percentage and anything else (`"120px"`, `"80"`)
    /// as pixels.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.strip_suffix('%') {
            Some(number) => Self::Percent(parse_leading_int(number)),
            None => Self::Pixels(parse_leading_int(value)),
        }
    }
}

/// The axis and sign along which a layer travels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative Y.
    Up,
    /// Positive Y.
    #[default]
    Down,
    /// Negative X.
    Left,
    /// Positive X.
    Right,
}

impl Direction {
    /// Parses a direction name; unknown names fall back to [`Down`](Self::Down).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("up") {
            Self::Up
        } else if value.eq_ignore_ascii_case("left") {
            Self::Left
        } else if value.eq_ignore_ascii_case("right") {
            Self::Right
        } else {
            Self::Down
        }
    }
}

/// Per-layer overrides. `None` fields take the [`LayerConfig`] default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerOptions {
    /// Travel distance override.
    pub distance: Option<Distance>,
    /// Direction override.
    pub direction: Option<Direction>,
}

impl LayerOptions {
    /// No overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            distance: None,
            direction: None,
        }
    }

    /// Sets the distance override.
    #[must_use]
    pub const fn distance(mut self, distance: Distance) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Sets the direction override.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Merges these overrides over `defaults`.
    #[must_use]
    pub fn resolve(self, defaults: LayerConfig) -> LayerConfig {
        LayerConfig {
            distance: self.distance.unwrap_or(defaults.distance),
            direction: self.direction.unwrap_or(defaults.direction),
        }
    }
}

/// Fully resolved layer settings, immutable once the engine is built.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerConfig {
    /// Travel distance.
    pub distance: Distance,
    /// Travel direction.
    pub direction: Direction,
}

/// A selector paired with the options for every layer it matches.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSpec<S> {
    /// Opaque selection criterion, resolved by the caller.
    pub selector: S,
    /// Overrides merged over the layer defaults.
    pub options: LayerOptions,
}

/// Configuration for one parallax container.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig<S> {
    /// Reference window used by progress computation.
    pub reference_mode: ReferenceMode,
    /// Layer entries, in application order.
    pub layers: Vec<LayerSpec<S>>,
}

impl<S> Default for ParallaxConfig<S> {
    fn default() -> Self {
        Self {
            reference_mode: ReferenceMode::default(),
            layers: Vec::new(),
        }
    }
}

impl<S> ParallaxConfig<S> {
    /// Creates an empty configuration with [`ReferenceMode::TopOfViewport`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference mode.
    #[must_use]
    pub fn reference_mode(mut self, mode: ReferenceMode) -> Self {
        self.reference_mode = mode;
        self
    }

    /// Appends a layer entry.
    #[must_use]
    pub fn layer(mut self, selector: S, options: LayerOptions) -> Self {
        self.layers.push(LayerSpec { selector, options });
        self
    }
}

/// Extracts the leading integer of `value`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Returns `0` when no digit is found.
pub(crate) fn parse_leading_int(value: &str) -> f64 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut n = 0.0_f64;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        n = n * 10.0 + f64::from(b - b'0');
    }
    if negative { -n } else { n }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    #[test]
    fn defaults_match_plugin_defaults() {
        let layer = LayerConfig::default();
        assert_eq!(layer.distance, Distance::Percent(100.0));
        assert_eq!(layer.direction, Direction::Down);
        assert_eq!(ReferenceMode::default(), ReferenceMode::TopOfViewport);
    }

    #[test]
    fn leading_int_extraction() {
        assert_eq!(parse_leading_int("100px"), 100.0);
        assert_eq!(parse_leading_int("  42"), 42.0);
        assert_eq!(parse_leading_int("-30%"), -30.0);
        assert_eq!(parse_leading_int("+7"), 7.0);
        assert_eq!(parse_leading_int("12.9"), 12.0);
        assert_eq!(parse_leading_int("px"), 0.0);
        assert_eq!(parse_leading_int(""), 0.0);
    }

    #[test]
    fn reference_mode_parse() {
        assert_eq!(ReferenceMode::parse("true"), ReferenceMode::TopOfViewport);
        assert_eq!(
            ReferenceMode::parse("false"),
            ReferenceMode::BottomOfViewport
        );
        assert_eq!(
            ReferenceMode::parse("250"),
            ReferenceMode::CustomOffset(250.0)
        );
        assert_eq!(
            ReferenceMode::parse("nonsense"),
            ReferenceMode::CustomOffset(0.0)
        );
    }

    #[test]
    fn reference_mode_offset() {
        assert_eq!(ReferenceMode::TopOfViewport.offset(), 0.0);
        assert_eq!(ReferenceMode::BottomOfViewport.offset(), 0.0);
        assert_eq!(ReferenceMode::CustomOffset(64.0).offset(), 64.0);
    }

    #[test]
    fn distance_parse() {
        assert_eq!(Distance::parse("50%"), Distance::Percent(50.0));
        assert_eq!(Distance::parse("-20%"), Distance::Percent(-20.0));
        assert_eq!(Distance::parse("120px"), Distance::Pixels(120.0));
        assert_eq!(Distance::parse("80"), Distance::Pixels(80.0));
        assert_eq!(Distance::parse("abc"), Distance::Pixels(0.0));
    }

    #[test]
    fn direction_parse_falls_back_to_down() {
        assert_eq!(Direction::parse("up"), Direction::Up);
        assert_eq!(Direction::parse("LEFT"), Direction::Left);
        assert_eq!(Direction::parse("right"), Direction::Right);
        assert_eq!(Direction::parse("down"), Direction::Down);
        assert_eq!(Direction::parse("sideways"), Direction::Down);
    }

    #[test]
    fn options_merge_over_defaults() {
        let only_direction = LayerOptions::default().direction(Direction::Left);
        assert_eq!(
            only_direction.resolve(LayerConfig::default()),
            LayerConfig {
                distance: Distance::Percent(100.0),
                direction: Direction::Left,
            }
        );

        let both = LayerOptions::default()
            .distance(Distance::Pixels(40.0))
            .direction(Direction::Up);
        assert_eq!(
            both.resolve(LayerConfig::default()),
            LayerConfig {
                distance: Distance::Pixels(40.0),
                direction: Direction::Up,
            }
        );
    }

    #[test]
    fn config_builder_keeps_order() {
        let config = ParallaxConfig::new()
            .reference_mode(ReferenceMode::BottomOfViewport)
            .layer(String::from(".back"), LayerOptions::default())
            .layer(
                String::from(".front"),
                LayerOptions::default().direction(Direction::Up),
            );
        assert_eq!(config.reference_mode, ReferenceMode::BottomOfViewport);
        assert_eq!(config.layers.len(), 2);
        assert_eq!(config.layers[0].selector, ".back");
        assert_eq!(config.layers[1].options.direction, Some(Direction::Up));
    }
}
