// Copyright 2026 the Parallaxor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll progress within the reference window.
//!
//! All three [`ReferenceMode`]s share one linear shape,
//! `view_scroll * 100 / view_range`, and differ only in which edges define
//! 0% and 100%:
//!
//! | mode               | `view_range`                        | `view_scroll`                              |
//! |--------------------|-------------------------------------|--------------------------------------------|
//! | `TopOfViewport`    | `outer`                             | `scroll - top`                             |
//! | `BottomOfViewport` | `outer + viewport`                  | `scroll + viewport - top`                  |
//! | `CustomOffset(n)`  | `outer + viewport - delta`          | `scroll + viewport - top - delta`          |
//!
//! where `delta` is [`GeometryCache::scroll_window_delta`]. Results outside
//! `[0, 100]` are rejected rather than clamped, so a layer never snaps to an
//! end stop because of a transient or degenerate measurement.

use core::fmt;

use crate::config::ReferenceMode;
use crate::geometry::{GeometryCache, clamp_scroll_top};

/// A percentage in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// 0%.
    pub const START: Self = Self(0.0);

    /// 100%.
    pub const END: Self = Self(100.0);

    /// Creates a progress value, or `None` if `percent` is outside
    /// `[0, 100]` (or NaN).
    #[inline]
    #[must_use]
    pub fn new(percent: f64) -> Option<Self> {
        (0.0..=100.0).contains(&percent).then_some(Self(percent))
    }

    /// Returns the percentage in `[0, 100]`.
    #[inline]
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// Returns the progress as a fraction in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

/// Why no progress value could be produced for this scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutOfRange {
    /// Under [`ReferenceMode::CustomOffset`], the scroll position plus the
    /// offset has not passed the container's top edge yet.
    BelowCustomOffset,
    /// The computed percentage fell outside `[0, 100]`. NaN when the window
    /// had zero length.
    OutsideWindow {
        /// The rejected percentage.
        percentage: f64,
    },
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowCustomOffset => f.write_str("container has not reached its custom offset"),
            Self::OutsideWindow { percentage } => {
                write!(f, "progress {percentage}% is outside the scroll window")
            }
        }
    }
}

impl core::error::Error for OutOfRange {}

/// Returns whether `scroll_top + offset` has passed the container's top edge.
#[inline]
#[must_use]
pub fn is_above_custom_offset(cache: &GeometryCache, scroll_top: f64, offset: f64) -> bool {
    clamp_scroll_top(scroll_top) + offset > cache.container_offset_top
}

/// Maps a scroll position to progress through the reference window.
///
/// Negative `scroll_top` readings are clamped to `0` first.
pub fn compute_progress(
    mode: ReferenceMode,
    cache: &GeometryCache,
    scroll_top: f64,
) -> Result<Progress, OutOfRange> {
    let scroll_top = clamp_scroll_top(scroll_top);
    let top = cache.container_offset_top;
    let outer = cache.container_outer_height;
    let viewport = cache.viewport_height;

    let (view_range, view_scroll) = match mode {
        ReferenceMode::TopOfViewport => (outer, scroll_top - top),
        ReferenceMode::BottomOfViewport => (outer + viewport, scroll_top + viewport - top),
        ReferenceMode::CustomOffset(offset) => {
            if !is_above_custom_offset(cache, scroll_top, offset) {
                return Err(OutOfRange::BelowCustomOffset);
            }
            let delta = cache.scroll_window_delta;
            (
                outer + viewport - delta,
                scroll_top + viewport - top - delta,
            )
        }
    };

    let percentage = view_scroll * 100.0 / view_range;
    Progress::new(percentage).ok_or(OutOfRange::OutsideWindow { percentage })
}
