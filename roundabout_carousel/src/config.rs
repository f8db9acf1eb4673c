// Copyright 2025 the Roundabout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel configuration surface.
//!
//! Every recognized option is enumerated here with a documented default.
//! The controller resolves derived values (automatic step, effective cell
//! extent) eagerly whenever a configuration is applied, rather than lazily
//! at call sites.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::str::FromStr;

use roundabout_track::CellAlign;
use thiserror::Error;

use crate::dimension::Dimension;
use crate::height::HeightMode;

/// How many slides a single navigation step advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidesToScroll {
    /// A fixed positive count.
    Count(usize),
    /// Derive the count from how many whole cells fit in the viewport.
    Auto,
}

impl SlidesToScroll {
    /// The default fixed step of one slide.
    pub const ONE: Self = Self::Count(1);
}

impl Default for SlidesToScroll {
    fn default() -> Self {
        Self::ONE
    }
}

/// Error produced when a slides-to-scroll string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSlidesToScrollError {
    /// The input was neither `auto` nor an integer.
    #[error("expected `auto` or a positive integer, got `{0}`")]
    Invalid(String),
    /// A step of zero can never advance.
    #[error("slides to scroll must be at least 1")]
    Zero,
}

impl FromStr for SlidesToScroll {
    type Err = ParseSlidesToScrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "auto" {
            return Ok(Self::Auto);
        }
        match s.parse::<usize>() {
            Ok(0) => Err(ParseSlidesToScrollError::Zero),
            Ok(count) => Ok(Self::Count(count)),
            Err(_) => Err(ParseSlidesToScrollError::Invalid(s.into())),
        }
    }
}

/// Configuration for a [`Carousel`](crate::Carousel).
///
/// Construct with [`CarouselConfig::default`] and override the fields you
/// need; apply updates through [`Carousel::apply`](crate::Carousel::apply).
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Number of slides in the sequence. Default: `0`.
    pub slide_count: usize,
    /// Extent of a single slide. `None` divides the container evenly by
    /// [`slides_to_show`](Self::slides_to_show). Default: `None`.
    pub slide_width: Option<Dimension>,
    /// Container width, resolved against the measured available width
    /// supplied by the host. Default: the full available width.
    pub width: Dimension,
    /// Spacing between adjacent slides, in pixels. Default: `0.0`.
    pub cell_spacing: f64,
    /// Where the active slide sits within the viewport. Default:
    /// [`CellAlign::Left`].
    pub cell_align: CellAlign,
    /// Slides advanced per navigation step. Default: one slide.
    pub slides_to_scroll: SlidesToScroll,
    /// Slides visible simultaneously. Zero is treated as one. Default: `1`.
    pub slides_to_show: usize,
    /// Which slide's height (or aggregate) sets the viewport height.
    /// Default: [`HeightMode::First`].
    pub height_mode: HeightMode,
    /// Whether height feedback after the initial measurement pass is
    /// honored. When `false`, mount-time measurements are reused as-is.
    /// Default: `false`.
    pub recalculate_height: bool,
    /// Opaque class passthrough merged into the rendered root's class list.
    /// Default: `None`.
    pub class_name: Option<String>,
    /// Consumer style overrides merged over the engine's computed defaults.
    /// Default: empty.
    pub style: BTreeMap<String, String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_count: 0,
            slide_width: None,
            width: Dimension::Fraction(1.0),
            cell_spacing: 0.0,
            cell_align: CellAlign::Left,
            slides_to_scroll: SlidesToScroll::ONE,
            slides_to_show: 1,
            height_mode: HeightMode::First,
            recalculate_height: false,
            class_name: None,
            style: BTreeMap::new(),
        }
    }
}

impl CarouselConfig {
    /// Returns the effective slides-to-show count (zero is treated as one).
    #[must_use]
    pub fn effective_slides_to_show(&self) -> usize {
        self.slides_to_show.max(1)
    }
}
