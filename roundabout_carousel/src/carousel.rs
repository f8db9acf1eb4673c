// Copyright 2025 the Roundabout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: clamped navigation state plus eagerly derived
//! geometry.

use alloc::format;
use alloc::string::String;

use kurbo::{Size, Vec2};
use roundabout_track::{Track, cells_per_view};

use crate::config::{CarouselConfig, SlidesToScroll};
use crate::height::{MeasureSlides, SlideHeights, resolve_height};

bitflags::bitflags! {
    /// Batched summary of what an operation changed.
    ///
    /// Every mutating operation on [`Carousel`] returns the set it
    /// produced. The same flags also accumulate on the carousel until
    /// drained with [`Carousel::take_changes`], so a host can make several
    /// calls and re-render once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Change: u8 {
        /// The current slide index moved.
        const CURRENT_SLIDE = 1 << 0;
        /// The track translation changed.
        const OFFSET = 1 << 1;
        /// The resolved viewport height changed.
        const HEIGHT = 1 << 2;
        /// The resolved slides-per-step count changed.
        const STEP = 1 << 3;
        /// The track geometry (cell extent, spacing, or cell count) changed.
        const GEOMETRY = 1 << 4;
    }
}

/// A carousel over `slide_count` slides: a bounded current-slide counter
/// with clamped transitions, plus the geometry derived for it.
///
/// The controller holds no history, only current derived values. Derived
/// state (cell extent, automatic step, translation offset, viewport
/// height) is re-resolved eagerly on construction and after every
/// mutation, so the offset and the current slide index are never
/// observably out of sync.
///
/// Every transition is synchronous and total: any input yields a defined
/// next state, out-of-range requests clamp instead of erroring.
///
/// ```rust
/// use roundabout_carousel::{Carousel, CarouselConfig, Dimension};
///
/// let mut carousel = Carousel::new(CarouselConfig {
///     slide_count: 3,
///     width: Dimension::Px(600.0),
///     ..CarouselConfig::default()
/// });
///
/// assert_eq!(carousel.current_slide(), 0);
/// carousel.next_slide();
/// assert_eq!(carousel.current_slide(), 1);
/// carousel.go_to_slide(99);
/// assert_eq!(carousel.current_slide(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    /// Measured width the host makes available, used to resolve fractional
    /// container widths.
    available_width: f64,
    track: Track,
    current_slide: usize,
    /// Resolved slides-per-step, post automatic resolution.
    slides_to_scroll: usize,
    heights: SlideHeights,
    /// Slide-0 height captured at mount; never re-derived afterwards.
    first_height: Option<f64>,
    offset: Vec2,
    height: f64,
    pending: Change,
}

impl Carousel {
    /// Creates a carousel from a configuration and derives its initial
    /// state.
    ///
    /// Construction itself reports no pending changes; the first
    /// [`take_changes`](Self::take_changes) after construction is empty.
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let mut carousel = Self {
            config,
            available_width: 0.0,
            track: Track::new(0, 0.0, 0.0),
            current_slide: 0,
            slides_to_scroll: 1,
            heights: SlideHeights::new(),
            first_height: None,
            offset: Vec2::ZERO,
            height: 0.0,
            pending: Change::empty(),
        };
        carousel.resolve_derived();
        carousel.pending = Change::empty();
        carousel
    }

    /// Returns the applied configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns the current slide index.
    ///
    /// Always within `[0, max(0, slide_count - 1)]`, including immediately
    /// after construction and after the slide count shrinks.
    #[must_use]
    pub const fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Returns the number of slides.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.track.len()
    }

    /// Returns the resolved slides-per-step count, post automatic
    /// resolution.
    #[must_use]
    pub const fn slides_to_scroll(&self) -> usize {
        self.slides_to_scroll
    }

    /// Returns the effective slides visible simultaneously.
    #[must_use]
    pub fn slides_to_show(&self) -> usize {
        self.config.effective_slides_to_show()
    }

    /// Returns the resolved extent of a single slide cell, in pixels.
    #[must_use]
    pub const fn cell_extent(&self) -> f64 {
        self.track.cell_extent()
    }

    /// Returns the underlying slide track.
    #[must_use]
    pub const fn track(&self) -> &Track {
        &self.track
    }

    /// Returns the container width resolved against the available width.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.config.width.resolve(self.available_width)
    }

    /// Returns the translation currently applied to the slide track.
    ///
    /// `y` is always `0.0` for this horizontal track. Index 0 under left
    /// alignment resolves to `Vec2::ZERO`.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the CSS-style transform for the slide track.
    ///
    /// ```rust
    /// use roundabout_carousel::{Carousel, CarouselConfig};
    ///
    /// let carousel = Carousel::new(CarouselConfig {
    ///     slide_count: 3,
    ///     ..CarouselConfig::default()
    /// });
    /// assert_eq!(carousel.transform(), "translate3d(0px, 0px, 0)");
    /// ```
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.offset.x, self.offset.y)
    }

    /// Returns the resolved viewport height, in pixels.
    #[must_use]
    pub const fn slide_height(&self) -> f64 {
        self.height
    }

    /// Returns the resolved viewport size: container width × resolved
    /// height.
    #[must_use]
    pub fn frame_size(&self) -> Size {
        Size::new(self.container_width(), self.height)
    }

    /// Returns the recorded per-slide heights.
    #[must_use]
    pub const fn heights(&self) -> &SlideHeights {
        &self.heights
    }

    /// Drains and returns the changes accumulated since the last drain.
    pub fn take_changes(&mut self) -> Change {
        let pending = self.pending;
        self.pending = Change::empty();
        pending
    }

    /// Advances by the resolved slides-per-step count.
    ///
    /// A no-op (state unchanged) when already at the last index.
    pub fn next_slide(&mut self) -> Change {
        self.go_to_slide(self.current_slide.saturating_add(self.slides_to_scroll))
    }

    /// Goes back by the resolved slides-per-step count.
    ///
    /// A no-op when already at index 0.
    pub fn previous_slide(&mut self) -> Change {
        self.go_to_slide(self.current_slide.saturating_sub(self.slides_to_scroll))
    }

    /// Goes to `index`, clamped into the valid range.
    ///
    /// Out-of-range requests are clamped, never rejected: this is a
    /// deliberately forgiving contract. Repeating the same request is a
    /// state-wise no-op.
    pub fn go_to_slide(&mut self, index: usize) -> Change {
        let clamped = clamp_index(index, self.track.len());
        let mut change = Change::empty();
        if clamped != self.current_slide {
            self.current_slide = clamped;
            change |= Change::CURRENT_SLIDE;
            self.pending |= Change::CURRENT_SLIDE;
        }
        // Even a clamped no-op leaves geometry recomputed for the resulting
        // slide, so the offset and the index cannot be observed out of sync.
        change | self.resolve_derived()
    }

    /// Supplies the measured width available to the carousel, used to
    /// resolve fractional container widths.
    pub fn set_available_width(&mut self, width: f64) -> Change {
        debug_assert!(
            width.is_finite(),
            "available width must be finite; got {width:?}"
        );
        let width = if width.is_finite() && !width.is_sign_negative() {
            width
        } else {
            0.0
        };
        if width == self.available_width {
            return Change::empty();
        }
        self.available_width = width;
        self.resolve_derived()
    }

    /// Sets the number of slides, clamping the current index if the count
    /// shrank below it.
    pub fn set_slide_count(&mut self, slide_count: usize) -> Change {
        if slide_count == self.config.slide_count {
            return Change::empty();
        }
        self.config.slide_count = slide_count;
        self.heights.truncate(slide_count);
        self.resolve_derived()
    }

    /// Applies a new configuration wholesale and re-derives every dependent
    /// value.
    ///
    /// Recorded slide heights survive a configuration change: they describe
    /// the content, not the configuration.
    pub fn apply(&mut self, config: CarouselConfig) -> Change {
        self.config = config;
        self.heights.truncate(self.config.slide_count);
        self.resolve_derived()
    }

    /// Measures slide heights through the injected capability.
    ///
    /// Indices without a recorded height are always measured (the mount
    /// pass). Already-recorded indices are re-measured only when the
    /// configuration opts into height recalculation; otherwise recorded
    /// values stay stale by contract. The slide-0 height backing
    /// [`HeightMode::First`](crate::HeightMode::First) is captured by the
    /// first pass and never replaced.
    pub fn sync_heights<M: MeasureSlides>(&mut self, slides: &mut M) -> Change {
        let len = slides.len();
        self.heights.truncate(len);
        for index in 0..len {
            if self.config.recalculate_height || self.heights.get(index).is_none() {
                self.heights.set(index, slides.measure(index));
            }
        }
        if self.first_height.is_none() {
            self.first_height = self.heights.get(0);
        }
        self.resolve_derived()
    }

    /// Records one measured slide height, keyed by index.
    ///
    /// The same staleness rule as [`sync_heights`](Self::sync_heights)
    /// applies: an index that already has a recorded height is only
    /// updated when the configuration opts into recalculation.
    pub fn set_slide_height(&mut self, index: usize, height: f64) -> Change {
        if self.heights.get(index).is_some() && !self.config.recalculate_height {
            return Change::empty();
        }
        self.heights.set(index, height);
        if index == 0 && self.first_height.is_none() {
            self.first_height = self.heights.get(0);
        }
        self.resolve_derived()
    }

    /// Re-derives track geometry, the automatic step, the clamped index,
    /// the translation offset, and the viewport height from the current
    /// configuration and measurements.
    fn resolve_derived(&mut self) -> Change {
        let mut change = Change::empty();

        let container = self.container_width();
        let cell_extent = match self.config.slide_width {
            Some(dimension) => dimension.resolve(container),
            None => container / self.config.effective_slides_to_show() as f64,
        };
        let spacing = self.config.cell_spacing.max(0.0);

        let track = Track::new(self.config.slide_count, cell_extent, spacing);
        if track != self.track {
            self.track = track;
            change |= Change::GEOMETRY;
        }

        // The automatic step is never cached across geometry changes.
        let step = match self.config.slides_to_scroll {
            SlidesToScroll::Count(count) => count.max(1),
            SlidesToScroll::Auto => cells_per_view(container, cell_extent, spacing),
        };
        if step != self.slides_to_scroll {
            self.slides_to_scroll = step;
            change |= Change::STEP;
        }

        let clamped = clamp_index(self.current_slide, self.track.len());
        if clamped != self.current_slide {
            self.current_slide = clamped;
            change |= Change::CURRENT_SLIDE;
        }

        let offset = Vec2::new(
            self.track
                .target_offset(self.current_slide, self.config.cell_align, container),
            0.0,
        );
        if offset != self.offset {
            self.offset = offset;
            change |= Change::OFFSET;
        }

        let height = resolve_height(
            self.config.height_mode,
            &self.heights,
            self.first_height,
            self.current_slide,
        );
        if height != self.height {
            self.height = height;
            change |= Change::HEIGHT;
        }

        self.pending |= change;
        change
    }
}

/// Clamps `index` into `[0, max(0, len - 1)]`.
const fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index > len - 1 {
        len - 1
    } else {
        index
    }
}
