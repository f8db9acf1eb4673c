// Copyright 2025 the Roundabout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport height resolution from measured slide content heights.
//!
//! The engine never touches rendering internals: hosts adapt their widget
//! tree or DOM behind the [`MeasureSlides`] capability and the controller
//! records whatever it reports into a [`SlideHeights`] store. A
//! [`HeightMode`] then selects the single height applied to the viewport.

use hashbrown::HashMap;

/// Policy selecting which slide's height (or aggregate) sets the viewport
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeightMode {
    /// The height of slide 0, captured once at mount and never re-derived
    /// afterwards, regardless of any recalculation setting.
    #[default]
    First,
    /// The maximum over all recorded slide heights.
    Max,
    /// The height of the current slide.
    Current,
}

/// Measurement capability injected by the host renderer.
///
/// Implementations wrap whatever the host renders (a widget tree, DOM
/// nodes, a scene graph) and report per-slide content heights in the same
/// pixel space as the rest of the engine's geometry. Keeping measurement
/// behind this trait keeps the engine renderer-agnostic and unit-testable
/// without one.
pub trait MeasureSlides {
    /// Number of slides the host can currently measure.
    fn len(&self) -> usize;

    /// Returns `true` if the host has no slides to measure.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Measured content height of slide `index`, in pixels.
    ///
    /// Takes `&mut self` so implementations are free to maintain layout
    /// caches without interior mutability at the call site.
    fn measure(&mut self, index: usize) -> f64;
}

/// Sparse per-slide measured content heights, keyed by slide index.
///
/// Sparseness is deliberate: a host may only have realized (and therefore
/// only be able to measure) a subset of slides.
#[derive(Debug, Clone, Default)]
pub struct SlideHeights {
    map: HashMap<usize, f64>,
}

impl SlideHeights {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Records the measured height for `index`.
    ///
    /// Heights are expected to be finite; NaNs and infinities are caught in
    /// debug builds, and finite negative values clamp to `0.0`.
    pub fn set(&mut self, index: usize, height: f64) {
        debug_assert!(
            height.is_finite(),
            "slide heights must be finite; got {height:?}"
        );
        let height = if height.is_finite() && !height.is_sign_negative() {
            height
        } else {
            0.0
        };
        self.map.insert(index, height);
    }

    /// Returns the recorded height for `index`, if measured.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.map.get(&index).copied()
    }

    /// Returns the maximum recorded height, or `0.0` when nothing has been
    /// measured.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.map.values().copied().fold(0.0, f64::max)
    }

    /// Number of slides with a recorded height.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no height has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every recorded height.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Drops recorded heights at or past `len`, for hosts whose slide
    /// content shrank.
    pub fn truncate(&mut self, len: usize) {
        self.map.retain(|&index, _| index < len);
    }
}

/// Resolves the single viewport height for the given policy.
///
/// `first_height` is the slide-0 height captured at mount (`None` until a
/// mount pass has run). Unmeasured lookups and an empty store resolve to
/// `0.0`: no slides, no viewport height.
#[must_use]
pub fn resolve_height(
    mode: HeightMode,
    heights: &SlideHeights,
    first_height: Option<f64>,
    current_slide: usize,
) -> f64 {
    match mode {
        HeightMode::First => first_height.unwrap_or(0.0),
        HeightMode::Max => heights.max(),
        HeightMode::Current => heights.get(current_slide).unwrap_or(0.0),
    }
}
