// Copyright 2025 the Roundabout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roundabout_carousel --heading-base-level=0

//! Roundabout Carousel: a renderer-agnostic carousel (slideshow) engine.
//!
//! This crate holds the numeric and state contract of a carousel widget:
//! given a slide count, container geometry, alignment, spacing, and a
//! height-sizing policy, it derives the track translation, the slides
//! advanced per navigation step, the viewport height, and an always-valid
//! current slide index. Rendering, gesture recognition, autoplay, and
//! animation wiring are the host's business; the engine only tells the
//! host where things go.
//!
//! The core concepts are:
//!
//! - [`CarouselConfig`]: every recognized option with a documented default.
//! - [`Carousel`]: the controller — a bounded current-slide counter with
//!   clamped, total transitions, re-deriving geometry eagerly so the
//!   offset and index are never observably out of sync.
//! - [`Change`]: a batched summary of what an operation changed, returned
//!   per call and accumulated for [`Carousel::take_changes`].
//! - [`MeasureSlides`]: the injected capability through which the host
//!   reports measured slide content heights; [`HeightMode`] selects the
//!   single height applied to the viewport.
//! - [`Dimension`] and [`SlidesToScroll`]: parsed configuration values;
//!   parsing is the engine's only fail-fast surface, everything downstream
//!   clamps silently.
//! - [`style`]: the class/style merge contract for the external renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use roundabout_carousel::{Carousel, CarouselConfig, Dimension, SlidesToScroll};
//!
//! let mut carousel = Carousel::new(CarouselConfig {
//!     slide_count: 3,
//!     width: Dimension::Px(600.0),
//!     slide_width: Some("250px".parse().unwrap()),
//!     slides_to_scroll: "auto".parse().unwrap(),
//!     ..CarouselConfig::default()
//! });
//!
//! // Two whole 250px cells fit in 600px, so `auto` resolves to 2.
//! assert_eq!(carousel.slides_to_scroll(), 2);
//!
//! carousel.next_slide();
//! assert_eq!(carousel.current_slide(), 2);
//! assert_eq!(carousel.transform(), "translate3d(-500px, 0px, 0)");
//!
//! // Navigation clamps rather than erroring.
//! carousel.go_to_slide(99);
//! assert_eq!(carousel.current_slide(), 2);
//! ```
//!
//! ## Height feedback
//!
//! Hosts report measured content heights through [`MeasureSlides`] (or
//! index-by-index via [`Carousel::set_slide_height`]). The first pass is
//! the mount measurement; afterwards, recorded values are only refreshed
//! when [`CarouselConfig::recalculate_height`] opts in:
//!
//! ```rust
//! use roundabout_carousel::{Carousel, CarouselConfig, Dimension, HeightMode, MeasureSlides};
//!
//! struct Fixed(&'static [f64]);
//! impl MeasureSlides for Fixed {
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn measure(&mut self, index: usize) -> f64 {
//!         self.0[index]
//!     }
//! }
//!
//! let mut carousel = Carousel::new(CarouselConfig {
//!     slide_count: 3,
//!     width: Dimension::Px(600.0),
//!     height_mode: HeightMode::Max,
//!     ..CarouselConfig::default()
//! });
//! carousel.sync_heights(&mut Fixed(&[200.0, 400.0, 300.0]));
//! assert_eq!(carousel.slide_height(), 400.0);
//! ```
//!
//! The engine is single-threaded and synchronous: every operation runs to
//! completion before returning, and `&mut self` transitions give each
//! carousel instance the single mutual-exclusion boundary it needs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod dimension;
mod height;
pub mod style;

pub use carousel::{Carousel, Change};
pub use config::{CarouselConfig, ParseSlidesToScrollError, SlidesToScroll};
pub use dimension::{Dimension, ParseDimensionError};
pub use height::{HeightMode, MeasureSlides, SlideHeights, resolve_height};
pub use roundabout_track::{CellAlign, Track, cells_per_view};
