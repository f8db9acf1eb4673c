// Copyright 2025 the Roundabout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roundabout_track --heading-base-level=0

//! Roundabout Track: core 1D slide-track geometry.
//!
//! This crate provides a small, renderer-agnostic core for positioning a
//! dense strip of slide cells indexed `0..len`. It is intended to be shared
//! across different UI stacks and carousel/slider implementations.
//!
//! The core concepts are:
//!
//! - [`Track`]: a strip of equally sized cells separated by fixed spacing,
//!   answering per-index position queries.
//! - [`CellAlign`]: where the active cell's leading, center, or trailing
//!   edge sits within the viewport.
//! - [`Track::target_offset`]: the signed translation that brings a given
//!   cell into view under an alignment policy.
//! - [`cells_per_view`]: how many whole cells fit in a viewport, used to
//!   derive an automatic slides-per-step count.
//!
//! This crate deliberately does **not** know about widgets, slide content,
//! or any particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the actual slide data and view/widget instances.
//! - Measuring the viewport and feeding its extent into queries.
//! - Applying the returned translation to whatever surface they scroll.
//!
//! ## Minimal example
//!
//! A five-cell track, 100 logical pixels per cell, 20 pixels of spacing:
//!
//! ```rust
//! use roundabout_track::{CellAlign, Track, cells_per_view};
//!
//! let track = Track::new(5, 100.0, 20.0);
//!
//! // The first cell under left alignment is flush with the viewport start.
//! assert_eq!(track.target_offset(0, CellAlign::Left, 600.0), 0.0);
//!
//! // Later cells translate the track left (negative x).
//! assert_eq!(track.target_offset(2, CellAlign::Left, 600.0), -240.0);
//!
//! // Five whole cells fit in a 600px viewport at a 120px stride.
//! assert_eq!(cells_per_view(600.0, 100.0, 20.0), 5);
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite.
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod align;
mod track;

pub use align::CellAlign;
pub use track::{Track, cells_per_view};
