// Copyright 2025 the Roundabout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer-facing class and style contract.
//!
//! The engine does not render anything; these helpers specify the numeric
//! and merge contract the external renderer must honor. Consumer style
//! overrides merge **over** the engine's computed defaults, except for
//! properties the engine must always control (`display` on the root, the
//! live `transform` on the track, the resolved `height` on the frame).
//!
//! Maps are ordered (`BTreeMap`) so emitted style text is deterministic.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};

use crate::carousel::Carousel;

/// The class always present on the rendered root.
pub const ROOT_CLASS: &str = "slider";

/// Builds the root element's class list: the engine's root class plus the
/// consumer's opaque passthrough, when configured.
#[must_use]
pub fn class_list(carousel: &Carousel) -> String {
    match carousel.config().class_name.as_deref() {
        Some(class_name) if !class_name.is_empty() => format!("{ROOT_CLASS} {class_name}"),
        _ => ROOT_CLASS.to_string(),
    }
}

/// Computed default styles for the rendered root, with the consumer's
/// overrides merged over them.
///
/// Consumer values win wherever supplied; `display: block` is engine-
/// controlled and re-asserted over any override.
#[must_use]
pub fn root_style(carousel: &Carousel) -> BTreeMap<String, String> {
    let mut style = BTreeMap::new();
    style.insert("position".to_string(), "relative".to_string());
    style.insert("display".to_string(), "block".to_string());
    for (name, value) in &carousel.config().style {
        style.insert(name.clone(), value.clone());
    }
    style.insert("display".to_string(), "block".to_string());
    style
}

/// Computed styles for the slide frame: the overflow-clipped viewport whose
/// height the engine resolves.
///
/// The `height` entry always reflects the engine's resolved value and is
/// not subject to consumer overrides.
#[must_use]
pub fn frame_style(carousel: &Carousel) -> BTreeMap<String, String> {
    let mut style = BTreeMap::new();
    style.insert("position".to_string(), "relative".to_string());
    style.insert("overflow".to_string(), "hidden".to_string());
    style.insert("margin".to_string(), "0".to_string());
    style.insert("padding".to_string(), "0".to_string());
    style.insert(
        "height".to_string(),
        format!("{}px", carousel.slide_height()),
    );
    style
}

/// Computed styles for the slide track, including the live transform the
/// engine always controls.
#[must_use]
pub fn track_style(carousel: &Carousel) -> BTreeMap<String, String> {
    let mut style = BTreeMap::new();
    style.insert("position".to_string(), "relative".to_string());
    style.insert("display".to_string(), "block".to_string());
    style.insert("margin".to_string(), "0".to_string());
    style.insert("padding".to_string(), "0".to_string());
    style.insert(
        "width".to_string(),
        format!("{}px", carousel.track().total_extent()),
    );
    style.insert("transform".to_string(), carousel.transform());
    style
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::{ROOT_CLASS, class_list, frame_style, root_style, track_style};
    use crate::carousel::Carousel;
    use crate::config::CarouselConfig;
    use crate::dimension::Dimension;
    use crate::height::HeightMode;

    fn carousel_with(config: CarouselConfig) -> Carousel {
        Carousel::new(config)
    }

    #[test]
    fn root_class_stands_alone_without_a_consumer_class() {
        let carousel = carousel_with(CarouselConfig::default());
        assert_eq!(class_list(&carousel), ROOT_CLASS);
    }

    #[test]
    fn consumer_class_is_merged_after_the_root_class() {
        let carousel = carousel_with(CarouselConfig {
            class_name: Some("test".to_string()),
            ..CarouselConfig::default()
        });
        assert_eq!(class_list(&carousel), "slider test");
    }

    #[test]
    fn consumer_styles_merge_over_defaults() {
        let mut config = CarouselConfig::default();
        config
            .style
            .insert("background-color".to_string(), "black".to_string());
        let style = root_style(&carousel_with(config));
        assert_eq!(
            style.get("background-color").map(String::as_str),
            Some("black")
        );
        assert_eq!(style.get("display").map(String::as_str), Some("block"));
    }

    #[test]
    fn engine_controlled_display_wins_over_overrides() {
        let mut config = CarouselConfig::default();
        config
            .style
            .insert("display".to_string(), "inline".to_string());
        let style = root_style(&carousel_with(config));
        assert_eq!(style.get("display").map(String::as_str), Some("block"));
    }

    #[test]
    fn frame_height_reflects_the_resolved_height() {
        let mut carousel = carousel_with(CarouselConfig {
            slide_count: 2,
            width: Dimension::Px(600.0),
            height_mode: HeightMode::Max,
            ..CarouselConfig::default()
        });
        carousel.set_slide_height(0, 120.0);
        carousel.set_slide_height(1, 90.0);
        let style = frame_style(&carousel);
        assert_eq!(style.get("height").map(String::as_str), Some("120px"));
    }

    #[test]
    fn track_transform_is_live() {
        let mut carousel = carousel_with(CarouselConfig {
            slide_count: 3,
            width: Dimension::Px(600.0),
            slide_width: Some(Dimension::Px(250.0)),
            ..CarouselConfig::default()
        });
        assert_eq!(
            track_style(&carousel).get("transform").map(String::as_str),
            Some("translate3d(0px, 0px, 0)")
        );
        carousel.next_slide();
        assert_eq!(
            track_style(&carousel).get("transform").map(String::as_str),
            Some("translate3d(-250px, 0px, 0)")
        );
    }
}
