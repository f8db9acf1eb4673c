// Copyright 2025 the Roundabout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walkthrough of the carousel engine: configure, navigate, and report the
//! derived geometry a renderer would consume.

use roundabout_carousel::{
    Carousel, CarouselConfig, Dimension, HeightMode, MeasureSlides, style,
};

/// Pretend renderer: slide content heights as a host would measure them.
struct MeasuredSlides {
    heights: Vec<f64>,
}

impl MeasureSlides for MeasuredSlides {
    fn len(&self) -> usize {
        self.heights.len()
    }

    fn measure(&mut self, index: usize) -> f64 {
        self.heights[index]
    }
}

fn report(carousel: &Carousel, label: &str) {
    println!(
        "{label:>12}: slide {} of {}, offset {}, height {}px",
        carousel.current_slide(),
        carousel.slide_count(),
        carousel.transform(),
        carousel.slide_height(),
    );
}

fn main() {
    let mut carousel = Carousel::new(CarouselConfig {
        slide_count: 5,
        width: Dimension::Px(600.0),
        slide_width: Some("250px".parse().expect("valid dimension")),
        cell_spacing: 10.0,
        slides_to_scroll: "auto".parse().expect("valid step"),
        height_mode: HeightMode::Max,
        ..CarouselConfig::default()
    });

    println!(
        "auto slides-to-scroll resolved to {} (600px viewport, 260px stride)",
        carousel.slides_to_scroll()
    );

    let mut slides = MeasuredSlides {
        heights: vec![200.0, 300.0, 400.0, 300.0, 200.0],
    };
    carousel.sync_heights(&mut slides);

    report(&carousel, "mounted");
    carousel.next_slide();
    report(&carousel, "next");
    carousel.next_slide();
    report(&carousel, "next");
    carousel.next_slide();
    report(&carousel, "next (end)");
    carousel.previous_slide();
    report(&carousel, "previous");
    carousel.go_to_slide(99);
    report(&carousel, "goto 99");

    println!("frame size: {:?}", carousel.frame_size());
    println!("class list: {}", style::class_list(&carousel));
    for (name, value) in style::track_style(&carousel) {
        println!("track style: {name}: {value}");
    }

    let drained = carousel.take_changes();
    println!("accumulated changes this cycle: {drained:?}");
}
