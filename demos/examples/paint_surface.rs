// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface seam, end to end.
//!
//! Implements [`DrawSurface`] as a call logger and paints all three widgets
//! through the stock paint helpers, mimicking what a host draw callback
//! does with a real canvas.
//!
//! Run:
//! - `cargo run -p latchkey_demos --example paint_surface`

use kurbo::{Circle, Line, Point, Rect};
use latchkey_pattern::lock::PatternLock;
use latchkey_pattern::types::PointerEvent;
use latchkey_widgets::indicator::DotIndicator;
use latchkey_widgets::slide::SlideLock;
use latchkey_widgets::surface::{
    DrawSurface, IndicatorTheme, PatternTheme, SlideTheme, paint_indicator, paint_pattern,
    paint_slide,
};

/// Logs draw calls instead of rasterizing them.
struct Console;

impl DrawSurface for Console {
    type Color = &'static str;

    fn fill_circle(&mut self, circle: Circle, color: &'static str) {
        println!(
            "  circle  r={:5.1} at ({:5.1}, {:5.1})  {color}",
            circle.radius, circle.center.x, circle.center.y
        );
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: &'static str) {
        println!(
            "  line    ({:5.1}, {:5.1}) → ({:5.1}, {:5.1}) w={width}  {color}",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
    }

    fn draw_text(&mut self, text: &str, at: Point, size: f64, color: &'static str) {
        println!("  text    {text:?} at ({:.1}, {:.1}) size={size}  {color}", at.x, at.y);
    }
}

fn main() {
    let mut surface = Console;

    println!("== Pattern lock ==");
    let mut lock = PatternLock::with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
    lock.handle_pointer(PointerEvent::Down(Point::new(50.0, 50.0)));
    lock.handle_pointer(PointerEvent::Move(Point::new(150.0, 50.0)));
    let theme = PatternTheme::new("background", "white", "green", "red", "white", "red");
    paint_pattern(&lock.render_model(), &theme, &mut surface);

    println!("== Slide lock ==");
    let mut slide = SlideLock::with_bounds(Rect::new(0.0, 0.0, 400.0, 100.0));
    slide.handle_pointer(PointerEvent::Down(Point::new(230.0, 50.0)));
    let theme = SlideTheme {
        knob: "white",
        background: "background",
        unlocked: "green",
    };
    paint_slide(&slide.render_model(), &theme, &mut surface);

    println!("== Dot indicator ==");
    let mut indicator = DotIndicator::new(4);
    indicator.set_selected(1);
    let theme = IndicatorTheme {
        dot: "gray",
        active_dot: "blue",
    };
    paint_indicator(
        &indicator.render(Rect::new(0.0, 260.0, 300.0, 300.0)),
        &theme,
        &mut surface,
    );
}
