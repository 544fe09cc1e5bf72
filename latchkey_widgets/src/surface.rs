// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface seam and paint helpers.
//!
//! ## Overview
//!
//! [`DrawSurface`] is the one trait a host renderer implements: filled
//! circles, stroked lines, and text, with the color type left to the host
//! (an ARGB word, a paint handle, an enum — anything `Copy`). The `paint_*`
//! helpers walk each widget's render model in its draw order so hosts that
//! don't want to interpret models themselves get pixel-order parity with
//! the stock widgets.
//!
//! Bitmap drawing (the slide knob's icon) is deliberately absent; hosts
//! overlay icons after [`paint_slide`] using the knob circle from the model.

use kurbo::{Circle, Line, Point, Vec2};
use latchkey_pattern::render::{NodeFlags, RenderModel};

use crate::indicator::DotRender;
use crate::slide::SlideRender;

/// Minimal drawing surface offered by the host.
///
/// Implementations are expected to honor call order (later calls paint over
/// earlier ones); the paint helpers rely on overpainting the way the stock
/// widgets do.
pub trait DrawSurface {
    /// Host color or paint handle.
    type Color: Copy;

    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle, color: Self::Color);

    /// Stroke a line segment.
    fn stroke_line(&mut self, line: Line, width: f64, color: Self::Color);

    /// Draw a text run with its origin at `at`.
    fn draw_text(&mut self, text: &str, at: Point, size: f64, color: Self::Color);
}

/// Colors and metrics for [`paint_pattern`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PatternTheme<C> {
    /// Widget background, also used to hollow out rings and dots.
    pub background: C,
    /// Dot outline color.
    pub dot: C,
    /// Selected-node ring tint for a correct outcome.
    pub affirmative: C,
    /// Selected-node ring tint for an incorrect outcome.
    pub negative: C,
    /// Segment and live-segment color.
    pub line: C,
    /// Overlay text and crosshair color.
    pub overlay: C,
    /// Drawn dot radius.
    pub dot_radius: f64,
    /// Selected-node ring radius.
    pub ring_radius: f64,
    /// Segment stroke width.
    pub line_width: f64,
    /// Overlay crosshair stroke width.
    pub overlay_line_width: f64,
    /// Overlay text size.
    pub text_size: f64,
}

impl<C> PatternTheme<C> {
    /// Build a theme from colors, with the stock metrics.
    pub fn new(background: C, dot: C, affirmative: C, negative: C, line: C, overlay: C) -> Self {
        Self {
            background,
            dot,
            affirmative,
            negative,
            line,
            overlay,
            dot_radius: 5.0,
            ring_radius: 35.0,
            line_width: 10.0,
            overlay_line_width: 3.0,
            text_size: 30.0,
        }
    }
}

/// Paint a pattern-lock render model.
///
/// Draw order matches the stock widget: selected-node rings (outcome tint,
/// hollowed with the background), all dots (unselected ones hollowed),
/// committed segments, the live drag segment, then the overlay.
pub fn paint_pattern<S: DrawSurface>(
    model: &RenderModel,
    theme: &PatternTheme<S::Color>,
    surface: &mut S,
) {
    let ring_tint = if model.correct {
        theme.affirmative
    } else {
        theme.negative
    };
    for node in &model.nodes {
        if node.flags.contains(NodeFlags::SELECTED) {
            surface.fill_circle(Circle::new(node.center, theme.ring_radius), ring_tint);
            surface.fill_circle(
                Circle::new(node.center, theme.ring_radius - theme.dot_radius),
                theme.background,
            );
        }
    }

    for node in &model.nodes {
        surface.fill_circle(Circle::new(node.center, theme.dot_radius), theme.dot);
        if !node.flags.contains(NodeFlags::SELECTED) {
            surface.fill_circle(
                Circle::new(node.center, theme.dot_radius - theme.dot_radius / 3.0),
                theme.background,
            );
        }
    }

    for &segment in &model.segments {
        surface.stroke_line(segment, theme.line_width, theme.line);
    }
    if let Some(live) = model.live_segment {
        surface.stroke_line(live, theme.line_width, theme.line);
    }

    if let Some(overlay) = &model.overlay {
        surface.draw_text(
            &overlay.text,
            overlay.position + Vec2::new(-90.0, -100.0),
            theme.text_size,
            theme.overlay,
        );
        surface.stroke_line(overlay.horizontal, theme.overlay_line_width, theme.overlay);
        surface.stroke_line(overlay.vertical, theme.overlay_line_width, theme.overlay);
    }
}

/// Colors for [`paint_slide`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideTheme<C> {
    /// Knob outline and track ring color.
    pub knob: C,
    /// Background, used for the track interior and the armed knob face.
    pub background: C,
    /// Knob face tint while past the unlock threshold.
    pub unlocked: C,
}

/// Paint a slide-to-unlock render model.
pub fn paint_slide<S: DrawSurface>(
    model: &SlideRender,
    theme: &SlideTheme<S::Color>,
    surface: &mut S,
) {
    if let Some(track) = model.track {
        surface.fill_circle(track.outer, theme.knob);
        surface.fill_circle(track.inner, theme.background);
    }
    surface.fill_circle(model.knob, theme.knob);
    let face_tint = if model.unlocked {
        theme.unlocked
    } else {
        theme.background
    };
    surface.fill_circle(model.face, face_tint);
}

/// Colors for [`paint_indicator`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndicatorTheme<C> {
    /// Unselected dot color.
    pub dot: C,
    /// Selected dot color.
    pub active_dot: C,
}

/// Paint an indicator layout.
pub fn paint_indicator<S: DrawSurface>(
    dots: &[DotRender],
    theme: &IndicatorTheme<S::Color>,
    surface: &mut S,
) {
    for dot in dots {
        let tint = if dot.selected {
            theme.active_dot
        } else {
            theme.dot
        };
        surface.fill_circle(dot.dot, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};
    use latchkey_pattern::lock::PatternLock;
    use latchkey_pattern::types::PointerEvent;

    use crate::indicator::DotIndicator;
    use crate::slide::SlideLock;

    /// Records draw calls; colors are plain ARGB words.
    #[derive(Default)]
    struct Recorder {
        circles: Vec<(Circle, u32)>,
        lines: Vec<(Line, f64, u32)>,
        texts: Vec<(String, Point)>,
    }

    impl DrawSurface for Recorder {
        type Color = u32;

        fn fill_circle(&mut self, circle: Circle, color: u32) {
            self.circles.push((circle, color));
        }

        fn stroke_line(&mut self, line: Line, width: f64, color: u32) {
            self.lines.push((line, width, color));
        }

        fn draw_text(&mut self, text: &str, at: Point, _size: f64, _color: u32) {
            self.texts.push((text.to_string(), at));
        }
    }

    const BACKGROUND: u32 = 0xEE22_2222;
    const WHITE: u32 = 0xFFFF_FFFF;
    const GREEN: u32 = 0xFF00_FF00;
    const RED: u32 = 0xFFFF_0000;

    fn pattern_theme() -> PatternTheme<u32> {
        PatternTheme::new(BACKGROUND, WHITE, GREEN, RED, WHITE, RED)
    }

    #[test]
    fn pattern_paint_walks_the_stock_draw_order() {
        let mut lock = PatternLock::with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
        lock.handle_pointer(PointerEvent::Down(Point::new(50.0, 50.0)));
        lock.handle_pointer(PointerEvent::Move(Point::new(150.0, 50.0)));

        let mut recorder = Recorder::default();
        paint_pattern(&lock.render_model(), &pattern_theme(), &mut recorder);

        // 2 selected rings × 2 fills, 9 dots, 7 hollowed unselected dots.
        assert_eq!(recorder.circles.len(), 2 * 2 + 9 + 7);
        // Outcome defaults to correct mid-gesture: rings tint affirmative.
        assert_eq!(recorder.circles[0].1, GREEN);
        // 1 committed segment (sentinel filtered) + 1 live segment.
        assert_eq!(recorder.lines.len(), 2);
        assert!(recorder.texts.is_empty());
    }

    #[test]
    fn incorrect_outcome_tints_rings_negative() {
        let mut lock = PatternLock::with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
        for pt in [
            Point::new(50.0, 50.0),
            Point::new(150.0, 50.0),
            Point::new(250.0, 50.0),
        ] {
            lock.handle_pointer(PointerEvent::Move(pt));
        }
        lock.handle_pointer(PointerEvent::Up(Point::new(250.0, 50.0)));

        let mut recorder = Recorder::default();
        paint_pattern(&lock.render_model(), &pattern_theme(), &mut recorder);
        assert_eq!(recorder.circles[0].1, RED);
        // Released: no live segment.
        assert_eq!(recorder.lines.len(), 2, "two committed segments only");
    }

    #[test]
    fn overlay_paints_text_and_crosshairs() {
        let mut lock = PatternLock::with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
        lock.set_pointer_overlay(true);
        lock.handle_pointer(PointerEvent::Move(Point::new(120.0, 80.0)));

        let mut recorder = Recorder::default();
        paint_pattern(&lock.render_model(), &pattern_theme(), &mut recorder);

        assert_eq!(recorder.texts.len(), 1);
        assert_eq!(recorder.texts[0].0, "X 120, Y 80");
        assert_eq!(recorder.texts[0].1, Point::new(30.0, -20.0));
        // Two crosshair lines; no nodes selected, so no segments.
        assert_eq!(recorder.lines.len(), 2);
    }

    #[test]
    fn slide_paint_draws_track_then_knob() {
        let mut slide = SlideLock::with_bounds(Rect::new(0.0, 0.0, 400.0, 100.0));
        slide.handle_pointer(PointerEvent::Down(Point::new(250.0, 50.0)));

        let theme = SlideTheme {
            knob: WHITE,
            background: BACKGROUND,
            unlocked: GREEN,
        };
        let mut recorder = Recorder::default();
        paint_slide(&slide.render_model(), &theme, &mut recorder);

        assert_eq!(recorder.circles.len(), 4);
        // Past the threshold: the face tints with the unlocked color.
        assert_eq!(recorder.circles[3].1, GREEN);
    }

    #[test]
    fn indicator_paint_tints_the_selected_dot() {
        let mut indicator = DotIndicator::new(3);
        indicator.set_selected(2);
        let theme = IndicatorTheme {
            dot: BACKGROUND,
            active_dot: GREEN,
        };
        let mut recorder = Recorder::default();
        paint_indicator(
            &indicator.render(Rect::new(0.0, 0.0, 300.0, 50.0)),
            &theme,
            &mut recorder,
        );

        assert_eq!(recorder.circles.len(), 3);
        assert_eq!(recorder.circles[0].1, BACKGROUND);
        assert_eq!(recorder.circles[2].1, GREEN);
    }
}
