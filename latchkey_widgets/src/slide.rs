// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slide-to-unlock control.
//!
//! ## Overview
//!
//! The knob rests at the center of the widget and follows the pointer while
//! pressed. When the squared distance from the rest center to the pointer
//! exceeds the track radius, the knob clamps to its last inside position and
//! [`Unlock`] fires — once. Re-entering the radius re-arms the control so a
//! later exit fires again; releasing recenters the knob and re-arms.
//!
//! Unlike the pattern lock there is no locked phase and no reset protocol:
//! the control is always live.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};
use latchkey_grid::outside_radius;
use latchkey_pattern::types::PointerEvent;

/// The unlock event. Fires at most once per excursion outside the track.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Unlock;

/// Listener invoked synchronously when the control unlocks.
pub type UnlockListener = Box<dyn FnMut(&Unlock)>;

/// Track ring geometry, present while the knob is being dragged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideTrack {
    /// Outer edge of the ring.
    pub outer: Circle,
    /// Inner edge of the ring (also the unlock threshold circle).
    pub inner: Circle,
}

/// Renderable description of the slide control.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideRender {
    /// Track ring, while pressed.
    pub track: Option<SlideTrack>,
    /// Knob outline circle.
    pub knob: Circle,
    /// Knob face (inset fill); tinted by `unlocked`.
    pub face: Circle,
    /// Whether the control is currently past the unlock threshold.
    pub unlocked: bool,
}

/// Slide-to-unlock state: bounds, knob position, and the armed flag.
pub struct SlideLock {
    bounds: Rect,
    touch: Point,
    pressed: bool,
    unlocked: bool,
    knob_radius: f64,
    listeners: Vec<UnlockListener>,
}

impl core::fmt::Debug for SlideLock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlideLock")
            .field("touch", &self.touch)
            .field("pressed", &self.pressed)
            .field("unlocked", &self.unlocked)
            .finish_non_exhaustive()
    }
}

impl SlideLock {
    /// Default knob radius, in surface units.
    pub const DEFAULT_KNOB_RADIUS: f64 = 35.0;

    /// Inset from the half-height to the outer track edge.
    const TRACK_OUTER_INSET: f64 = 5.0;

    /// Inset from the half-height to the unlock threshold.
    const TRACK_INNER_INSET: f64 = 10.0;

    /// Create a slide control with empty bounds.
    pub fn new() -> Self {
        Self::with_bounds(Rect::ZERO)
    }

    /// Create a slide control; the knob starts at the rest center.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            touch: bounds.center(),
            pressed: false,
            unlocked: false,
            knob_radius: Self::DEFAULT_KNOB_RADIUS,
            listeners: Vec::new(),
        }
    }

    /// Replace the bounds. Recenters the knob unless a drag is in progress.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        if !self.pressed {
            self.touch = bounds.center();
        }
    }

    /// Current bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the knob radius used for rendering.
    pub fn set_knob_radius(&mut self, radius: f64) {
        self.knob_radius = radius;
    }

    /// Whether the control is currently past the unlock threshold.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Subscribe to unlock events.
    pub fn on_unlock(&mut self, listener: impl FnMut(&Unlock) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Radius of the unlock threshold circle around the rest center.
    fn track_radius(&self) -> f64 {
        self.bounds.height() / 2.0 - Self::TRACK_INNER_INSET
    }

    /// Feed one pointer event through the control.
    ///
    /// Returns [`Unlock`] exactly when this event moved the pointer past the
    /// threshold while the control was armed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Unlock> {
        let rest = self.bounds.center();
        let last = self.touch;
        match event {
            PointerEvent::Down(pt) | PointerEvent::Move(pt) => {
                self.pressed = true;
                self.touch = pt;
            }
            PointerEvent::Up(_) | PointerEvent::Cancel(_) => {
                self.pressed = false;
                self.touch = rest;
            }
        }

        let radius = self.track_radius();
        if radius <= 0.0 {
            // Degenerate bounds; nothing sensible to judge yet.
            return None;
        }

        if outside_radius(rest, self.touch, radius) {
            // Clamp the knob to its last inside position.
            self.touch = last;
            let fired = !self.unlocked;
            self.unlocked = true;
            if fired {
                let unlock = Unlock;
                for listener in &mut self.listeners {
                    listener(&unlock);
                }
                return Some(unlock);
            }
            None
        } else {
            self.unlocked = false;
            None
        }
    }

    /// Derive the renderable description of the current state.
    pub fn render_model(&self) -> SlideRender {
        let rest = self.bounds.center();
        let half_height = self.bounds.height() / 2.0;
        let knob_center = if self.pressed { self.touch } else { rest };
        let track = self.pressed.then(|| SlideTrack {
            outer: Circle::new(rest, half_height - Self::TRACK_OUTER_INSET),
            inner: Circle::new(rest, half_height - Self::TRACK_INNER_INSET),
        });
        SlideRender {
            track,
            knob: Circle::new(knob_center, self.knob_radius),
            face: Circle::new(knob_center, self.knob_radius - 5.0),
            unlocked: self.unlocked,
        }
    }
}

impl Default for SlideLock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    /// 400×100 track: rest center (200, 50), unlock threshold radius 40.
    fn slide() -> SlideLock {
        SlideLock::with_bounds(Rect::new(0.0, 0.0, 400.0, 100.0))
    }

    #[test]
    fn unlock_fires_once_per_excursion() {
        let mut slide = slide();
        let fired: Rc<Cell<u32>> = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        slide.on_unlock(move |_| counter.set(counter.get() + 1));

        assert!(
            slide
                .handle_pointer(PointerEvent::Down(Point::new(210.0, 50.0)))
                .is_none(),
            "inside the track"
        );
        assert_eq!(
            slide.handle_pointer(PointerEvent::Move(Point::new(250.0, 50.0))),
            Some(Unlock)
        );
        // Still outside: no second event.
        assert!(
            slide
                .handle_pointer(PointerEvent::Move(Point::new(260.0, 50.0)))
                .is_none()
        );
        assert_eq!(fired.get(), 1);
        assert!(slide.is_unlocked());
    }

    #[test]
    fn re_entering_the_track_re_arms() {
        let mut slide = slide();
        assert!(
            slide
                .handle_pointer(PointerEvent::Down(Point::new(250.0, 50.0)))
                .is_some()
        );
        // Back inside: armed again.
        assert!(
            slide
                .handle_pointer(PointerEvent::Move(Point::new(205.0, 50.0)))
                .is_none()
        );
        assert!(!slide.is_unlocked());
        // Out once more: fires again.
        assert!(
            slide
                .handle_pointer(PointerEvent::Move(Point::new(250.0, 50.0)))
                .is_some()
        );
    }

    #[test]
    fn knob_clamps_to_last_inside_position_while_outside() {
        let mut slide = slide();
        slide.handle_pointer(PointerEvent::Down(Point::new(230.0, 50.0)));
        slide.handle_pointer(PointerEvent::Move(Point::new(300.0, 50.0)));
        let model = slide.render_model();
        assert_eq!(model.knob.center, Point::new(230.0, 50.0));
    }

    #[test]
    fn release_recenters_and_re_arms() {
        let mut slide = slide();
        slide.handle_pointer(PointerEvent::Down(Point::new(250.0, 50.0)));
        assert!(slide.is_unlocked());

        slide.handle_pointer(PointerEvent::Up(Point::new(250.0, 50.0)));
        assert!(!slide.is_unlocked(), "release resets the armed flag");
        let model = slide.render_model();
        assert_eq!(model.knob.center, Point::new(200.0, 50.0));
        assert!(model.track.is_none(), "track only renders while pressed");
    }

    #[test]
    fn track_renders_while_pressed() {
        let mut slide = slide();
        slide.handle_pointer(PointerEvent::Down(Point::new(205.0, 50.0)));
        let model = slide.render_model();
        let track = model.track.unwrap();
        assert_eq!(track.outer, Circle::new(Point::new(200.0, 50.0), 45.0));
        assert_eq!(track.inner, Circle::new(Point::new(200.0, 50.0), 40.0));
        assert_eq!(model.knob.center, Point::new(205.0, 50.0));
    }

    #[test]
    fn degenerate_bounds_never_fire() {
        let mut slide = SlideLock::new();
        assert!(
            slide
                .handle_pointer(PointerEvent::Down(Point::new(50.0, 50.0)))
                .is_none()
        );
        assert!(!slide.is_unlocked());
    }
}
