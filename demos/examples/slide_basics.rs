// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide-to-unlock basics: arm, fire, re-arm.
//!
//! Run:
//! - `cargo run -p latchkey_demos --example slide_basics`

use kurbo::{Point, Rect};
use latchkey_pattern::types::PointerEvent;
use latchkey_widgets::slide::SlideLock;

fn main() {
    let mut slide = SlideLock::with_bounds(Rect::new(0.0, 0.0, 400.0, 100.0));
    slide.on_unlock(|_| println!("listener: unlocked!"));

    let events = [
        PointerEvent::Down(Point::new(210.0, 50.0)),  // inside the track
        PointerEvent::Move(Point::new(260.0, 50.0)),  // out: fires
        PointerEvent::Move(Point::new(300.0, 50.0)),  // still out: silent
        PointerEvent::Move(Point::new(205.0, 50.0)),  // back in: re-arms
        PointerEvent::Move(Point::new(260.0, 50.0)),  // out again: fires
        PointerEvent::Up(Point::new(260.0, 50.0)),    // release: recenters
    ];
    for ev in events {
        let fired = slide.handle_pointer(ev).is_some();
        let model = slide.render_model();
        println!(
            "{ev:?} → knob {:?}, unlocked {}, fired {}",
            model.knob.center, model.unlocked, fired
        );
    }
}
