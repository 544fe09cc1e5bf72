// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pattern-lock basics.
//!
//! Configures a reference pattern, simulates a drag across the matching
//! nodes, and drives the deferred reset the way a host event queue would.
//!
//! Run:
//! - `cargo run -p latchkey_demos --example pattern_basics`

use std::thread;

use kurbo::{Point, Rect};
use latchkey_pattern::lock::PatternLock;
use latchkey_pattern::types::PointerEvent;

fn main() {
    tracing_subscriber::fmt::init();

    let mut lock = PatternLock::with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
    lock.set_reference(&[0, 1, 2, 5]).expect("valid reference");
    lock.on_completion(|c| {
        println!(
            "listener: typed {:?} → {}",
            c.sequence,
            if c.correct { "correct" } else { "incorrect" }
        );
    });

    // Drag across the top row, down to node 5, then release.
    let path = [
        PointerEvent::Down(Point::new(50.0, 50.0)),
        PointerEvent::Move(Point::new(150.0, 50.0)),
        PointerEvent::Move(Point::new(250.0, 50.0)),
        PointerEvent::Move(Point::new(250.0, 150.0)),
        PointerEvent::Up(Point::new(250.0, 150.0)),
    ];
    let mut done = None;
    for ev in path {
        done = lock.handle_pointer(ev);
        println!("{ev:?} → phase {:?}, sequence {:?}", lock.phase(), lock.sequence());
    }

    // Emulate the host's deferred callback for the auto-reset.
    let done = done.expect("release completes the gesture");
    println!("scheduling reset in {:?}", done.reset_after);
    thread::sleep(done.reset_after);
    let applied = lock.reset_expired(done.token);
    println!("reset applied: {applied}; phase {:?}", lock.phase());
}
