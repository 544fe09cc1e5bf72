// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-model walkthrough with the coordinate overlay.
//!
//! Drives a partial gesture and dumps the derived render model: node flags,
//! committed segments, the live drag line, and the debug crosshairs.
//!
//! Run:
//! - `cargo run -p latchkey_demos --example pattern_overlay`

use kurbo::{Point, Rect};
use latchkey_pattern::lock::PatternLock;
use latchkey_pattern::render::NodeFlags;
use latchkey_pattern::types::PointerEvent;

fn main() {
    let mut lock = PatternLock::with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
    lock.set_pointer_overlay(true);

    lock.handle_pointer(PointerEvent::Down(Point::new(50.0, 50.0)));
    lock.handle_pointer(PointerEvent::Move(Point::new(150.0, 50.0)));
    lock.handle_pointer(PointerEvent::Move(Point::new(180.0, 120.0)));

    let model = lock.render_model();
    println!("== Nodes ==");
    for node in &model.nodes {
        let mark = if node.flags.contains(NodeFlags::LAST) {
            "last"
        } else if node.flags.contains(NodeFlags::SELECTED) {
            "selected"
        } else {
            "·"
        };
        println!("  {} at {:?}  {}", node.index, node.center, mark);
    }

    println!("== Segments ==");
    for segment in &model.segments {
        println!("  {:?} → {:?}", segment.p0, segment.p1);
    }
    if let Some(live) = model.live_segment {
        println!("  live: {:?} → {:?}", live.p0, live.p1);
    }

    if let Some(overlay) = &model.overlay {
        println!("== Overlay ==");
        println!("  {}", overlay.text);
        println!("  crosshair h: {:?} → {:?}", overlay.horizontal.p0, overlay.horizontal.p1);
        println!("  crosshair v: {:?} → {:?}", overlay.vertical.p0, overlay.vertical.p1);
    }
}
