// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure render-model derivation.
//!
//! ## Overview
//!
//! [`derive`] turns the current [`Session`] and [`GridLayout`] into a
//! [`RenderModel`]: everything a paint adapter needs to draw one frame, with
//! no reference back into the machine. Identical inputs always produce an
//! identical model, so hosts may derive as often (or as rarely) as they
//! repaint.
//!
//! The model mirrors the widget's draw order: node dots with selection
//! flags and the judged outcome for tinting, the committed segments (the
//! sentinel-anchored first segment is filtered out here), the in-progress
//! drag line while the pointer is down, and the optional coordinate overlay.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::{Line, Point};
use latchkey_grid::GridLayout;

use crate::session::{OFF_GRID, Session};

bitflags! {
    /// Per-node render flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is part of the current sequence.
        const SELECTED = 0b0000_0001;
        /// Node is the most recently selected one (the live-segment anchor).
        const LAST = 0b0000_0010;
    }
}

/// Renderable state of one grid node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeRender {
    /// Node index, row-major.
    pub index: usize,
    /// Computed center within the widget bounds.
    pub center: Point,
    /// Selection flags.
    pub flags: NodeFlags,
}

/// Debug overlay: literal pointer coordinates plus crosshair lines.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerOverlay {
    /// Raw pointer position.
    pub position: Point,
    /// Coordinates formatted for on-surface text.
    pub text: String,
    /// Full-width horizontal line through the pointer.
    pub horizontal: Line,
    /// Full-height vertical line through the pointer.
    pub vertical: Line,
}

/// A complete renderable description of the widget state.
///
/// Produced by [`derive`] (or the convenience
/// [`PatternLock::render_model`](crate::lock::PatternLock::render_model)).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    /// Every grid node with its selection flags, in index order.
    pub nodes: Vec<NodeRender>,
    /// Outcome tint for selected nodes: affirmative when `true`, negative
    /// otherwise. Meaningful while any node is selected.
    pub correct: bool,
    /// Committed segments between consecutively selected nodes.
    pub segments: Vec<Line>,
    /// Drag line from the last selected center to the pointer, while
    /// pressed with at least one node selected.
    pub live_segment: Option<Line>,
    /// Coordinate overlay, when enabled.
    pub overlay: Option<PointerOverlay>,
}

/// Derive the render model for one frame.
pub fn derive(session: &Session, grid: &GridLayout, overlay: bool) -> RenderModel {
    let last = session.selected().last().copied();
    let nodes = grid
        .centers()
        .iter()
        .enumerate()
        .map(|(index, &center)| {
            let mut flags = NodeFlags::empty();
            if session.contains(index) {
                flags |= NodeFlags::SELECTED;
            }
            if last == Some(index) {
                flags |= NodeFlags::LAST;
            }
            NodeRender {
                index,
                center,
                flags,
            }
        })
        .collect();

    let segments = session
        .segments()
        .iter()
        .copied()
        .filter(|segment| segment.p0 != OFF_GRID)
        .collect();

    let live_segment = if session.pressed() {
        last.and_then(|index| grid.center(index))
            .map(|center| Line::new(center, session.pointer()))
    } else {
        None
    };

    let overlay = overlay.then(|| {
        let p = session.pointer();
        let bounds = grid.bounds();
        PointerOverlay {
            position: p,
            text: format!("X {:.0}, Y {:.0}", p.x, p.y),
            horizontal: Line::new(Point::new(bounds.x0, p.y), Point::new(bounds.x1, p.y)),
            vertical: Line::new(Point::new(p.x, bounds.y0), Point::new(p.x, bounds.y1)),
        }
    });

    RenderModel {
        nodes,
        correct: session.outcome_correct(),
        segments,
        live_segment,
        overlay,
    }
}
