// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=latchkey_grid --heading-base-level=0

//! Latchkey Grid: layout and pointer hit testing for lock-style input widgets.
//!
//! ## Overview
//!
//! This crate computes node-center positions for an N×N dot grid inside a
//! bounding rectangle and answers containment queries between a pointer
//! position and a node's activation region. It holds no gesture state; the
//! pattern state machine in `latchkey_pattern` owns a [`GridLayout`] and
//! filters hits against its session.
//!
//! ## Layout
//!
//! For a bounding box of side `S` and grid dimension `N` (3 by default), the
//! node at grid coordinate `(c, r)` is centered at
//! `(S/(2N) + c·S/N, S/(2N) + r·S/N)`, offset by the bounds origin. For the
//! default 3×3 grid this is the familiar sixths partition: columns at `S/6`,
//! `S/2`, and `5S/6`. Centers are recomputed eagerly whenever the bounds
//! change, so queries never observe stale geometry.
//!
//! ## Hit testing
//!
//! A pointer "hits" a node when it falls strictly inside an axis-aligned box
//! of half-extent `radius × sensitivity` around the node center — a box
//! test, not a circular one. The sensitivity multiplier (6 by default in the
//! widgets above) enlarges the activation region without changing the drawn
//! dot radius; growing it strictly grows the set of points that hit.
//!
//! The radial counterpart, [`outside_radius`], is a squared-distance test
//! shared with the slide-to-unlock widget. Neither test needs `sqrt` or
//! `abs`, so the crate compiles without `std` or `libm` math.
//!
//! ### Minimal usage
//!
//! ```
//! use latchkey_grid::GridLayout;
//! use kurbo::{Point, Rect};
//!
//! let grid = GridLayout::with_bounds(3, Rect::new(0.0, 0.0, 300.0, 300.0));
//! assert_eq!(grid.center(0), Some(Point::new(50.0, 50.0)));
//! assert_eq!(grid.center(8), Some(Point::new(250.0, 250.0)));
//!
//! // Dot radius 5.0 at 6× sensitivity: a 30-unit half-extent box.
//! let hits: Vec<_> = grid.nodes_hit(Point::new(60.0, 45.0), 5.0, 6).collect();
//! assert_eq!(hits, vec![0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod hit;
pub mod layout;

pub use hit::{hits_node, outside_radius};
pub use layout::GridLayout;
