// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=latchkey_widgets --heading-base-level=0

//! Latchkey Widgets: the non-pattern lock-screen widgets and the paint seam.
//!
//! ## Overview
//!
//! Two small widgets share the hit-testing primitives of `latchkey_grid`:
//!
//! - [`SlideLock`](crate::slide::SlideLock) — a slide-to-unlock control.
//!   The knob follows the pointer; unlock fires exactly once per drag when
//!   the pointer leaves the track radius, and re-arms when it re-enters.
//! - [`DotIndicator`](crate::indicator::DotIndicator) — a passive page-dot
//!   indicator. Purely presentational: evenly spaced dots with the selected
//!   one enlarged, no gesture handling at all.
//!
//! The [`surface`](crate::surface) module is the seam to the host renderer:
//! a [`DrawSurface`](crate::surface::DrawSurface) trait generic over the
//! host's color type, per-widget themes, and `paint_*` helpers that walk
//! each widget's render model in its draw order. Hosts that already consume
//! render models directly never need this module.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod indicator;
pub mod slide;
pub mod surface;
