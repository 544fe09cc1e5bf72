// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=latchkey_pattern --heading-base-level=0

//! Latchkey Pattern: a deterministic pattern-lock gesture state machine.
//!
//! ## Overview
//!
//! This crate maps a continuous pointer trajectory onto a discrete, ordered
//! sequence of grid-node selections, judges the completed sequence against a
//! secret reference pattern, and derives a pure render model for live
//! feedback. It holds no opinion about the host UI framework: a thin adapter
//! forwards pointer events into [`PatternLock`](crate::lock::PatternLock)
//! and paints from [`RenderModel`](crate::render::RenderModel).
//!
//! ## Gesture lifecycle
//!
//! A gesture moves `Idle → Tracking → Locked → Idle`. While tracking, every
//! pointer event scans the grid and appends unvisited nodes whose activation
//! box contains the pointer (duplicates are never accepted). Release judges
//! the sequence — correct only when a reference is configured, more than
//! three nodes were selected, and the sequence equals the reference in
//! order — then freezes input and emits a
//! [`Completion`](crate::types::Completion), exactly once per gesture.
//!
//! ## Deferred reset
//!
//! The machine schedules nothing itself. Each completion names a delay and a
//! generation-stamped [`ResetToken`](crate::types::ResetToken); the host
//! runs the delayed callback on its UI queue and passes the token back to
//! [`reset_expired`](crate::lock::PatternLock::reset_expired), which ignores
//! tokens from superseded sessions. Hosts may also reset immediately with
//! [`reset_now`](crate::lock::PatternLock::reset_now). Both paths are
//! idempotent and atomic.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Rect};
//! use latchkey_pattern::lock::PatternLock;
//! use latchkey_pattern::types::PointerEvent;
//!
//! let mut lock = PatternLock::with_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
//! lock.set_reference(&[0, 1, 2, 5])?;
//!
//! // Drag across the top row, then down to node 5, and release.
//! lock.handle_pointer(PointerEvent::Down(Point::new(50.0, 50.0)));
//! lock.handle_pointer(PointerEvent::Move(Point::new(150.0, 50.0)));
//! lock.handle_pointer(PointerEvent::Move(Point::new(250.0, 50.0)));
//! lock.handle_pointer(PointerEvent::Move(Point::new(250.0, 150.0)));
//! let done = lock
//!     .handle_pointer(PointerEvent::Up(Point::new(250.0, 150.0)))
//!     .expect("release with selected nodes completes the gesture");
//!
//! assert!(done.correct);
//! assert_eq!(done.sequence, vec![0, 1, 2, 5]);
//!
//! // The host fires the deferred reset after `done.reset_after`.
//! assert!(lock.is_locked());
//! lock.reset_expired(done.token);
//! assert!(!lock.is_locked());
//! # Ok::<(), latchkey_pattern::types::PatternError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod lock;
pub mod render;
pub mod session;
pub mod types;
