// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-gesture session record.
//!
//! ## Overview
//!
//! A [`Session`] is the mutable state of one in-progress or just-completed
//! gesture: the ordered selected node indices, the committed connecting
//! segments, the pressed/locked flags, the last judged outcome, and the raw
//! pointer position. It is mutated only by pointer handling and by reset.
//!
//! Invariants:
//!
//! - the selected sequence never contains a duplicate index;
//! - `locked` implies no further insertions succeed until [`Session::clear`];
//! - [`Session::clear`] restores every field at once, so no partially reset
//!   state is observable.

use alloc::vec::Vec;

use kurbo::{Line, Point};

/// Sentinel "no previous node" position, deliberately off any grid.
///
/// Used as the start of the first committed segment so segment construction
/// is total even before a node has been selected. Render derivation filters
/// segments anchored here.
pub const OFF_GRID: Point = Point::new(-5.0, -5.0);

/// Mutable state of one gesture.
///
/// Created empty at widget construction, owned by
/// [`PatternLock`](crate::lock::PatternLock), and replaced wholesale by
/// reset — never partially rebuilt.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    selected: Vec<usize>,
    segments: Vec<Line>,
    pressed: bool,
    locked: bool,
    correct: bool,
    pointer: Point,
    last_center: Point,
}

impl Session {
    /// Create an empty, unlocked session.
    ///
    /// The outcome flag starts as correct; it only reflects a judgement once
    /// [`Session::freeze`] has run.
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            segments: Vec::new(),
            pressed: false,
            locked: false,
            correct: true,
            pointer: Point::ZERO,
            last_center: OFF_GRID,
        }
    }

    /// Ordered selected node indices.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Committed segments between consecutively selected nodes.
    ///
    /// The first segment is anchored at [`OFF_GRID`]; see the constant docs.
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// Whether the pointer is currently down.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Whether input is rejected pending reset.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Outcome of the last judged gesture (correct until judged otherwise).
    pub fn outcome_correct(&self) -> bool {
        self.correct
    }

    /// Last raw pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Whether `index` is already part of the sequence.
    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Record the pointer position.
    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Record whether the pointer is down.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Append a node to the sequence, committing a segment from the
    /// previously selected center (or [`OFF_GRID`]) to `center`.
    ///
    /// Returns `false` without mutating when the session is locked or the
    /// node is already selected.
    pub fn push_node(&mut self, index: usize, center: Point) -> bool {
        if self.locked || self.contains(index) {
            return false;
        }
        self.segments.push(Line::new(self.last_center, center));
        self.selected.push(index);
        self.last_center = center;
        true
    }

    /// Freeze the session with a judged outcome.
    ///
    /// Locks input and resets the segment anchor to [`OFF_GRID`] so a stray
    /// later insertion could never connect to the judged pattern.
    pub fn freeze(&mut self, correct: bool) {
        self.correct = correct;
        self.locked = true;
        self.last_center = OFF_GRID;
    }

    /// Reset to the empty idle state.
    ///
    /// Clears the sequence and segments and restores the pressed, locked,
    /// and outcome flags in one step. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_commits_segment_from_sentinel_then_between_centers() {
        let mut s = Session::new();
        let a = Point::new(50.0, 50.0);
        let b = Point::new(150.0, 50.0);

        assert!(s.push_node(0, a));
        assert!(s.push_node(1, b));
        assert_eq!(s.selected(), &[0, 1]);
        assert_eq!(s.segments(), &[Line::new(OFF_GRID, a), Line::new(a, b)]);
    }

    #[test]
    fn duplicate_push_is_rejected() {
        let mut s = Session::new();
        let a = Point::new(50.0, 50.0);
        assert!(s.push_node(0, a));
        assert!(!s.push_node(0, a));
        assert_eq!(s.selected(), &[0]);
        assert_eq!(s.segments().len(), 1);
    }

    #[test]
    fn locked_session_rejects_push() {
        let mut s = Session::new();
        assert!(s.push_node(0, Point::new(50.0, 50.0)));
        s.freeze(false);
        assert!(!s.push_node(1, Point::new(150.0, 50.0)));
        assert_eq!(s.selected(), &[0]);
        assert!(!s.outcome_correct());
    }

    #[test]
    fn clear_restores_the_empty_idle_state() {
        let mut s = Session::new();
        s.set_pressed(true);
        s.set_pointer(Point::new(9.0, 9.0));
        s.push_node(3, Point::new(50.0, 150.0));
        s.freeze(false);

        s.clear();
        assert_eq!(s, Session::new());

        // Idempotent.
        s.clear();
        assert_eq!(s, Session::new());
    }

    #[test]
    fn freeze_resets_the_segment_anchor() {
        let mut s = Session::new();
        let a = Point::new(50.0, 50.0);
        s.push_node(0, a);
        s.freeze(true);
        // Unlock manually to observe the anchor (never happens in the
        // machine, which only unlocks via clear).
        s.locked = false;
        let b = Point::new(150.0, 50.0);
        s.push_node(1, b);
        assert_eq!(s.segments().last(), Some(&Line::new(OFF_GRID, b)));
    }
}
