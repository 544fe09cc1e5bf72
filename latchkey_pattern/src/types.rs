// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the pattern lock: pointer events, phases, the validated
//! reference pattern, completion events, and reset tokens.
//!
//! ## Overview
//!
//! These types describe the state machine's protocol and its inputs/outputs.
//! They are produced and consumed by [`PatternLock`](crate::lock::PatternLock)
//! and by downstream adapters.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;

/// Phases of a pattern gesture.
///
/// Reported by [`PatternLock::phase`](crate::lock::PatternLock::phase).
/// A gesture moves `Idle → Tracking → Locked → Idle`; the final edge is the
/// reset (delayed or host-triggered).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No gesture in progress; the session is empty and input is accepted.
    Idle,
    /// Pointer is down; zero or more nodes selected so far.
    Tracking,
    /// Gesture completed and judged; input is rejected until reset.
    Locked,
}

/// A raw pointer event fed into the state machine.
///
/// `Down` and `Move` are handled identically (the activation scan runs for
/// both); `Up` and `Cancel` both end the gesture. Out-of-order sequences —
/// a `Move` with no preceding `Down`, or a repeated `Up` — are tolerated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed at a position.
    Down(Point),
    /// Pointer dragged to a position.
    Move(Point),
    /// Pointer released at a position.
    Up(Point),
    /// Gesture aborted by the host at a position. Judged like `Up`.
    Cancel(Point),
}

impl PointerEvent {
    /// The position carried by the event.
    pub fn position(self) -> Point {
        match self {
            Self::Down(p) | Self::Move(p) | Self::Up(p) | Self::Cancel(p) => p,
        }
    }
}

/// Why a reference pattern was rejected at configuration time.
///
/// Returned by [`Reference::new`] and
/// [`PatternLock::set_reference`](crate::lock::PatternLock::set_reference).
/// An invalid reference is never stored; configuration either fully replaces
/// the previous reference or leaves it untouched.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// The sequence length is outside `[4, node_count]`.
    #[error("pattern length must be between {min} and {max} nodes, got {len}")]
    InvalidLength {
        /// Rejected length.
        len: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length (the grid's node count).
        max: usize,
    },
    /// A node index is outside the grid.
    #[error("node index {index} is outside the grid (0..{node_count})")]
    InvalidIndex {
        /// Rejected index.
        index: usize,
        /// Number of nodes in the grid.
        node_count: usize,
    },
}

/// A validated secret pattern: an ordered node sequence a typed pattern is
/// checked against.
///
/// Length is constrained to `[Reference::MIN_LEN, node_count]` and every
/// index must be in range for the grid. Comparison against a session is by
/// exact ordered equality.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reference {
    indices: Vec<usize>,
}

impl Reference {
    /// Shortest accepted reference pattern.
    pub const MIN_LEN: usize = 4;

    /// Validate `indices` against a grid of `node_count` nodes.
    pub fn new(indices: &[usize], node_count: usize) -> Result<Self, PatternError> {
        if indices.len() < Self::MIN_LEN || indices.len() > node_count {
            return Err(PatternError::InvalidLength {
                len: indices.len(),
                min: Self::MIN_LEN,
                max: node_count,
            });
        }
        for &index in indices {
            if index >= node_count {
                return Err(PatternError::InvalidIndex { index, node_count });
            }
        }
        Ok(Self {
            indices: indices.to_vec(),
        })
    }

    /// The ordered node indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Guard for the deferred reset of a completed gesture.
///
/// Minted when a gesture locks and carried by [`Completion`]. A token is
/// stamped with the session generation, in the spirit of a generational
/// handle: once any reset has started a newer session, stale tokens are
/// ignored, so a late-firing timer cannot clobber an in-progress gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ResetToken(pub(crate) u64);

/// A completed, judged gesture.
///
/// Produced exactly once per completed gesture (pointer up or cancel with at
/// least one node selected) by
/// [`PatternLock::handle_pointer`](crate::lock::PatternLock::handle_pointer),
/// which both returns it and delivers it synchronously to every subscribed
/// listener. The host is expected to schedule
/// [`PatternLock::reset_expired`](crate::lock::PatternLock::reset_expired)
/// with `token` after `reset_after` on its UI event queue.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    /// Whether the typed sequence matched the configured reference exactly.
    pub correct: bool,
    /// The typed node sequence, in selection order.
    pub sequence: Vec<usize>,
    /// Delay after which the host should fire the deferred reset.
    pub reset_after: Duration,
    /// Guard to pass to `reset_expired`.
    pub token: ResetToken,
}
