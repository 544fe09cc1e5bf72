// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pattern-lock state machine.
//!
//! ## Overview
//!
//! [`PatternLock`] owns the grid layout and the live [`Session`], consumes
//! raw pointer events, judges completed gestures against the configured
//! [`Reference`](crate::types::Reference), and drives the auto-reset
//! protocol. It is framework-agnostic: a thin host adapter forwards pointer
//! events in and walks the [render model](crate::render) out.
//!
//! ## Gesture protocol
//!
//! - `Down`/`Move` while unlocked: record the pointer, then scan every grid
//!   node in ascending index order and append each unvisited node whose
//!   activation box contains the pointer. Several nodes can be accepted from
//!   a single event when a generous sensitivity makes their boxes overlap.
//! - `Up`/`Cancel` while unlocked with at least one node selected: judge the
//!   sequence, freeze input, and emit a [`Completion`] — returned from
//!   [`PatternLock::handle_pointer`] and delivered synchronously to every
//!   listener, exactly once per gesture. A release over an empty session
//!   emits nothing and stays idle.
//! - Any event while locked is ignored until a reset runs.
//!
//! ## Reset protocol
//!
//! The machine never schedules anything itself; the host owns the deferred
//! callback. A [`Completion`] carries a [`ResetToken`] and the delay
//! ([`PatternLock::RESET_DELAY`]). The host calls
//! [`PatternLock::reset_expired`] with that token when the delay elapses;
//! the token no-ops if any reset has started a newer session in the
//! meantime. [`PatternLock::reset_now`] is the unconditional, idempotent
//! host-triggered reset. Both clear the session atomically.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect};
use latchkey_grid::GridLayout;

use crate::render::RenderModel;
use crate::session::Session;
use crate::types::{Completion, PatternError, Phase, PointerEvent, Reference, ResetToken};

/// Listener invoked synchronously when a gesture completes.
pub type CompletionListener = Box<dyn FnMut(&Completion)>;

/// The pattern-lock widget state: grid, session, reference, and listeners.
///
/// ## Usage
///
/// - Construct with [`PatternLock::new`] and hand in geometry via
///   [`PatternLock::set_bounds`] before feeding events.
/// - Configure the secret with [`PatternLock::set_reference`]; subscribe
///   with [`PatternLock::on_completion`].
/// - Forward each host pointer event to [`PatternLock::handle_pointer`];
///   repaint from [`PatternLock::render_model`].
/// - Schedule [`PatternLock::reset_expired`] per the emitted [`Completion`].
pub struct PatternLock {
    grid: GridLayout,
    session: Session,
    reference: Option<Reference>,
    dot_radius: f64,
    sensitivity: u32,
    overlay: bool,
    generation: u64,
    listeners: Vec<CompletionListener>,
}

impl core::fmt::Debug for PatternLock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PatternLock")
            .field("phase", &self.phase())
            .field("sequence", &self.session.selected())
            .field("dot_radius", &self.dot_radius)
            .field("sensitivity", &self.sensitivity)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl PatternLock {
    /// Drawn dot radius used for hit testing, in surface units.
    ///
    /// Hosts applying density scaling convert before
    /// [`PatternLock::set_dot_radius`].
    pub const DEFAULT_DOT_RADIUS: f64 = 5.0;

    /// Default activation-box sensitivity multiplier.
    pub const DEFAULT_SENSITIVITY: u32 = 6;

    /// Delay before the deferred reset of a judged gesture.
    pub const RESET_DELAY: Duration = Duration::from_millis(1000);

    /// Create a 3×3 pattern lock with empty bounds.
    pub fn new() -> Self {
        Self {
            grid: GridLayout::new(GridLayout::DEFAULT_DIM),
            session: Session::new(),
            reference: None,
            dot_radius: Self::DEFAULT_DOT_RADIUS,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            overlay: false,
            generation: 0,
            listeners: Vec::new(),
        }
    }

    /// Create a 3×3 pattern lock with known bounds.
    pub fn with_bounds(bounds: Rect) -> Self {
        let mut lock = Self::new();
        lock.set_bounds(bounds);
        lock
    }

    /// Replace the widget bounds, recomputing node centers immediately.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.grid.set_bounds(bounds);
    }

    /// The owned grid layout.
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// The live session (read-only; mutation goes through events and reset).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the reference pattern.
    ///
    /// Fails — leaving the previous reference in place — when the length is
    /// outside `[4, node_count]` or any index is out of range. Replacing the
    /// reference mid-gesture is permitted and takes effect at the next
    /// completion check.
    pub fn set_reference(&mut self, indices: &[usize]) -> Result<(), PatternError> {
        self.reference = Some(Reference::new(indices, self.grid.node_count())?);
        Ok(())
    }

    /// The configured reference pattern, if any.
    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    /// Set the activation-box sensitivity multiplier.
    ///
    /// Stores the absolute value; affects subsequent hit tests only.
    pub fn set_sensitivity(&mut self, multiplier: i32) {
        self.sensitivity = multiplier.unsigned_abs();
    }

    /// Current sensitivity multiplier.
    pub fn sensitivity(&self) -> u32 {
        self.sensitivity
    }

    /// Set the drawn dot radius used for hit testing.
    pub fn set_dot_radius(&mut self, radius: f64) {
        self.dot_radius = radius;
    }

    /// Toggle the pointer-coordinate debug overlay.
    pub fn set_pointer_overlay(&mut self, enabled: bool) {
        self.overlay = enabled;
    }

    /// Subscribe to gesture completions.
    ///
    /// Every listener is invoked synchronously, exactly once per completed
    /// gesture, after the machine's own state is fully settled.
    pub fn on_completion(&mut self, listener: impl FnMut(&Completion) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current phase of the gesture state machine.
    pub fn phase(&self) -> Phase {
        if self.session.locked() {
            Phase::Locked
        } else if self.session.pressed() {
            Phase::Tracking
        } else {
            Phase::Idle
        }
    }

    /// Whether input is currently rejected pending reset.
    pub fn is_locked(&self) -> bool {
        self.session.locked()
    }

    /// The typed sequence so far, in selection order.
    pub fn sequence(&self) -> &[usize] {
        self.session.selected()
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Returns the [`Completion`] when this event ended a gesture with at
    /// least one selected node; `None` otherwise. Events arriving while
    /// locked are ignored entirely.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Completion> {
        if self.session.locked() {
            return None;
        }
        match event {
            PointerEvent::Down(pt) | PointerEvent::Move(pt) => {
                self.session.set_pressed(true);
                self.session.set_pointer(pt);
                self.scan(pt);
                None
            }
            PointerEvent::Up(pt) | PointerEvent::Cancel(pt) => {
                self.session.set_pressed(false);
                self.session.set_pointer(pt);
                self.complete()
            }
        }
    }

    /// Host-triggered immediate reset, equivalent to the deferred reset
    /// firing early. Idempotent.
    pub fn reset_now(&mut self) {
        self.session.clear();
        self.generation = self.generation.wrapping_add(1);
        #[cfg(feature = "tracing")]
        tracing::trace!(generation = self.generation, "pattern field reset");
    }

    /// The deferred-reset callback path.
    ///
    /// Applies the reset and returns `true` when `token` still matches the
    /// current session generation; returns `false` — leaving all state
    /// untouched — when any reset has already started a newer session.
    pub fn reset_expired(&mut self, token: ResetToken) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.reset_now();
        true
    }

    /// Derive the renderable description of the current state.
    ///
    /// Pure with respect to the session, grid, and overlay flag; see
    /// [`crate::render`].
    pub fn render_model(&self) -> RenderModel {
        crate::render::derive(&self.session, &self.grid, self.overlay)
    }

    fn scan(&mut self, pt: Point) {
        let Self {
            grid,
            session,
            dot_radius,
            sensitivity,
            ..
        } = self;
        for index in grid.nodes_hit(pt, *dot_radius, *sensitivity) {
            let Some(center) = grid.center(index) else {
                continue;
            };
            if session.push_node(index, center) {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, count = session.selected().len(), "node accepted");
            }
        }
    }

    fn complete(&mut self) -> Option<Completion> {
        if self.session.selected().is_empty() {
            return None;
        }
        let matches = self
            .reference
            .as_ref()
            .is_some_and(|r| r.indices() == self.session.selected());
        let correct = matches && self.session.selected().len() > 3;
        self.session.freeze(correct);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            correct,
            len = self.session.selected().len(),
            "pattern judged"
        );

        let completion = Completion {
            correct,
            sequence: self.session.selected().to_vec(),
            reset_after: Self::RESET_DELAY,
            token: ResetToken(self.generation),
        };
        for listener in &mut self.listeners {
            listener(&completion);
        }
        Some(completion)
    }
}

impl Default for PatternLock {
    fn default() -> Self {
        Self::new()
    }
}
