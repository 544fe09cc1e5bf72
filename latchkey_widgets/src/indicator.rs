// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The passive page-dot indicator.
//!
//! Purely presentational: no state machine and no gesture handling. The
//! widget renders `count` dots evenly spaced across the bounds, centered
//! vertically, with the selected dot enlarged.

use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};

/// Renderable description of one indicator dot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DotRender {
    /// Page index of the dot.
    pub index: usize,
    /// Dot geometry.
    pub dot: Circle,
    /// Whether this dot marks the selected page.
    pub selected: bool,
}

/// A row of page dots with one highlighted as selected.
///
/// Dots are laid out on the horizontal midline: each dot occupies its
/// diameter plus one diameter of spacing, and the whole row is centered in
/// the bounds. A `selected` index outside `0..count` simply highlights
/// nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DotIndicator {
    count: usize,
    selected: usize,
    dot_size: f64,
    active_dot_size: f64,
}

impl DotIndicator {
    /// Default dot diameter, in surface units.
    pub const DEFAULT_DOT_SIZE: f64 = 11.0;

    /// Default selected-dot diameter, in surface units.
    pub const DEFAULT_ACTIVE_DOT_SIZE: f64 = 14.0;

    /// Create an indicator with `count` dots and the first selected.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            selected: 0,
            dot_size: Self::DEFAULT_DOT_SIZE,
            active_dot_size: Self::DEFAULT_ACTIVE_DOT_SIZE,
        }
    }

    /// Number of dots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Replace the number of dots.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Currently selected page.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replace the selected page.
    pub fn set_selected(&mut self, selected: usize) {
        self.selected = selected;
    }

    /// Replace the dot diameter.
    pub fn set_dot_size(&mut self, size: f64) {
        self.dot_size = size;
    }

    /// Replace the selected-dot diameter.
    pub fn set_active_dot_size(&mut self, size: f64) {
        self.active_dot_size = size;
    }

    /// Lay the dots out inside `bounds`.
    pub fn render(&self, bounds: Rect) -> Vec<DotRender> {
        let radius = self.dot_size / 2.0;
        let spacing = radius * 2.0;
        let row_width =
            self.dot_size * self.count as f64 + self.count.saturating_sub(1) as f64 * spacing;
        let offset = (bounds.width() - row_width) / 2.0;
        let y = bounds.y0 + bounds.height() / 2.0;

        (0..self.count)
            .map(|index| {
                let selected = index == self.selected;
                let x = bounds.x0 + offset + (self.dot_size + spacing) * index as f64 + radius;
                let r = if selected {
                    self.active_dot_size / 2.0
                } else {
                    radius
                };
                DotRender {
                    index,
                    dot: Circle::new(Point::new(x, y), r),
                    selected,
                }
            })
            .collect()
    }
}
