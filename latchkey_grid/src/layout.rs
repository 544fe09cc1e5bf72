// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node-center layout for an N×N dot grid.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use crate::hit;

/// Node centers for an N×N dot grid inside a bounding rectangle.
///
/// Nodes are identified by their index `0..N²` in row-major order. Centers
/// are recomputed eagerly on [`GridLayout::set_bounds`], so a hit test never
/// runs against stale geometry after a resize.
///
/// The layout is keyed off the bounds' width (the widgets render in a square
/// box); hosts are expected to hand in a square rect. A degenerate rect
/// (width ≤ 0) yields no hits.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    dim: usize,
    bounds: Rect,
    centers: Vec<Point>,
}

impl GridLayout {
    /// Grid dimension used by the stock pattern-lock widget.
    pub const DEFAULT_DIM: usize = 3;

    /// Create a layout with empty bounds.
    ///
    /// All centers sit at the bounds origin until [`GridLayout::set_bounds`]
    /// provides real geometry.
    pub fn new(dim: usize) -> Self {
        Self::with_bounds(dim, Rect::ZERO)
    }

    /// Create a layout and compute centers for `bounds` immediately.
    pub fn with_bounds(dim: usize, bounds: Rect) -> Self {
        let mut layout = Self {
            dim,
            bounds,
            centers: Vec::new(),
        };
        layout.recompute();
        layout
    }

    /// Grid dimension `N`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of nodes, `N²`.
    pub fn node_count(&self) -> usize {
        self.dim * self.dim
    }

    /// Current bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the bounding rectangle and recompute all centers.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.recompute();
    }

    /// Center of node `index`, or `None` when out of range.
    pub fn center(&self, index: usize) -> Option<Point> {
        self.centers.get(index).copied()
    }

    /// All node centers in row-major order.
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// Indices of nodes whose activation box strictly contains `pt`, in
    /// ascending index order.
    ///
    /// The activation box has half-extent `radius × sensitivity` (see
    /// [`hits_node`](crate::hit::hits_node)). Filtering out already-selected
    /// nodes is the caller's concern.
    pub fn nodes_hit(
        &self,
        pt: Point,
        radius: f64,
        sensitivity: u32,
    ) -> impl Iterator<Item = usize> + '_ {
        let live = self.bounds.width() > 0.0;
        self.centers
            .iter()
            .enumerate()
            .filter(move |&(_, &center)| live && hit::hits_node(center, pt, radius, sensitivity))
            .map(|(index, _)| index)
    }

    fn recompute(&mut self) {
        let span = self.bounds.width();
        let step = if self.dim > 0 {
            span / self.dim as f64
        } else {
            0.0
        };
        let half = step / 2.0;
        let origin = self.bounds.origin();

        self.centers.clear();
        self.centers.reserve(self.node_count());
        for r in 0..self.dim {
            for c in 0..self.dim {
                let offset = Vec2::new(half + c as f64 * step, half + r as f64 * step);
                self.centers.push(origin + offset);
            }
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn three_by_three_centers_partition_into_sixths() {
        let grid = GridLayout::with_bounds(3, Rect::new(0.0, 0.0, 300.0, 300.0));
        assert_eq!(grid.node_count(), 9);
        // Row 0.
        assert_eq!(grid.center(0), Some(Point::new(50.0, 50.0)));
        assert_eq!(grid.center(1), Some(Point::new(150.0, 50.0)));
        assert_eq!(grid.center(2), Some(Point::new(250.0, 50.0)));
        // Middle and last rows.
        assert_eq!(grid.center(4), Some(Point::new(150.0, 150.0)));
        assert_eq!(grid.center(8), Some(Point::new(250.0, 250.0)));
        assert_eq!(grid.center(9), None);
    }

    #[test]
    fn centers_honor_bounds_origin() {
        let grid = GridLayout::with_bounds(3, Rect::new(10.0, 20.0, 310.0, 320.0));
        assert_eq!(grid.center(0), Some(Point::new(60.0, 70.0)));
        assert_eq!(grid.center(8), Some(Point::new(260.0, 270.0)));
    }

    #[test]
    fn set_bounds_recomputes_before_queries() {
        let mut grid = GridLayout::new(3);
        assert_eq!(grid.center(4), Some(Point::new(0.0, 0.0)));

        grid.set_bounds(Rect::new(0.0, 0.0, 600.0, 600.0));
        assert_eq!(grid.center(4), Some(Point::new(300.0, 300.0)));

        grid.set_bounds(Rect::new(0.0, 0.0, 90.0, 90.0));
        assert_eq!(grid.center(4), Some(Point::new(45.0, 45.0)));
    }

    #[test]
    fn degenerate_bounds_yield_no_hits() {
        let grid = GridLayout::new(3);
        let hits: Vec<_> = grid.nodes_hit(Point::new(0.0, 0.0), 5.0, 6).collect();
        assert!(hits.is_empty(), "empty bounds must not hit any node");
    }

    #[test]
    fn nodes_hit_returns_ascending_indices() {
        let grid = GridLayout::with_bounds(3, Rect::new(0.0, 0.0, 300.0, 300.0));
        // A generous multiplier reaches both node 0 and node 1 from between them.
        let hits: Vec<_> = grid.nodes_hit(Point::new(100.0, 50.0), 5.0, 12).collect();
        assert_eq!(hits, alloc::vec![0, 1]);
    }

    #[test]
    fn default_is_three_by_three() {
        let grid = GridLayout::default();
        assert_eq!(grid.dim(), 3);
        assert_eq!(grid.node_count(), 9);
    }
}
