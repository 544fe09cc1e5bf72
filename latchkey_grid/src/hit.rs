// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment tests between a pointer position and an activation region.
//!
//! Both tests are written without `abs` or `sqrt` so they work in `no_std`
//! builds without pulling in `libm`.

use kurbo::Point;

/// Axis-aligned activation-box test for a grid node.
///
/// Returns `true` when `pt` lies strictly inside the box of half-extent
/// `radius × sensitivity` centered on `center`. Strict on all four sides: a
/// point exactly on the box edge does not hit.
///
/// `radius` is the drawn dot radius; `sensitivity` scales the activation
/// region independently of rendering. A `sensitivity` of zero collapses the
/// box, so nothing hits.
#[inline]
pub fn hits_node(center: Point, pt: Point, radius: f64, sensitivity: u32) -> bool {
    let reach = radius * f64::from(sensitivity);
    pt.x < center.x + reach
        && pt.x > center.x - reach
        && pt.y < center.y + reach
        && pt.y > center.y - reach
}

/// Radial threshold test: is `pt` strictly farther than `radius` from
/// `center`?
///
/// Compares squared distances. The slide-to-unlock widget uses this to
/// decide when a drag has left its track.
#[inline]
pub fn outside_radius(center: Point, pt: Point, radius: f64) -> bool {
    (pt - center).hypot2() > radius * radius
}
