//! Orientation and closed-segment intersection.
//!
//! Decision sequence (order matters only for readability, every branch is
//! checked until one succeeds):
//! 1. o1 = O(p1,q1,p2), o2 = O(p1,q1,q2), o3 = O(p2,q2,p1), o4 = O(p2,q2,q1).
//! 2. General position: `o1 != o2 && o3 != o4`.
//! 3. Each collinear orientation whose endpoint lies in the other segment's
//!    closed bounding box.
//!
//! Pre: all coordinates finite. Non-finite input yields an unspecified bool.

use nalgebra::Vector2;

use super::types::{IntersectCfg, Orientation};

/// Cross term of the ordered triple `(a, b, c)`.
#[inline]
fn orientation_value(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)
}

/// Orientation of `(a, b, c)` with the exact `== 0.0` collinearity test.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Orientation {
    let val = orientation_value(a, b, c);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Orientation with `|cross| <= eps` treated as collinear.
///
/// `eps = 0.0` is identical to `orientation` (including for `-0.0`).
#[inline]
pub fn orientation_eps(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> Orientation {
    let val = orientation_value(a, b, c);
    if val.abs() <= eps {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// `b` inside the closed bounding box of `a` and `c`, grown by `eps`.
///
/// Only meaningful when `a, b, c` are already known to be collinear; on its
/// own this is a box test and reports points off the line.
#[inline]
fn on_segment(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    b.x <= a.x.max(c.x) + eps
        && b.x >= a.x.min(c.x) - eps
        && b.y <= a.y.max(c.y) + eps
        && b.y >= a.y.min(c.y) - eps
}

/// Do the closed segments `[p1, q1]` and `[p2, q2]` share at least one point?
///
/// Proper crossings, endpoint touches, T-junctions, and collinear overlaps all
/// report `true`. Pure and allocation-free.
#[inline]
pub fn segments_intersect(
    p1: Vector2<f64>,
    q1: Vector2<f64>,
    p2: Vector2<f64>,
    q2: Vector2<f64>,
) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);
    decide([o1, o2, o3, o4], p1, q1, p2, q2, 0.0)
}

/// `segments_intersect` with a collinearity tolerance.
///
/// With `IntersectCfg::default()` the result equals `segments_intersect` for
/// every input.
#[inline]
pub fn segments_intersect_cfg(
    p1: Vector2<f64>,
    q1: Vector2<f64>,
    p2: Vector2<f64>,
    q2: Vector2<f64>,
    cfg: IntersectCfg,
) -> bool {
    let eps = cfg.eps_collinear;
    let o1 = orientation_eps(p1, q1, p2, eps);
    let o2 = orientation_eps(p1, q1, q2, eps);
    let o3 = orientation_eps(p2, q2, p1, eps);
    let o4 = orientation_eps(p2, q2, q1, eps);
    decide([o1, o2, o3, o4], p1, q1, p2, q2, eps)
}

#[inline]
fn decide(
    [o1, o2, o3, o4]: [Orientation; 4],
    p1: Vector2<f64>,
    q1: Vector2<f64>,
    p2: Vector2<f64>,
    q2: Vector2<f64>,
    eps: f64,
) -> bool {
    // general position
    if o1 != o2 && o3 != o4 {
        return true;
    }
    // p2 on [p1, q1]
    if o1.is_collinear() && on_segment(p1, p2, q1, eps) {
        return true;
    }
    // q2 on [p1, q1]
    if o2.is_collinear() && on_segment(p1, q2, q1, eps) {
        return true;
    }
    // p1 on [p2, q2]
    if o3.is_collinear() && on_segment(p2, p1, q2, eps) {
        return true;
    }
    // q1 on [p2, q2]
    if o4.is_collinear() && on_segment(p2, q1, q2, eps) {
        return true;
    }
    false
}
