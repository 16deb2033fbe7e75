//! Basic 2D types and tolerances for segment predicates.
//!
//! - `Orientation`: rotational sense of an ordered point triple.
//! - `Segment2`: closed segment between two points; direction is kept for the
//!   caller but ignored by intersection tests.
//! - `IntersectCfg`: centralizes the collinearity tolerance.

use nalgebra::Vector2;

use super::predicates::segments_intersect_cfg;

/// Rotational sense of an ordered triple `(a, b, c)`.
///
/// The polarity follows the cross term used by `orientation`: a positive value
/// is labelled `Clockwise` in a y-up frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Orientation of the mirrored triple (swap any two points).
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

/// Predicate configuration (tolerances).
///
/// `eps_collinear = 0.0` is the literal test: the cross term must be exactly
/// zero and bounding boxes are closed but not grown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectCfg {
    pub eps_collinear: f64,
}

impl Default for IntersectCfg {
    fn default() -> Self {
        Self { eps_collinear: 0.0 }
    }
}

impl IntersectCfg {
    #[inline]
    pub fn exact() -> Self {
        Self::default()
    }

    /// Negative or non-finite `eps` collapses to the exact test.
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        let eps_collinear = if eps.is_finite() && eps > 0.0 { eps } else { 0.0 };
        Self { eps_collinear }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.eps_collinear == 0.0
    }
}

/// Closed segment `[p, q]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub p: Vector2<f64>,
    pub q: Vector2<f64>,
}

impl Segment2 {
    #[inline]
    pub fn new(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        Self { p, q }
    }

    #[inline]
    pub fn from_coords(px: f64, py: f64, qx: f64, qy: f64) -> Self {
        Self::new(Vector2::new(px, py), Vector2::new(qx, qy))
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.q, self.p)
    }

    /// All four coordinates finite (the predicate's precondition).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p.iter().chain(self.q.iter()).all(|v| v.is_finite())
    }

    /// Zero-length segment (`p == q`).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p == self.q
    }

    #[inline]
    pub fn intersects(&self, other: &Segment2) -> bool {
        self.intersects_cfg(other, IntersectCfg::default())
    }

    #[inline]
    pub fn intersects_cfg(&self, other: &Segment2, cfg: IntersectCfg) -> bool {
        segments_intersect_cfg(self.p, self.q, other.p, other.q, cfg)
    }

    /// Whether `self` and `other` share an endpoint (by coordinate value).
    #[inline]
    pub fn shares_endpoint(&self, other: &Segment2) -> bool {
        self.p == other.p || self.p == other.q || self.q == other.p || self.q == other.q
    }
}

impl From<(Vector2<f64>, Vector2<f64>)> for Segment2 {
    fn from((p, q): (Vector2<f64>, Vector2<f64>)) -> Self {
        Self::new(p, q)
    }
}
