//! 2D segment predicates (closed segments, f64 coordinates).
//!
//! Purpose
//! - Decide whether two closed segments share a point, exactly reproducing
//!   the orientation test plus the four collinear endpoint checks.
//! - Offer boundary-level helpers (`first_crossing`, `is_simple_polygon`) that
//!   a concave-hull driver uses to validate candidate edges.
//!
//! Numerics
//! - Default collinearity is the literal `cross == 0.0` test. It is exact for
//!   integer-valued (or dyadic, small-magnitude) coordinates. Near-collinear
//!   noisy input can flip either way; `IntersectCfg::eps_collinear` is the
//!   opt-in knob for that, and defaults to zero.
//! - Non-finite coordinates give an unspecified boolean. Drivers validate
//!   with `Segment2::is_finite` first.
//!
//! Code cross-refs: `predicates::{orientation, segments_intersect}`,
//! `boundary::{first_crossing, is_simple_polygon}`, `types::IntersectCfg`

pub mod boundary;
pub mod predicates;
pub mod rand;
mod types;

pub use boundary::{
    can_accept, can_accept_adjacent, can_accept_adjacent_cfg, can_accept_cfg, crossing_edges,
    crossing_edges_cfg, first_crossing, first_crossing_cfg, is_simple_polygon,
    is_simple_polygon_cfg, simple_polygon_violation, simple_polygon_violation_cfg,
};
pub use predicates::{orientation, orientation_eps, segments_intersect, segments_intersect_cfg};
pub use types::{IntersectCfg, Orientation, Segment2};
