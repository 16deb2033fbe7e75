//! Segment-intersection oracle for concave-hull construction.
//!
//! The hull-growth driver (edge selection, termination) lives elsewhere; this
//! crate owns the predicate it calls to veto candidate boundary edges, plus a
//! few boundary-validation helpers built on top of it.
//!
//! API Policy
//! - The predicate `segments_intersect` is the stable contract. Everything
//!   else is convenience surface for drivers and experiments.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{segments_intersect, IntersectCfg, Orientation, Segment2};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_segment, draw_segments, ReplayToken, SegmentCfg};
    pub use crate::geom2::{
        can_accept, can_accept_adjacent, crossing_edges, first_crossing, is_simple_polygon,
        orientation, orientation_eps, segments_intersect, segments_intersect_cfg, IntersectCfg,
        Orientation, Segment2,
    };
    pub use nalgebra::Vector2 as Vec2;
}
