//! Boundary-level validation on top of `segments_intersect`.
//!
//! A concave-hull driver grows a boundary edge by edge and rejects a candidate
//! that meets any accepted edge. Two flavours are provided:
//! - strict (`can_accept`, `first_crossing`): any shared point vetoes;
//! - chained (`can_accept_adjacent`): edges meeting the candidate only at a
//!   common endpoint are allowed, which is what consecutive boundary edges do.
//!
//! `is_simple_polygon` checks a closed ring with the same rules.

use nalgebra::Vector2;

use super::predicates::orientation_eps;
use super::types::{IntersectCfg, Segment2};

/// Index of the first accepted edge that `candidate` intersects.
pub fn first_crossing(candidate: &Segment2, accepted: &[Segment2]) -> Option<usize> {
    first_crossing_cfg(candidate, accepted, IntersectCfg::default())
}

pub fn first_crossing_cfg(
    candidate: &Segment2,
    accepted: &[Segment2],
    cfg: IntersectCfg,
) -> Option<usize> {
    accepted
        .iter()
        .position(|e| candidate.intersects_cfg(e, cfg))
}

/// Indices of all accepted edges that `candidate` intersects (ascending).
pub fn crossing_edges(candidate: &Segment2, accepted: &[Segment2]) -> Vec<usize> {
    crossing_edges_cfg(candidate, accepted, IntersectCfg::default())
}

pub fn crossing_edges_cfg(
    candidate: &Segment2,
    accepted: &[Segment2],
    cfg: IntersectCfg,
) -> Vec<usize> {
    accepted
        .iter()
        .enumerate()
        .filter(|(_, e)| candidate.intersects_cfg(e, cfg))
        .map(|(i, _)| i)
        .collect()
}

/// `candidate` shares no point with any accepted edge.
pub fn can_accept(candidate: &Segment2, accepted: &[Segment2]) -> bool {
    first_crossing(candidate, accepted).is_none()
}

pub fn can_accept_cfg(candidate: &Segment2, accepted: &[Segment2], cfg: IntersectCfg) -> bool {
    first_crossing_cfg(candidate, accepted, cfg).is_none()
}

/// Like `can_accept`, but an edge that touches `candidate` only at a common
/// endpoint does not veto. Collinear overlap past the shared endpoint and
/// duplicated edges still veto.
pub fn can_accept_adjacent(candidate: &Segment2, accepted: &[Segment2]) -> bool {
    can_accept_adjacent_cfg(candidate, accepted, IntersectCfg::default())
}

pub fn can_accept_adjacent_cfg(
    candidate: &Segment2,
    accepted: &[Segment2],
    cfg: IntersectCfg,
) -> bool {
    accepted.iter().all(|e| {
        !candidate.intersects_cfg(e, cfg) || meets_only_at_shared_endpoint(candidate, e, cfg)
    })
}

/// Closed ring `vertices[0] → … → vertices[n-1] → vertices[0]` has no
/// self-intersection. Fewer than three vertices is never simple.
pub fn is_simple_polygon(vertices: &[Vector2<f64>]) -> bool {
    is_simple_polygon_cfg(vertices, IntersectCfg::default())
}

pub fn is_simple_polygon_cfg(vertices: &[Vector2<f64>], cfg: IntersectCfg) -> bool {
    vertices.len() >= 3 && simple_polygon_violation_cfg(vertices, cfg).is_none()
}

/// First offending edge pair `(i, j)`, `i <= j`, of a closed ring, where edge
/// `k` runs from `vertices[k]` to `vertices[(k + 1) % n]`.
///
/// A zero-length edge `k` is reported as `(k, k)`. Rings with fewer than three
/// vertices have nothing to check and return `None`.
pub fn simple_polygon_violation(vertices: &[Vector2<f64>]) -> Option<(usize, usize)> {
    simple_polygon_violation_cfg(vertices, IntersectCfg::default())
}

pub fn simple_polygon_violation_cfg(
    vertices: &[Vector2<f64>],
    cfg: IntersectCfg,
) -> Option<(usize, usize)> {
    let n = vertices.len();
    if n < 3 {
        return None;
    }
    let edges: Vec<Segment2> = (0..n)
        .map(|k| Segment2::new(vertices[k], vertices[(k + 1) % n]))
        .collect();
    if let Some(k) = edges.iter().position(Segment2::is_degenerate) {
        return Some((k, k));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            let (a, b) = (&edges[i], &edges[j]);
            if !a.intersects_cfg(b, cfg) {
                continue;
            }
            if adjacent && meets_only_at_shared_endpoint(a, b, cfg) {
                continue;
            }
            return Some((i, j));
        }
    }
    None
}

/// Pre: `a` and `b` intersect. True if their only common point is an endpoint
/// they share by coordinate value.
fn meets_only_at_shared_endpoint(a: &Segment2, b: &Segment2, cfg: IntersectCfg) -> bool {
    // (shared, a's other end, b's other end)
    let (s, ra, rb) = if a.p == b.p {
        (a.p, a.q, b.q)
    } else if a.p == b.q {
        (a.p, a.q, b.p)
    } else if a.q == b.p {
        (a.q, a.p, b.q)
    } else if a.q == b.q {
        (a.q, a.p, b.p)
    } else {
        return false;
    };
    if ra == s || rb == s {
        // a zero-length segment meets the other one at `s` only
        return true;
    }
    if ra == rb {
        return false;
    }
    // Distinct lines meet once; on one line, overlap iff both run the same way from `s`.
    !(orientation_eps(s, ra, rb, cfg.eps_collinear).is_collinear() && (ra - s).dot(&(rb - s)) > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn seg(px: f64, py: f64, qx: f64, qy: f64) -> Segment2 {
        Segment2::from_coords(px, py, qx, qy)
    }

    #[test]
    fn first_crossing_reports_lowest_index() {
        let accepted = [
            seg(10.0, 10.0, 11.0, 10.0),
            seg(0.0, 2.0, 2.0, 0.0),
            seg(1.0, 0.0, 1.0, 5.0),
        ];
        let cand = seg(0.0, 0.0, 2.0, 2.0);
        assert_eq!(first_crossing(&cand, &accepted), Some(1));
        assert_eq!(crossing_edges(&cand, &accepted), vec![1, 2]);
        assert!(!can_accept(&cand, &accepted));
        assert!(can_accept(&cand, &accepted[..1]));
        assert_eq!(first_crossing(&cand, &[]), None);
    }

    #[test]
    fn chained_edges_do_not_veto() {
        // open chain (0,0) → (2,0) → (2,2); candidate continues from (2,2)
        let accepted = [seg(0.0, 0.0, 2.0, 0.0), seg(2.0, 0.0, 2.0, 2.0)];
        let cand = seg(2.0, 2.0, 0.0, 3.0);
        assert!(!can_accept(&cand, &accepted));
        assert!(can_accept_adjacent(&cand, &accepted));
    }

    #[test]
    fn chained_edges_still_veto_real_crossings() {
        let accepted = [seg(0.0, 0.0, 2.0, 0.0), seg(2.0, 0.0, 2.0, 2.0)];
        // shares (2,2) with edge 1 but crosses edge 0
        let crossing = seg(2.0, 2.0, 1.0, -1.0);
        assert!(!can_accept_adjacent(&crossing, &accepted));
        // folds back along edge 1
        let fold = seg(2.0, 2.0, 2.0, 1.0);
        assert!(!can_accept_adjacent(&fold, &accepted));
        // duplicate of edge 0, reversed
        let dup = seg(2.0, 0.0, 0.0, 0.0);
        assert!(!can_accept_adjacent(&dup, &accepted));
    }

    #[test]
    fn collinear_continuation_is_allowed() {
        let accepted = [seg(0.0, 0.0, 1.0, 0.0)];
        assert!(can_accept_adjacent(&seg(1.0, 0.0, 3.0, 0.0), &accepted));
        assert!(!can_accept_adjacent(&seg(1.0, 0.0, 0.5, 0.0), &accepted));
    }

    #[test]
    fn simple_square_and_bowtie() {
        let square = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!(is_simple_polygon(&square));
        let bowtie = [
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
        ];
        assert!(!is_simple_polygon(&bowtie));
        assert_eq!(simple_polygon_violation(&bowtie), Some((0, 2)));
    }

    #[test]
    fn concave_ring_is_simple() {
        // arrowhead / chevron
        let ring = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![2.0, 1.0],
            vector![0.0, 4.0],
        ];
        assert!(is_simple_polygon(&ring));
    }

    #[test]
    fn degenerate_rings() {
        assert!(!is_simple_polygon(&[vector![0.0, 0.0], vector![1.0, 0.0]]));
        assert_eq!(simple_polygon_violation(&[vector![0.0, 0.0]]), None);
        // all collinear: closing edge overlaps the first
        let flat = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        assert!(!is_simple_polygon(&flat));
        // repeated vertex
        let rep = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
        ];
        assert_eq!(simple_polygon_violation(&rep), Some((1, 1)));
        // spike: goes out and straight back
        let spike = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![3.0, 1.0],
            vector![2.0, 0.0],
            vector![0.0, 2.0],
        ];
        assert!(!is_simple_polygon(&spike));
    }
}
