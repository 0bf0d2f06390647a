use log::*;

use super::solve::*;
use super::subdivide::*;
use super::super::geo::*;
use super::super::consts::*;

///
/// A stretch of the curve that might still contain the target point
///
struct Candidate {
    start:  f64,
    end:    f64,
    nodes:  Vec<f64>
}

///
/// Searches a curve for the parameter value where it passes through a point
///
/// Works by subdivision: candidate sections whose bounding box contains the point are split
/// in half, and the rest are discarded. The bounding box test is conservative, so a section
/// is never discarded wrongly (though sections near the point may survive a few rounds
/// longer than strictly needed).
///
/// Returns `LOCATE_MISS` if the curve does not pass near the point at all, and
/// `LOCATE_INVALID` if the surviving sections cover disjoint parameter ranges: the point
/// then lies on more than one part of the curve, as at a self-intersection, and there is no
/// single parameter to return. Any other return value is the located parameter, polished by
/// a Newton-Raphson step.
///
pub fn locate_point(nodes: &[f64], dimension: usize, point: &[f64]) -> f64 {
    let mut candidates = vec![Candidate { start: 0.0, end: 1.0, nodes: nodes.to_vec() }];

    for _ in 0..MAX_LOCATE_SUBDIVISIONS {
        let mut next_candidates = vec![];

        for candidate in candidates.iter() {
            if contains_nd(&candidate.nodes, dimension, point) {
                let (left, right)   = subdivide_nodes(&candidate.nodes, dimension);
                let midpoint        = 0.5*(candidate.start + candidate.end);

                next_candidates.push(Candidate { start: candidate.start, end: midpoint, nodes: left });
                next_candidates.push(Candidate { start: midpoint, end: candidate.end, nodes: right });
            }
        }

        if next_candidates.is_empty() {
            return LOCATE_MISS;
        }

        candidates = next_candidates;
    }

    // Every candidate is now a tiny parameter range: if they all sit together, their
    // endpoints resolve to a single parameter value
    let num_samples = (2*candidates.len()) as f64;

    let mut mean = 0.0;
    for candidate in candidates.iter() {
        mean += candidate.start + candidate.end;
    }
    mean /= num_samples;

    let mut variance = 0.0;
    for candidate in candidates.iter() {
        variance += (candidate.start - mean)*(candidate.start - mean);
        variance += (candidate.end - mean)*(candidate.end - mean);
    }

    let std_deviation = f64::sqrt(variance/num_samples);

    if std_deviation > LOCATE_STD_CAP {
        debug!("locate_point: surviving candidates cover disjoint intervals (std deviation {})", std_deviation);
        return LOCATE_INVALID;
    }

    newton_refine(nodes, dimension, point, mean)
}
