//!
//! # Numeric helpers shared by the curve kernels
//!
//! These operate on plain `f64` buffers: a 2D vector is a two-element slice and a set of
//! nodes is a row-major buffer of `num_nodes * dimension` values.
//!

/// Slack tolerated on either side of the unit interval when wiggling a parameter (2^-44)
const WIGGLE: f64 = 0.000000000000056843418860808015;

///
/// Computes the scalar cross product of two 2D vectors
///
#[inline]
pub fn cross_product(vec0: &[f64], vec1: &[f64]) -> f64 {
    vec0[0]*vec1[1] - vec0[1]*vec1[0]
}

///
/// Finds the axis-aligned bounding box of a set of 2D nodes
///
/// The box is returned as `(left, right, bottom, top)`.
///
pub fn bbox(nodes: &[f64]) -> (f64, f64, f64, f64) {
    let mut left    = nodes[0];
    let mut right   = nodes[0];
    let mut bottom  = nodes[1];
    let mut top     = nodes[1];

    for point in nodes.chunks_exact(2).skip(1) {
        left    = f64::min(left, point[0]);
        right   = f64::max(right, point[0]);
        bottom  = f64::min(bottom, point[1]);
        top     = f64::max(top, point[1]);
    }

    (left, right, bottom, top)
}

///
/// True if a point lies within the axis-aligned bounding box of a set of nodes in every
/// coordinate
///
pub fn contains_nd(nodes: &[f64], dimension: usize, point: &[f64]) -> bool {
    for d in 0..dimension {
        let mut min_val = nodes[d];
        let mut max_val = nodes[d];

        for node in nodes.chunks_exact(dimension).skip(1) {
            min_val = f64::min(min_val, node[d]);
            max_val = f64::max(max_val, node[d]);
        }

        if point[d] < min_val || point[d] > max_val {
            return false;
        }
    }

    true
}

///
/// Snaps a value into the unit interval, tolerating values that lie just outside of it
///
/// Values within the slack of 0 or 1 become exactly 0 or 1. Values further outside the
/// interval than the slack produce `None`.
///
pub fn wiggle_interval(value: f64) -> Option<f64> {
    if -WIGGLE < value && value < WIGGLE {
        Some(0.0)
    } else if WIGGLE <= value && value <= 1.0 - WIGGLE {
        Some(value)
    } else if 1.0 - WIGGLE < value && value < 1.0 + WIGGLE {
        Some(1.0)
    } else {
        None
    }
}

///
/// True if two vectors are close to within a relative tolerance
///
/// Closeness is measured against the size of the second vector; if that vector is zero the
/// comparison falls back to an absolute one.
///
pub fn vector_close(vec1: &[f64], vec2: &[f64], eps: f64) -> bool {
    let size2 = vector_norm(vec2);

    if size2 == 0.0 {
        vector_norm(vec1) < eps
    } else {
        let difference: Vec<_> = vec1.iter().zip(vec2.iter()).map(|(a, b)| a - b).collect();

        vector_norm(&difference) <= eps*size2
    }
}

///
/// True if a value lies within a closed interval
///
#[inline]
pub fn in_interval(value: f64, start: f64, end: f64) -> bool {
    start <= value && value <= end
}

///
/// The Euclidean norm of a vector
///
#[inline]
pub(crate) fn vector_norm(vec: &[f64]) -> f64 {
    f64::sqrt(vec.iter().map(|value| value*value).sum())
}
