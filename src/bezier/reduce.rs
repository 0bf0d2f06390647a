use super::super::consts::*;

use std::error::Error;
use std::fmt;

// Pseudo-inverses of the degree elevation operator, stored as integer numerators over a
// common denominator. Rows combine the nodes of the higher-degree curve into the
// least-squares best fit one degree down.
const REDUCTION2: [&[f64]; 1] = [&[1.0, 1.0]];
const REDUCTION2_DENOM: f64 = 2.0;

const REDUCTION3: [&[f64]; 2] = [
    &[5.0, 2.0, -1.0],
    &[-1.0, 2.0, 5.0]
];
const REDUCTION3_DENOM: f64 = 6.0;

const REDUCTION4: [&[f64]; 3] = [
    &[19.0, 3.0, -3.0, 1.0],
    &[-5.0, 15.0, 15.0, -5.0],
    &[1.0, -3.0, 3.0, 19.0]
];
const REDUCTION4_DENOM: f64 = 20.0;

const REDUCTION5: [&[f64]; 4] = [
    &[207.0, 12.0, -18.0, 12.0, -3.0],
    &[-53.0, 212.0, 102.0, -68.0, 17.0],
    &[17.0, -68.0, 102.0, 212.0, -53.0],
    &[-3.0, 12.0, -18.0, 12.0, 207.0]
];
const REDUCTION5_DENOM: f64 = 210.0;

// Reduction followed by elevation: projects a node set onto the subspace of curves that
// are really one degree lower. A curve close to its own projection is reducible.
const PROJECTION2: [&[f64]; 2] = [
    &[1.0, 1.0],
    &[1.0, 1.0]
];
const PROJECTION2_DENOM: f64 = 2.0;

const PROJECTION3: [&[f64]; 3] = [
    &[5.0, 2.0, -1.0],
    &[2.0, 2.0, 2.0],
    &[-1.0, 2.0, 5.0]
];
const PROJECTION3_DENOM: f64 = 6.0;

const PROJECTION4: [&[f64]; 4] = [
    &[19.0, 3.0, -3.0, 1.0],
    &[3.0, 11.0, 9.0, -3.0],
    &[-3.0, 9.0, 11.0, 3.0],
    &[1.0, -3.0, 3.0, 19.0]
];
const PROJECTION4_DENOM: f64 = 20.0;

const PROJECTION5: [&[f64]; 5] = [
    &[69.0, 4.0, -6.0, 4.0, -1.0],
    &[4.0, 54.0, 24.0, -16.0, 4.0],
    &[-6.0, 24.0, 34.0, 24.0, -6.0],
    &[4.0, -16.0, 24.0, 54.0, 4.0],
    &[-1.0, 4.0, -6.0, 4.0, 69.0]
];
const PROJECTION5_DENOM: f64 = 70.0;

///
/// Error returned when a degree reduction is requested at a degree with no closed-form
/// pseudo-inverse table
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnsupportedDegree {
    /// The degree the operation was asked to reduce from
    pub degree: usize
}

impl fmt::Display for UnsupportedDegree {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "no degree reduction is available from degree {}", self.degree)
    }
}

impl Error for UnsupportedDegree { }

///
/// Reduces a curve by one degree using the least-squares pseudo-inverse of the elevation
/// operator
///
/// The result is the best fit of one degree lower: it only traces out the same curve when
/// the input really lies in the lower-degree subspace (see `full_reduce`, which checks).
/// Closed-form tables exist for reductions from degrees 1 to 4; higher degrees produce
/// an `UnsupportedDegree` error.
///
pub fn reduce_pseudo_inverse(nodes: &[f64], dimension: usize) -> Result<Vec<f64>, UnsupportedDegree> {
    let num_nodes = nodes.len() / dimension;

    match num_nodes {
        2 => Ok(apply_matrix(&REDUCTION2, REDUCTION2_DENOM, nodes, dimension)),
        3 => Ok(apply_matrix(&REDUCTION3, REDUCTION3_DENOM, nodes, dimension)),
        4 => Ok(apply_matrix(&REDUCTION4, REDUCTION4_DENOM, nodes, dimension)),
        5 => Ok(apply_matrix(&REDUCTION5, REDUCTION5_DENOM, nodes, dimension)),
        _ => Err(UnsupportedDegree { degree: num_nodes.saturating_sub(1) })
    }
}

///
/// The relative Frobenius-norm error between a node set and a projection of it
///
/// A zero difference is reported as zero error even when the nodes themselves are zero.
///
pub fn projection_error(nodes: &[f64], projected: &[f64]) -> f64 {
    let mut diff_squared = 0.0;
    for (value, proj) in nodes.iter().zip(projected.iter()) {
        let diff = value - proj;
        diff_squared += diff*diff;
    }

    let diff_norm = f64::sqrt(diff_squared);

    if diff_norm == 0.0 {
        0.0
    } else {
        let nodes_norm = f64::sqrt(nodes.iter().map(|value| value*value).sum());

        diff_norm / nodes_norm
    }
}

///
/// Repeatedly reduces a curve while it lies within `REDUCE_THRESHOLD` of its projection
/// one degree down
///
/// The returned buffer holds the nodes of the lowest-degree curve reached (possibly the
/// input unchanged); its length over `dimension` gives the surviving node count. Meeting a
/// degree with no reduction table before the iteration stops produces `UnsupportedDegree`.
///
pub fn full_reduce(nodes: &[f64], dimension: usize) -> Result<Vec<f64>, UnsupportedDegree> {
    let num_nodes   = nodes.len() / dimension;
    let mut reduced = nodes.to_vec();

    // A curve of N nodes can lose at most N-1 of them
    for _ in 1..num_nodes {
        match maybe_reduce(&reduced, dimension)? {
            Some(next)  => { reduced = next; },
            None        => { break; }
        }
    }

    Ok(reduced)
}

///
/// Reduces a curve by one degree if it lies within `REDUCE_THRESHOLD` of its projection,
/// or returns None if it does not
///
fn maybe_reduce(nodes: &[f64], dimension: usize) -> Result<Option<Vec<f64>>, UnsupportedDegree> {
    let num_nodes = nodes.len() / dimension;

    let (projection, denom) = match num_nodes {
        0 | 1   => { return Ok(None); },
        2       => (&PROJECTION2[..], PROJECTION2_DENOM),
        3       => (&PROJECTION3[..], PROJECTION3_DENOM),
        4       => (&PROJECTION4[..], PROJECTION4_DENOM),
        5       => (&PROJECTION5[..], PROJECTION5_DENOM),
        _       => { return Err(UnsupportedDegree { degree: num_nodes - 1 }); }
    };

    let projected       = apply_matrix(projection, denom, nodes, dimension);
    let relative_err    = projection_error(nodes, &projected);

    if relative_err < REDUCE_THRESHOLD {
        Ok(Some(reduce_pseudo_inverse(nodes, dimension)?))
    } else {
        Ok(None)
    }
}

///
/// Applies a matrix of integer numerators over a denominator to a node set
///
fn apply_matrix(matrix: &[&[f64]], denom: f64, nodes: &[f64], dimension: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(matrix.len()*dimension);

    for row in matrix.iter() {
        for d in 0..dimension {
            let mut value = 0.0;
            for (j, coefficient) in row.iter().enumerate() {
                value += coefficient*nodes[j*dimension + d];
            }

            result.push(value/denom);
        }
    }

    result
}
