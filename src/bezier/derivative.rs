use itertools::Itertools;

use super::evaluate::*;
use super::super::geo::*;

///
/// Returns the control nodes of a curve's hodograph
///
/// The hodograph of a degree `n` curve is the degree `n-1` curve with nodes
/// `n * (nodes[i+1] - nodes[i])`; evaluating it gives the first derivative of the curve.
///
pub fn derivative_nodes(nodes: &[f64], dimension: usize) -> Vec<f64> {
    let num_nodes   = nodes.len() / dimension;
    let degree      = (num_nodes - 1) as f64;

    nodes.chunks_exact(dimension)
        .tuple_windows()
        .flat_map(|(p0, p1)| (0..dimension).map(move |d| degree*(p1[d] - p0[d])))
        .collect()
}

///
/// Evaluates the derivative of a curve at a parameter value
///
pub fn evaluate_hodograph(s: f64, nodes: &[f64], dimension: usize) -> Vec<f64> {
    let first_deriv = derivative_nodes(nodes, dimension);

    evaluate_multi(&first_deriv, dimension, &[s])
}

///
/// Computes the signed curvature of a 2D curve at a parameter value
///
/// The tangent vector at `s` is passed in rather than recomputed, as callers that need the
/// curvature almost always have it already (see `evaluate_hodograph`). Lines have no
/// curvature anywhere.
///
pub fn get_curvature(nodes: &[f64], tangent_vec: &[f64], s: f64) -> f64 {
    let num_nodes = nodes.len() / 2;

    if num_nodes <= 2 {
        return 0.0;
    }

    // Concavity is the second derivative of the curve at s
    let first_deriv     = derivative_nodes(nodes, 2);
    let second_deriv    = derivative_nodes(&first_deriv, 2);
    let concavity       = evaluate_multi(&second_deriv, 2, &[s]);

    let tangent_len = vector_norm(tangent_vec);

    cross_product(tangent_vec, &concavity) / (tangent_len*tangent_len*tangent_len)
}
