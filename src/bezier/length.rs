use log::*;

use super::derivative::*;
use super::evaluate::*;
use super::super::geo::*;
use super::super::consts::*;
use super::super::quadrature::*;

/// Most subintervals the quadrature routine may create while integrating a curve's length
const LENGTH_SUBDIVISION_LIMIT: usize = 50;

///
/// Computes the arc length of a curve, along with the quadrature status code
///
/// The length of a line is exact and always carries status 0. Higher degrees integrate the
/// size of the curve's derivative over the unit interval with `qagse`; a non-zero status
/// means the requested tolerance could not be met and the returned length is the best
/// estimate available (see the `quadrature` module for the code meanings).
///
pub fn compute_length(nodes: &[f64], dimension: usize) -> (f64, i32) {
    let num_nodes = nodes.len() / dimension;

    if num_nodes < 2 {
        return (0.0, 0);
    }

    let first_deriv = derivative_nodes(nodes, dimension);

    if num_nodes == 2 {
        return (vector_norm(&first_deriv), 0);
    }

    let integrand = |s: f64| {
        let tangent = evaluate_multi(&first_deriv, dimension, &[s]);

        vector_norm(&tangent)
    };

    let quadrature = qagse(&integrand, 0.0, 1.0, SQRT_PREC, SQRT_PREC, LENGTH_SUBDIVISION_LIMIT);

    if quadrature.status != 0 {
        warn!("compute_length: quadrature finished with status {} (estimated error {})", quadrature.status, quadrature.abserr);
    }

    (quadrature.result, quadrature.status)
}
