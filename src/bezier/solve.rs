use super::evaluate::*;
use super::derivative::*;

///
/// Performs one Newton-Raphson step towards the parameter where a curve passes through a
/// point
///
/// Given a seed `s`, moves it by the component of `point - B(s)` along the curve's tangent:
/// `s + ((point - B(s)) . B'(s)) / (B'(s) . B'(s))`. The result is not clamped into the
/// unit interval, and a seed where the tangent vanishes is returned unchanged.
///
pub fn newton_refine(nodes: &[f64], dimension: usize, point: &[f64], s: f64) -> f64 {
    let evaluated   = evaluate_multi(nodes, dimension, &[s]);
    let derivative  = evaluate_hodograph(s, nodes, dimension);

    let mut numerator   = 0.0;
    let mut denominator = 0.0;

    for d in 0..dimension {
        let delta = point[d] - evaluated[d];

        numerator   += delta*derivative[d];
        denominator += derivative[d]*derivative[d];
    }

    if denominator == 0.0 {
        s
    } else {
        s + numerator/denominator
    }
}
