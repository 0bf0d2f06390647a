use itertools::izip;

///
/// Evaluates a curve at many pairs of barycentric weights at once
///
/// Each pair `(lambda1[k], lambda2[k])` produces one output row
/// `sum C(n,i) lambda1^(n-i) lambda2^i nodes[i]`. The weights are not required to sum to
/// one: callers that want points on the curve pass `1-s` and `s`, but unnormalized weights
/// are meaningful too (scaling both weights by `c` scales the result by `c^n`).
///
/// The sum is accumulated by multiplying the running total by `lambda1` once per node while
/// building up the power of `lambda2` and the binomial coefficient incrementally, which
/// keeps each evaluation O(n) and is more accurate than forming the powers independently.
///
pub fn evaluate_curve_barycentric(nodes: &[f64], dimension: usize, lambda1: &[f64], lambda2: &[f64]) -> Vec<f64> {
    let num_nodes   = nodes.len() / dimension;
    let degree      = num_nodes - 1;
    let num_vals    = lambda1.len();

    let mut evaluated   = vec![0.0; num_vals * dimension];
    let mut lambda2_pow = vec![1.0; num_vals];
    let mut binom_val   = 1.0;

    for k in 0..degree {
        let node = &nodes[k*dimension..(k+1)*dimension];

        for (row, l1, l2_pow) in izip!(evaluated.chunks_exact_mut(dimension), lambda1.iter(), lambda2_pow.iter()) {
            for d in 0..dimension {
                row[d] = (row[d] + binom_val*l2_pow*node[d]) * l1;
            }
        }

        for (l2_pow, l2) in lambda2_pow.iter_mut().zip(lambda2.iter()) {
            *l2_pow *= l2;
        }

        binom_val = (binom_val * ((degree - k) as f64)) / ((k + 1) as f64);
    }

    // Last node has a binomial coefficient of 1 and no lambda1 factor
    let last_node = &nodes[degree*dimension..];

    for (row, l2_pow) in evaluated.chunks_exact_mut(dimension).zip(lambda2_pow.iter()) {
        for d in 0..dimension {
            row[d] += l2_pow*last_node[d];
        }
    }

    evaluated
}

///
/// Evaluates a curve at many parameter values at once
///
/// The result has one row of `dimension` values for each entry in `s_vals`.
///
pub fn evaluate_multi(nodes: &[f64], dimension: usize, s_vals: &[f64]) -> Vec<f64> {
    let lambda1: Vec<_> = s_vals.iter().map(|s| 1.0 - s).collect();

    evaluate_curve_barycentric(nodes, dimension, &lambda1, s_vals)
}
