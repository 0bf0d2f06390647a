///
/// Restricts a curve to the subinterval `[start, end]`, returning it in Bernstein form
///
/// The curve may itself be a piece of some larger parameter range, described by
/// `curve_start` and `curve_end`: the returned `(true_start, true_end)` are `start` and
/// `end` mapped through that range. This bookkeeping is a side channel and has no effect
/// on the new nodes.
///
pub fn specialize_curve(nodes: &[f64], dimension: usize, start: f64, end: f64, curve_start: f64, curve_end: f64) -> (Vec<f64>, f64, f64) {
    let num_nodes = nodes.len() / dimension;

    let new_nodes = match num_nodes {
        2 => specialize_linear(nodes, dimension, start, end),
        3 => specialize_quadratic(nodes, dimension, start, end),
        _ => specialize_any(nodes, dimension, start, end)
    };

    let interval_width  = curve_end - curve_start;
    let true_start      = curve_start + start*interval_width;
    let true_end        = curve_start + end*interval_width;

    (new_nodes, true_start, true_end)
}

///
/// Restricts a line to a subinterval
///
fn specialize_linear(nodes: &[f64], dimension: usize, start: f64, end: f64) -> Vec<f64> {
    let mut new_nodes = vec![0.0; nodes.len()];

    for d in 0..dimension {
        let p0 = nodes[d];
        let p1 = nodes[dimension + d];

        new_nodes[d]            = (1.0-start)*p0 + start*p1;
        new_nodes[dimension+d]  = (1.0-end)*p0 + end*p1;
    }

    new_nodes
}

///
/// Restricts a quadratic curve to a subinterval
///
fn specialize_quadratic(nodes: &[f64], dimension: usize, start: f64, end: f64) -> Vec<f64> {
    let minus_start = 1.0 - start;
    let minus_end   = 1.0 - end;

    let mut new_nodes = vec![0.0; nodes.len()];

    for d in 0..dimension {
        let p0 = nodes[d];
        let p1 = nodes[dimension + d];
        let p2 = nodes[2*dimension + d];

        new_nodes[d]                = minus_start*minus_start*p0 + 2.0*start*minus_start*p1 + start*start*p2;
        new_nodes[dimension+d]      = minus_start*minus_end*p0 + (start*minus_end + minus_start*end)*p1 + start*end*p2;
        new_nodes[2*dimension+d]    = minus_end*minus_end*p0 + 2.0*end*minus_end*p1 + end*end*p2;
    }

    new_nodes
}

///
/// Restricts a curve of any degree to a subinterval
///
/// Uses a de Casteljau workspace with one column per output node. The first column blends
/// neighboring nodes at `start` and the second at `end`; each further step appends one more
/// `end`-blend at the tail (taken from the previous column before it shrinks) and then
/// applies a `start`-blend to every earlier column in place. Once every column has shrunk
/// to a single row, column `j` holds output node `j`: the blend of `degree - j` copies of
/// `start` with `j` copies of `end`.
///
fn specialize_any(nodes: &[f64], dimension: usize, start: f64, end: f64) -> Vec<f64> {
    let num_nodes = nodes.len() / dimension;

    let mut workspace = Vec::with_capacity(num_nodes);

    workspace.push(blend(nodes, dimension, start));
    workspace.push(blend(nodes, dimension, end));

    for step in 2..num_nodes {
        let tail = blend(&workspace[step-1], dimension, end);

        for column in workspace.iter_mut() {
            blend_in_place(column, dimension, start);
        }

        workspace.push(tail);
    }

    let mut new_nodes = Vec::with_capacity(nodes.len());
    for column in workspace.iter() {
        new_nodes.extend_from_slice(&column[..dimension]);
    }

    new_nodes
}

///
/// One round of de Casteljau: blends each pair of neighboring nodes at `t`
///
fn blend(nodes: &[f64], dimension: usize, t: f64) -> Vec<f64> {
    let num_nodes   = nodes.len() / dimension;
    let mut blended = Vec::with_capacity((num_nodes-1)*dimension);

    for i in 0..(num_nodes-1) {
        for d in 0..dimension {
            blended.push((1.0-t)*nodes[i*dimension + d] + t*nodes[(i+1)*dimension + d]);
        }
    }

    blended
}

///
/// One round of de Casteljau, overwriting the nodes and shrinking them by one
///
fn blend_in_place(nodes: &mut Vec<f64>, dimension: usize, t: f64) {
    let num_nodes = nodes.len() / dimension;

    for i in 0..(num_nodes-1) {
        for d in 0..dimension {
            let index       = i*dimension + d;
            nodes[index]    = (1.0-t)*nodes[index] + t*nodes[index + dimension];
        }
    }

    nodes.truncate((num_nodes-1)*dimension);
}
