///
/// Re-expresses a curve using one more node without changing its shape
///
/// Elevation is exact: the new node set traces out the same curve, one degree higher. The
/// endpoints are copied and each interior node is a weighted average of a neighboring pair.
///
pub fn elevate_nodes(nodes: &[f64], dimension: usize) -> Vec<f64> {
    let num_nodes   = nodes.len() / dimension;
    let scale       = 1.0 / (num_nodes as f64);

    let mut elevated = Vec::with_capacity((num_nodes+1)*dimension);

    elevated.extend_from_slice(&nodes[..dimension]);

    for i in 1..num_nodes {
        for d in 0..dimension {
            let weighted = (i as f64)*nodes[(i-1)*dimension + d] + ((num_nodes - i) as f64)*nodes[i*dimension + d];

            elevated.push(weighted*scale);
        }
    }

    elevated.extend_from_slice(&nodes[(num_nodes-1)*dimension..]);

    elevated
}
