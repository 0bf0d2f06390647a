mod subdivide;
mod specialize;
mod reduce;
mod length;

///
/// True if two values differ by less than a tolerance
///
pub fn approx_equal(x: f64, y: f64, tolerance: f64) -> bool {
    f64::abs(x - y) < tolerance
}

///
/// The largest difference between corresponding entries of two buffers
///
pub fn max_difference(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right.iter())
        .map(|(a, b)| f64::abs(a - b))
        .fold(0.0, f64::max)
}
