/// Maximum number of rounds of candidate subdivision performed while locating a point on a curve
pub const MAX_LOCATE_SUBDIVISIONS: usize = 20;

/// Largest standard deviation of the surviving candidate endpoints that the locator will still
/// resolve to a single parameter (2^-20)
pub const LOCATE_STD_CAP: f64 = 0.00000095367431640625;

/// Square root of the precision of a 64-bit float (2^-26)
pub const SQRT_PREC: f64 = 0.000000014901161193847656;

/// Largest relative projection error at which a curve is considered to lie in the
/// next-lower-degree subspace
pub const REDUCE_THRESHOLD: f64 = SQRT_PREC;

/// Sentinel returned by the locator when no part of the curve passes near the point
pub const LOCATE_MISS: f64 = -1.0;

/// Sentinel returned by the locator when the point lies on more than one part of the curve
pub const LOCATE_INVALID: f64 = -2.0;
