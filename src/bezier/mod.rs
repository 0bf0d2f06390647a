//!
//! # Routines for evaluating and manipulating Bezier curves in Bernstein form
//!
//! A curve of degree `n` is described by `n+1` control nodes, stored as a row-major buffer
//! of `(n+1) * dimension` values: `nodes[i*dimension + d]` is coordinate `d` of node `i`.
//! Node 0 is the start of the curve and node `n` is the end, and the curve itself is
//! `B(s) = sum C(n,i) (1-s)^(n-i) s^i nodes[i]` for `s` in 0 to 1.
//!
//! The routines here are the primitives that curve algorithms are built from: multi-point
//! evaluation, subdivision, restriction to a subinterval, derivatives and curvature, degree
//! elevation and reduction, Newton refinement, point location and arc length. They take
//! caller-owned buffers and return freshly allocated results, so a caller can use them from
//! many threads at once on curves of any degree and dimension.
//!

mod evaluate;
mod subdivide;
mod specialize;
mod derivative;
mod elevate;
mod reduce;
mod solve;
mod search;
mod length;

pub use self::evaluate::*;
pub use self::subdivide::*;
pub use self::specialize::*;
pub use self::derivative::*;
pub use self::elevate::*;
pub use self::reduce::*;
pub use self::solve::*;
pub use self::search::*;
pub use self::length::*;
