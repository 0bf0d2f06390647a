use super::*;
use flo_bernstein::bezier;
use flo_bernstein::REDUCE_THRESHOLD;

#[test]
fn fully_reduces_an_evenly_spaced_line() {
    let nodes   = [0.0, 0.0, 1.0, 0.0, 2.0, 0.0];
    let reduced = bezier::full_reduce(&nodes, 2).unwrap();

    assert!(reduced == vec![0.0, 0.0, 2.0, 0.0]);
}

#[test]
fn does_not_reduce_a_true_quadratic() {
    let nodes   = [0.0, 0.0, 0.5, 1.0, 1.0, 0.0];
    let reduced = bezier::full_reduce(&nodes, 2).unwrap();

    assert!(reduced == nodes.to_vec());
}

#[test]
fn reduction_inverts_elevation() {
    let nodes       = [0.0, 0.5, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0];
    let elevated    = bezier::elevate_nodes(&nodes, 2);
    let reduced     = bezier::reduce_pseudo_inverse(&elevated, 2).unwrap();

    assert!(max_difference(&reduced, &nodes) < 1e-12);
}

#[test]
fn reducible_curves_round_trip_within_tolerance() {
    let quadratic   = [0.0, 0.0, 0.5, 1.0, 1.0, 0.0];
    let elevated    = bezier::elevate_nodes(&quadratic, 2);

    let reduced     = bezier::reduce_pseudo_inverse(&elevated, 2).unwrap();
    let back        = bezier::elevate_nodes(&reduced, 2);

    assert!(bezier::projection_error(&elevated, &back) < REDUCE_THRESHOLD);
}

#[test]
fn full_reduce_collapses_an_elevated_quadratic() {
    let quadratic   = [0.0, 0.0, 0.5, 1.0, 1.0, 0.0];
    let elevated    = bezier::elevate_nodes(&bezier::elevate_nodes(&quadratic, 2), 2);

    let reduced = bezier::full_reduce(&elevated, 2).unwrap();

    assert!(reduced.len() == 6);
    assert!(max_difference(&reduced, &quadratic) < 1e-12);
}

#[test]
fn projection_error_is_zero_for_identical_nodes() {
    let nodes = [1.0, 2.0, 3.0, 4.0];

    assert!(bezier::projection_error(&nodes, &nodes) == 0.0);
    assert!(bezier::projection_error(&[0.0, 0.0], &[0.0, 0.0]) == 0.0);
}

#[test]
fn high_degrees_are_unsupported() {
    let nodes = [0.0, 0.0, 1.0, 3.0, 2.0, 1.0, 3.0, 3.0, 4.0, -2.0, 5.0, 0.0];

    assert!(bezier::reduce_pseudo_inverse(&nodes, 2) == Err(bezier::UnsupportedDegree { degree: 5 }));
    assert!(bezier::full_reduce(&nodes, 2) == Err(bezier::UnsupportedDegree { degree: 5 }));
}
