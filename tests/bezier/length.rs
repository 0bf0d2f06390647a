use super::*;
use flo_bernstein::bezier;

#[test]
fn line_length_is_exact() {
    let nodes = [0.0, 0.0, 1.0, 2.0];

    let (length, status) = bezier::compute_length(&nodes, 2);

    assert!(length == f64::sqrt(5.0));
    assert!(status == 0);
}

#[test]
fn parabola_length_matches_the_closed_form() {
    let nodes = [0.0, 0.0, 0.5, 1.0, 1.0, 0.0];

    let (length, status) = bezier::compute_length(&nodes, 2);

    // Arc length of y = 2x(1 - x) over the unit interval
    let expected = (2.0*f64::sqrt(5.0) + f64::ln(2.0 + f64::sqrt(5.0)))/4.0;

    assert!(status == 0);
    assert!(approx_equal(length, expected, 1e-8));
}

#[test]
fn degenerate_quadratic_line_has_the_right_length() {
    let nodes = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];

    let (length, status) = bezier::compute_length(&nodes, 2);

    assert!(status == 0);
    assert!(approx_equal(length, f64::sqrt(8.0), 1e-8));
}

#[test]
fn cubic_length_lies_between_chord_and_polygon() {
    let nodes = [0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0];

    let (length, status) = bezier::compute_length(&nodes, 2);

    let chord   = 3.0;
    let polygon = f64::sqrt(2.0) + f64::sqrt(5.0) + f64::sqrt(2.0);

    assert!(status == 0);
    assert!(length > chord && length < polygon);
}

#[test]
fn length_in_three_dimensions() {
    let nodes = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];

    let (length, status) = bezier::compute_length(&nodes, 3);

    assert!(status == 0);
    assert!(approx_equal(length, f64::sqrt(12.0), 1e-8));
}
