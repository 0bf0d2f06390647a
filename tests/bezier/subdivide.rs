use super::*;
use flo_bernstein::bezier;

#[test]
fn subdivides_a_line_at_its_midpoint() {
    let nodes           = [0.0, 0.0, 1.0, 2.0];
    let (left, right)   = bezier::subdivide_nodes(&nodes, 2);

    assert!(left == vec![0.0, 0.0, 0.5, 1.0]);
    assert!(right == vec![0.5, 1.0, 1.0, 2.0]);
}

#[test]
fn subdivides_a_quadratic() {
    let nodes           = [0.0, 0.0, 0.5, 1.0, 1.0, 0.0];
    let (left, right)   = bezier::subdivide_nodes(&nodes, 2);

    assert!(left == vec![0.0, 0.0, 0.25, 0.5, 0.5, 0.5]);
    assert!(right == vec![0.5, 0.5, 0.75, 0.5, 1.0, 0.0]);
}

#[test]
fn halves_meet_at_the_midpoint() {
    let nodes           = [0.0, 1.0, 1.0, 4.0, 3.0, -2.0, 4.0, 6.0, 6.0, 0.0, 7.0, 2.0];
    let (left, right)   = bezier::subdivide_nodes(&nodes, 2);

    assert!(left[10..12] == right[0..2]);
}

#[test]
fn cubic_halves_trace_the_original_curve() {
    let nodes           = [0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0];
    let (left, right)   = bezier::subdivide_nodes(&nodes, 2);

    for t in 0..=10 {
        let t = (t as f64)/10.0;

        let on_left     = bezier::evaluate_multi(&left, 2, &[t]);
        let original    = bezier::evaluate_multi(&nodes, 2, &[t*0.5]);
        assert!(max_difference(&on_left, &original) < 1e-10);

        let on_right    = bezier::evaluate_multi(&right, 2, &[t]);
        let original    = bezier::evaluate_multi(&nodes, 2, &[0.5 + t*0.5]);
        assert!(max_difference(&on_right, &original) < 1e-10);
    }
}

#[test]
fn quintic_halves_trace_the_original_curve() {
    let nodes           = [0.0, 1.0, 1.0, 4.0, 3.0, -2.0, 4.0, 6.0, 6.0, 0.0, 7.0, 2.0];
    let (left, right)   = bezier::subdivide_nodes(&nodes, 2);

    for t in 0..=10 {
        let t = (t as f64)/10.0;

        let on_left     = bezier::evaluate_multi(&left, 2, &[t]);
        let original    = bezier::evaluate_multi(&nodes, 2, &[t*0.5]);
        assert!(max_difference(&on_left, &original) < 1e-10);

        let on_right    = bezier::evaluate_multi(&right, 2, &[t]);
        let original    = bezier::evaluate_multi(&nodes, 2, &[0.5 + t*0.5]);
        assert!(max_difference(&on_right, &original) < 1e-10);
    }
}
