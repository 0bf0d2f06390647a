use super::*;
use flo_bernstein::bezier;

#[test]
fn specializing_to_the_whole_interval_returns_the_curve() {
    let nodes = [0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0];

    let (new_nodes, true_start, true_end) = bezier::specialize_curve(&nodes, 2, 0.0, 1.0, 0.25, 0.75);

    assert!(new_nodes == nodes.to_vec());
    assert!(true_start == 0.25);
    assert!(true_end == 0.75);
}

#[test]
fn section_points_match_the_original_curve() {
    let nodes = [2.0, 3.0, 6.0, 2.0, 4.0, 5.0, 5.0, 0.0];

    let (mid_section, _, _) = bezier::specialize_curve(&nodes, 2, 0.25, 0.75, 0.0, 1.0);

    for t in 0..=10 {
        let t   = (t as f64)/10.0;
        let t2  = t*0.5 + 0.25;

        let p1 = bezier::evaluate_multi(&mid_section, 2, &[t]);
        let p2 = bezier::evaluate_multi(&nodes, 2, &[t2]);

        assert!(max_difference(&p1, &p2) < 1e-10);
    }
}

#[test]
fn quadratic_section_points_match() {
    let nodes = [0.0, 0.0, 0.5, 1.0, 1.0, 0.0];

    let (section, _, _) = bezier::specialize_curve(&nodes, 2, 0.2, 0.6, 0.0, 1.0);

    for t in 0..=10 {
        let t   = (t as f64)/10.0;
        let t2  = t*0.4 + 0.2;

        let p1 = bezier::evaluate_multi(&section, 2, &[t]);
        let p2 = bezier::evaluate_multi(&nodes, 2, &[t2]);

        assert!(max_difference(&p1, &p2) < 1e-10);
    }
}

#[test]
fn linear_section_points_match() {
    let nodes = [1.0, 1.0, 3.0, 5.0];

    let (section, _, _) = bezier::specialize_curve(&nodes, 2, 0.25, 0.75, 0.0, 1.0);

    for t in 0..=10 {
        let t   = (t as f64)/10.0;
        let t2  = t*0.5 + 0.25;

        let p1 = bezier::evaluate_multi(&section, 2, &[t]);
        let p2 = bezier::evaluate_multi(&nodes, 2, &[t2]);

        assert!(max_difference(&p1, &p2) < 1e-10);
    }
}

#[test]
fn section_of_a_section_composes() {
    let nodes = [2.0, 3.0, 6.0, 2.0, 4.0, 5.0, 5.0, 0.0];

    let (once, start1, end1)    = bezier::specialize_curve(&nodes, 2, 0.25, 0.75, 0.0, 1.0);
    let (twice, start2, end2)   = bezier::specialize_curve(&once, 2, 0.25, 0.75, start1, end1);
    let (direct, start3, end3)  = bezier::specialize_curve(&nodes, 2, 0.375, 0.625, 0.0, 1.0);

    assert!(max_difference(&twice, &direct) < 1e-10);
    assert!(approx_equal(start2, start3, 1e-12));
    assert!(approx_equal(end2, end3, 1e-12));
}

#[test]
fn quintic_section_points_match() {
    let nodes = [0.0, 1.0, 1.0, 4.0, 3.0, -2.0, 4.0, 6.0, 6.0, 0.0, 7.0, 2.0];

    let (section, _, _) = bezier::specialize_curve(&nodes, 2, 0.1, 0.9, 0.0, 1.0);

    for t in 0..=10 {
        let t   = (t as f64)/10.0;
        let t2  = t*0.8 + 0.1;

        let p1 = bezier::evaluate_multi(&section, 2, &[t]);
        let p2 = bezier::evaluate_multi(&nodes, 2, &[t2]);

        assert!(max_difference(&p1, &p2) < 1e-9);
    }
}
