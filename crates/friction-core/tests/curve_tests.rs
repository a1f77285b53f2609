use friction_core::{evaluate, Parameters};
use proptest::prelude::*;

fn params(es: f64, ev: f64, a_s: f64, av: f64, k: f64) -> Parameters {
    Parameters {
        extremum_slip: es,
        extremum_value: ev,
        asymptote_slip: a_s,
        asymptote_value: av,
        stiffness: k,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_curve_matches_reference_points() {
    let p = Parameters::default();
    assert_eq!(evaluate(0.5, &p), 2.5);
    assert_eq!(evaluate(1.0, &p), 5.0);
    assert_eq!(evaluate(1.5, &p), 3.0);
    assert_eq!(evaluate(2.5, &p), 1.0);
}

#[test]
fn origin_is_zero() {
    assert_eq!(evaluate(0.0, &Parameters::default()), 0.0);
}

#[test]
fn stiffness_scales_every_segment() {
    let p = params(1.0, 5.0, 2.0, 1.0, 2.0);
    assert_eq!(evaluate(0.5, &p), 5.0);
    assert_eq!(evaluate(1.5, &p), 6.0);
    assert_eq!(evaluate(3.0, &p), 2.0);
}

#[test]
fn negative_slip_extrapolates_the_ramp() {
    let p = Parameters::default();
    assert_eq!(evaluate(-0.5, &p), -2.5);
}

#[test]
fn skipped_middle_segment_steps_to_asymptote() {
    let p = params(2.0, 5.0, 1.0, 1.5, 1.0);
    assert_eq!(evaluate(1.0, &p), 2.5);
    assert_eq!(evaluate(2.0, &p), 1.5);
    assert_eq!(evaluate(2.9, &p), 1.5);

    let equal = params(1.0, 5.0, 1.0, 2.0, 1.0);
    assert_eq!(evaluate(1.0, &equal), 2.0);
}

#[test]
fn zero_extremum_slip_steps_at_origin() {
    let p = params(0.0, 4.0, 2.0, 1.0, 1.5);
    assert_eq!(evaluate(0.0, &p), 6.0);
    assert_eq!(evaluate(-1.0, &p), 0.0);
    assert!(approx(evaluate(1.0, &p), 3.75));
    assert_eq!(evaluate(2.0, &p), 1.5);
    for i in -10..=30 {
        assert!(evaluate(i as f64 * 0.1, &p).is_finite());
    }
}

#[test]
fn zero_extremum_and_asymptote_slip_is_flat() {
    let p = params(0.0, 4.0, 0.0, 1.0, 1.0);
    assert_eq!(evaluate(0.0, &p), 1.0);
    assert_eq!(evaluate(2.0, &p), 1.0);
    assert_eq!(evaluate(-0.1, &p), 0.0);
}

fn arb_params() -> impl Strategy<Value = Parameters> {
    (0.01..3.0_f64, 0.0..10.0_f64, 0.0..3.0_f64, 0.0..10.0_f64, 0.0..2.0_f64)
        .prop_map(|(es, ev, a_s, av, k)| params(es, ev, a_s, av, k))
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(p in arb_params(), slip in 0.0..3.0_f64) {
        prop_assert_eq!(evaluate(slip, &p).to_bits(), evaluate(slip, &p).to_bits());
    }

    #[test]
    fn continuous_at_both_knots(p in arb_params()) {
        prop_assume!(p.asymptote_slip > p.extremum_slip);
        prop_assert!(approx(evaluate(p.extremum_slip, &p), p.extremum_value * p.stiffness));
        prop_assert!(approx(evaluate(p.asymptote_slip, &p), p.asymptote_value * p.stiffness));
    }

    #[test]
    fn degenerate_curve_is_flat_past_extremum(p in arb_params(), extra in 0.0..3.0_f64) {
        prop_assume!(p.asymptote_slip <= p.extremum_slip);
        let slip = p.extremum_slip + extra;
        prop_assert_eq!(evaluate(slip, &p), p.asymptote_value * p.stiffness);
    }

    #[test]
    fn plateau_after_asymptote(p in arb_params(), extra in 0.0..5.0_f64) {
        let slip = p.asymptote_slip.max(p.extremum_slip) + extra;
        prop_assert_eq!(evaluate(slip, &p), p.asymptote_value * p.stiffness);
    }
}
