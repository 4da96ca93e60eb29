use serde::Deserialize;
use tweener_core::{evaluate, EaseDirection, EaseFamily, Easing};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn is_warp(e: Easing) -> bool {
    e.family() == EaseFamily::Warp
}

/// it should map t=0 to 0 and t=1 to 1 for every curve
#[test]
fn endpoints_are_zero_and_one() {
    for &e in Easing::ALL {
        approx(evaluate(e, 0.0), 0.0, 1e-6);
        approx(evaluate(e, 1.0), 1.0, 1e-6);
    }
}

/// it should pin pinned families exactly, not just approximately
#[test]
fn pinned_families_hit_endpoints_exactly() {
    for &e in Easing::ALL {
        if matches!(
            e.family(),
            EaseFamily::Sine | EaseFamily::Expo | EaseFamily::Back | EaseFamily::Elastic
        ) && matches!(e.direction(), EaseDirection::In | EaseDirection::Out)
        {
            assert_eq!(e.evaluate(0.0), 0.0, "{e} at 0");
            assert_eq!(e.evaluate(1.0), 1.0, "{e} at 1");
            assert_eq!(e.evaluate(5e-7), 0.0, "{e} near 0");
            assert_eq!(e.evaluate(1.0 - 5e-7), 1.0, "{e} near 1");
        }
    }
}

/// it should satisfy Out(t) = 1 - In(1 - t) for every family
#[test]
fn out_reflects_in() {
    for &e in Easing::ALL {
        if e.direction() != EaseDirection::In || e == Easing::Linear {
            continue;
        }
        let out = Easing::from_parts(e.family(), EaseDirection::Out);
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let reflected = 1.0 - e.evaluate(1.0 - t);
            approx(out.evaluate(t), reflected, 1e-5);
        }
    }
}

/// it should build InOut/OutIn from the scaled In and Out halves (warp excluded)
#[test]
fn split_variants_follow_half_scaling() {
    for &e in Easing::ALL {
        if is_warp(e) || e.direction() != EaseDirection::InOut {
            continue;
        }
        let ease_in = Easing::from_parts(e.family(), EaseDirection::In);
        let ease_out = Easing::from_parts(e.family(), EaseDirection::Out);
        let out_in = Easing::from_parts(e.family(), EaseDirection::OutIn);
        for i in 0..=40 {
            let t = i as f32 / 40.0;
            let (expected_in_out, expected_out_in) = if t < 0.5 {
                (
                    0.5 * ease_in.evaluate(2.0 * t),
                    0.5 * ease_out.evaluate(2.0 * t),
                )
            } else {
                (
                    0.5 * ease_out.evaluate(2.0 * t - 1.0) + 0.5,
                    0.5 * ease_in.evaluate(2.0 * t - 1.0) + 0.5,
                )
            };
            approx(e.evaluate(t), expected_in_out, 1e-6);
            approx(out_in.evaluate(t), expected_out_in, 1e-6);
        }
    }
}

/// it should keep the asymmetric warp thresholds
#[test]
fn warp_thresholds_are_asymmetric() {
    assert_eq!(evaluate(Easing::WarpOut, 0.0), 0.0);
    assert_eq!(evaluate(Easing::WarpOut, 0.01), 1.0);
    assert_eq!(evaluate(Easing::WarpIn, 0.0), 0.0);
    assert_eq!(evaluate(Easing::WarpIn, 0.99), 0.0);
    assert_eq!(evaluate(Easing::WarpIn, 1.0), 1.0);
    assert_eq!(evaluate(Easing::WarpInOut, 0.4999), 0.0);
    assert_eq!(evaluate(Easing::WarpInOut, 0.5), 1.0);
    assert_eq!(evaluate(Easing::WarpOutIn, 0.0), 0.0);
    assert_eq!(evaluate(Easing::WarpOutIn, 0.3), 0.5);
    assert_eq!(evaluate(Easing::WarpOutIn, 0.99), 0.5);
    assert_eq!(evaluate(Easing::WarpOutIn, 1.0), 1.0);
}

/// it should evaluate bounce-out at t=0.5 on its second arc
#[test]
fn bounce_out_midpoint_branch() {
    let u = 0.5f32 - 1.5 / 2.75;
    approx(evaluate(Easing::BounceOut, 0.5), 7.5625 * u * u + 0.75, 1e-5);
    approx(evaluate(Easing::BounceOut, 0.5), 0.765625, 1e-5);
}

/// it should overshoot for back and elastic curves
#[test]
fn overshoot_is_preserved() {
    assert!(evaluate(Easing::BackIn, 0.25) < 0.0);
    assert!(evaluate(Easing::BackOut, 0.5) > 1.0);
    assert!(evaluate(Easing::ElasticOut, 0.5) > 1.0);
    assert!(evaluate(Easing::ElasticIn, 0.5) < 0.0);
}

/// it should tolerate inputs outside [0, 1] without producing NaN
#[test]
fn finite_inputs_never_produce_nan() {
    let inputs = [-2.5f32, -1.5, -0.25, 1.25, 2.5];
    for &e in Easing::ALL {
        for &t in &inputs {
            let v = e.evaluate(t);
            assert!(!v.is_nan(), "{e}({t}) produced NaN");
        }
    }
}

/// it should hold circular split curves at fixed values outside their domain
#[test]
fn circular_split_variants_clamp() {
    assert_eq!(evaluate(Easing::CircInOut, -1.0), 0.5);
    assert_eq!(evaluate(Easing::CircInOut, 1.75), 0.5);
    assert_eq!(evaluate(Easing::CircOutIn, -0.5), 0.0);
    assert_eq!(evaluate(Easing::CircOutIn, 1.25), 1.0);
    assert_eq!(evaluate(Easing::CircOutIn, 1.0), 1.0);
}

#[derive(Deserialize)]
struct CurveTable {
    tolerance: f32,
    samples: Vec<CurveSample>,
}

#[derive(Deserialize)]
struct CurveSample {
    easing: Easing,
    t: f32,
    value: f32,
}

/// it should match the shared reference samples for every curve
#[test]
fn matches_reference_samples() {
    let table: CurveTable = tweener_test_fixtures::curves::load("reference-samples")
        .expect("load reference-samples fixture");
    assert_eq!(table.samples.len(), Easing::ALL.len() * 3);
    for s in &table.samples {
        let got = s.easing.evaluate(s.t);
        assert!(
            (got - s.value).abs() <= table.tolerance,
            "{}({}) = {got}, expected {}",
            s.easing,
            s.t,
            s.value
        );
    }
}
