use super::*;

#[test]
fn endpoints_are_fixed() {
    for e in [
        Ease::Linear,
        Ease::InSine,
        Ease::OutSine,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InOutCubic,
    ] {
        assert!(e.apply(0.0).abs() < 1e-12, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
    }
}

#[test]
fn in_sine_is_one_minus_cosine() {
    let t = 0.5;
    let expected = 1.0 - (t * std::f64::consts::PI / 2.0).cos();
    assert!((Ease::InSine.apply(t) - expected).abs() < 1e-12);
    assert!(Ease::InSine.apply(0.5) < 0.5);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::Linear.apply(7.0), 1.0);
}
