use super::*;

#[test]
fn progress_is_index_over_total() {
    let m = MotionState::new(18, 72);
    assert_eq!(m.frame, FrameIndex(18));
    assert!((m.progress - 0.25).abs() < 1e-12);
    assert_eq!(MotionState::new(0, 0).progress, 0.0);
    assert!(MotionState::new(71, 72).progress < 1.0);
}

#[test]
fn oscillators() {
    let m = MotionState::at_progress(0.25);
    // sin(0.25 * 2 * pi) = 1
    assert!((m.osc(30.0, 2.0) - 30.0).abs() < 1e-9);
    assert!((m.cosc(10.0, 2.0, 0.0)).abs() < 1e-9);
    assert!(m.bounce(100.0, 4.0) >= 0.0);
    let m = MotionState::at_progress(0.375);
    assert!(m.osc(1.0, 4.0) < 0.0);
    assert!(m.bounce(1.0, 4.0) > 0.0);
}

#[test]
fn reveal_is_strict() {
    assert!(!MotionState::at_progress(0.3).reveal(0.3));
    assert!(MotionState::at_progress(0.31).reveal(0.3));
}

#[test]
fn ramp_after_threshold() {
    assert_eq!(MotionState::at_progress(0.2).ramp_after(0.3), 0.0);
    assert!((MotionState::at_progress(0.65).ramp_after(0.3) - 0.5).abs() < 1e-12);
    assert_eq!(MotionState::at_progress(1.0).ramp_after(0.3), 1.0);
    assert_eq!(MotionState::at_progress(1.0).ramp_after(1.0), 0.0);
}

#[test]
fn blink_closes_at_end_of_period() {
    assert_eq!(MotionState::new(10, 72).blink(60, 55, 0.1), 1.0);
    assert_eq!(MotionState::new(57, 72).blink(60, 55, 0.1), 0.1);
    assert_eq!(MotionState::new(60, 72).blink(60, 55, 0.1), 1.0);
}

#[test]
fn step_and_every() {
    assert_eq!(MotionState::at_progress(0.26).step(8), 2);
    assert!(MotionState::new(30, 72).every(15));
    assert!(!MotionState::new(31, 72).every(15));
    assert!(!MotionState::new(31, 72).every(0));
}

#[test]
fn clamps_handle_degenerate_input() {
    assert_eq!(clamp_range(f64::NAN, 2.0, 5.0), 2.0);
    assert_eq!(clamp_range(9.0, 2.0, 5.0), 5.0);
    assert_eq!(clamp_range(3.0, 5.0, 2.0), 5.0);
    assert_eq!(clamp_radius(-4.0, 1.0, 10.0), 1.0);
    assert_eq!(clamp_radius(40.0, 1.0, 10.0), 10.0);
    assert_eq!(clamp_center(-5.0, 10.0, 720.0), 10.0);
    assert_eq!(clamp_center(800.0, 10.0, 720.0), 710.0);
}
