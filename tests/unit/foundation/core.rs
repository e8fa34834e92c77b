use super::*;

#[test]
fn portrait_canvas_is_fixed_and_even() {
    let c = Canvas::default();
    assert_eq!(c, Canvas::PORTRAIT);
    assert_eq!((c.width, c.height), (720, 1280));
    assert_eq!(c.width % 2, 0);
    assert_eq!(c.height % 2, 0);
    assert_eq!(c.byte_len(), 720 * 1280 * 4);
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 720.0, 1280.0));
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0).is_err());
    assert_eq!(Fps::new(24).unwrap(), Fps(24));
}

#[test]
fn frames_for_duration_rounds() {
    let fps = Fps::new(24).unwrap();
    assert_eq!(fps.frames_for_duration(3.0), 72);
    assert_eq!(fps.frames_for_duration(1.0 / 48.0), 1);
    assert_eq!(fps.frames_for_duration(0.01), 0);
    assert_eq!(fps.frames_for_duration(f64::NAN), 0);
    assert_eq!(fps.frames_for_duration(-1.0), 0);
}

#[test]
fn rgb_is_opaque() {
    assert_eq!(Rgb8::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
}
