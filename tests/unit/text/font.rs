use super::*;

#[test]
fn builtin_is_always_available() {
    let book = FontBook::builtin();
    assert!(book.is_builtin());
    assert_eq!(book.name(), "builtin-5x7");
}

#[test]
fn garbage_font_bytes_are_rejected() {
    assert!(FontBook::from_bytes("junk", vec![0, 1, 2, 3]).is_err());
}

#[test]
fn discover_never_fails_with_a_bad_path() {
    let book = FontBook::discover(Some(Path::new("/definitely/not/a/font.ttf")));
    match book.face() {
        FontFace::Builtin => {}
        FontFace::Outline { bytes, .. } => assert!(!bytes.is_empty()),
    }
}

#[test]
fn layout_rejects_bad_sizes() {
    let mut engine = TextLayoutEngine::new();
    let bytes = Arc::new(Vec::new());
    assert!(
        engine
            .layout_plain("x", &bytes, 0.0, TextBrush::default(), None)
            .is_err()
    );
    assert!(
        engine
            .layout_plain("x", &bytes, f32::NAN, TextBrush::default(), None)
            .is_err()
    );
}

#[test]
fn system_face_lays_out_when_present() {
    let book = FontBook::discover(None);
    let FontFace::Outline { bytes, .. } = book.face() else {
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let layout = engine
        .layout_plain("Bath Time!", bytes, 40.0, TextBrush::default(), Some(600.0))
        .unwrap();
    assert!(layout.width() > 0.0);
    assert!(layout.height() > 0.0);
}
