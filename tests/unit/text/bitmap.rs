use super::*;

#[test]
fn table_covers_printable_ascii() {
    assert_eq!(GLYPHS.len(), (LAST - FIRST + 1) as usize);
    assert_eq!(glyph(' '), &[0, 0, 0, 0, 0]);
    assert_eq!(glyph('A'), &[0x7E, 0x11, 0x11, 0x11, 0x7E]);
}

#[test]
fn unknown_characters_fall_back_to_question_mark() {
    assert_eq!(glyph('é'), glyph('?'));
    assert_eq!(glyph('\u{1F600}'), glyph('?'));
    assert_eq!(glyph('\t'), glyph('?'));
}

#[test]
fn wrap_breaks_on_words() {
    assert_eq!(wrap("hello world", 5), vec!["hello", "world"]);
    assert_eq!(wrap("a b c", 10), vec!["a b c"]);
    assert_eq!(wrap("Demo video\nbrush", 40), vec!["Demo video", "brush"]);
}

#[test]
fn wrap_splits_long_words() {
    assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    assert_eq!(wrap("", 3), vec![""]);
}

#[test]
fn cells_are_centered() {
    let center = Point::new(100.0, 50.0);
    let lit = cells("I", center, 8.0, 700.0);
    assert!(!lit.is_empty());
    let union = lit.iter().skip(1).fold(lit[0], |acc, r| acc.union(*r));
    // "I" lights columns 1..=3 of a 5 column glyph, so its ink is centered.
    assert!((union.center().x - center.x).abs() < 1e-9);
    assert!((union.height() - 7.0).abs() < 1e-9);
}

#[test]
fn cell_size_scales_with_text_size() {
    assert_eq!(cell_size(48.0), 6.0);
    assert_eq!(cell_size(2.0), 1.0);
}
