use super::*;

#[test]
fn slug_keeps_safe_characters_only() {
    assert_eq!(slug("  Brush your TEETH!  "), "brushyourteeth");
    assert_eq!(slug("wash-hands_now?"), "wash-hands_now");
    assert_eq!(slug("???"), "");
}

#[test]
fn slug_is_capped() {
    let long = "a".repeat(100);
    assert_eq!(slug(&long).chars().count(), MAX_SLUG_CHARS);
}

#[test]
fn names_follow_the_scheme() {
    let name = unique_file_name("animation", "Read a book", "mp4");
    assert!(name.starts_with("animation-readabook-"));
    assert!(name.ends_with(".mp4"));
    let parts: Vec<&str> = name.trim_end_matches(".mp4").split('-').collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[3], std::process::id().to_string());
}

#[test]
fn repeated_prompts_get_distinct_names() {
    let dir = Path::new("out");
    let a = unique_mp4_path(dir, "animation", "play");
    let b = unique_mp4_path(dir, "animation", "play");
    assert_ne!(a, b);
    assert_eq!(a.parent(), Some(dir));
}
