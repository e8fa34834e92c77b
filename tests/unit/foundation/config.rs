use super::*;

use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_request_defaults() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.duration_seconds, 3.0);
    assert_eq!(cfg.frame_rate, 24);
    assert_eq!(cfg.filename_prefix, "animation");
    assert!(cfg.demo_mode);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = EngineConfig::from_json(r#"{ "frame_rate": 12, "threading": { "parallel": false } }"#)
        .unwrap();
    assert_eq!(cfg.frame_rate, 12);
    assert_eq!(cfg.duration_seconds, 3.0);
    assert!(!cfg.threading.parallel);
    assert_eq!(cfg.threading.chunk_size, 24);
}

#[test]
fn invalid_json_values_are_rejected() {
    assert!(EngineConfig::from_json(r#"{ "frame_rate": 0 }"#).is_err());
    assert!(EngineConfig::from_json(r#"{ "duration_seconds": -1.0 }"#).is_err());
    assert!(EngineConfig::from_json(r#"{ "filename_prefix": "  " }"#).is_err());
    assert!(EngineConfig::from_json("not json").is_err());
}

#[test]
fn filename_prefix_cannot_leave_output_dir() {
    for prefix in ["../escape", "nested/clip", "..", "win\\clip"] {
        let cfg = EngineConfig {
            filename_prefix: prefix.to_string(),
            ..EngineConfig::default()
        };
        assert!(
            matches!(cfg.validate(), Err(ReelError::Validation(_))),
            "prefix {prefix:?} accepted"
        );
    }
    let cfg = EngineConfig {
        filename_prefix: "bedtime_clip-v2".to_string(),
        ..EngineConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn env_overrides_apply() {
    let cfg = EngineConfig::default().with_overrides_from(env(&[
        ("BRIGHTREEL_RECORDINGS_DIR", "/lib/clips"),
        ("BRIGHTREEL_VIDEOS_DIR", "/tmp/out"),
        ("BRIGHTREEL_DEMO_MODE", "no"),
        ("BRIGHTREEL_THREADS", "3"),
    ]));
    assert_eq!(cfg.recordings_dir, PathBuf::from("/lib/clips"));
    assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
    assert!(!cfg.demo_mode);
    assert_eq!(cfg.threading.threads, Some(3));
}

#[test]
fn blank_or_bad_env_values_are_ignored() {
    let cfg = EngineConfig::default().with_overrides_from(env(&[
        ("BRIGHTREEL_VIDEOS_DIR", "   "),
        ("BRIGHTREEL_THREADS", "zero"),
    ]));
    assert_eq!(cfg.output_dir, PathBuf::from("videos"));
    assert_eq!(cfg.threading.threads, None);
}

#[test]
fn truthy_values() {
    for v in ["1", "true", "TRUE", " yes "] {
        assert!(is_truthy(v), "{v}");
    }
    for v in ["0", "false", "", "on"] {
        assert!(!is_truthy(v), "{v}");
    }
}
