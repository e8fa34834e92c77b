use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert_eq!(
        ReelError::validation("bad").to_string(),
        "validation error: bad"
    );
    assert_eq!(
        ReelError::encode_backend("boom").to_string(),
        "encode backend error: boom"
    );
    assert_eq!(ReelError::EmptySequence.to_string(), "empty frame sequence");
}

#[test]
fn geometry_error_names_the_frame() {
    let err = ReelError::InconsistentGeometry {
        index: 3,
        expected_width: 720,
        expected_height: 1280,
        width: 10,
        height: 20,
    };
    let msg = err.to_string();
    assert!(msg.contains("frame 3"));
    assert!(msg.contains("720x1280"));
    assert!(msg.contains("10x20"));
    assert_eq!(err.kind(), FailureKind::InconsistentGeometry);
}

#[test]
fn copy_error_keeps_source() {
    use std::error::Error as _;

    let err = ReelError::CopyIo {
        src: PathBuf::from("a.mp4"),
        dest: PathBuf::from("out/b.mp4"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("a.mp4"));
    assert!(err.source().is_some());
    assert_eq!(err.kind(), FailureKind::CopyIo);
}

#[test]
fn anyhow_errors_convert_to_other() {
    let err: ReelError = anyhow::anyhow!("wrapped").into();
    assert_eq!(err.kind(), FailureKind::Other);
    assert_eq!(err.to_string(), "wrapped");
}

#[test]
fn failure_kind_serializes_snake_case() {
    let s = serde_json::to_string(&FailureKind::EncodeBackend).unwrap();
    assert_eq!(s, "\"encode_backend\"");
}
