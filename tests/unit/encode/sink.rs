use super::*;

#[test]
fn write_sequence_streams_every_frame_in_order() {
    let frame = FrameRGBA::solid(4, 2, [9, 9, 9, 255]);
    let seq = FrameSequence::repeat(frame, 3).unwrap();
    let mut sink = InMemorySink::new();
    write_sequence(&mut sink, &seq, Fps(24)).unwrap();

    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 4,
            height: 2,
            fps: Fps(24)
        })
    );
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert!(sink.is_ended());
}

#[test]
fn write_sequence_rejects_empty_input_before_begin() {
    let mut sink = InMemorySink::new();
    let err = write_sequence(&mut sink, &FrameSequence::new(), Fps(24)).unwrap_err();
    assert!(matches!(err, ReelError::EmptySequence));
    assert!(sink.config().is_none());
}
