use super::*;
use crate::render::cpu::CpuBackend;

fn backend() -> CpuBackend {
    CpuBackend::new(RenderSettings::default())
}

#[test]
fn zero_frames_is_rejected() {
    let err = render(
        Category::Play,
        "",
        0,
        &mut backend(),
        &RenderThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn sequential_render_counts_chunks() {
    let threading = RenderThreading {
        parallel: false,
        chunk_size: 2,
        threads: None,
    };
    let (seq, stats) =
        render_with_stats(Category::Read, "", 5, &mut backend(), &threading).unwrap();
    assert_eq!(seq.len(), 5);
    assert_eq!(seq.dimensions(), Some((720, 1280)));
    assert_eq!(stats, RenderStats { frames_total: 5, chunks: 3 });
}

#[test]
fn parallel_render_matches_sequential() {
    let seq_threading = RenderThreading::default();
    let par_threading = RenderThreading {
        parallel: true,
        chunk_size: 3,
        threads: Some(2),
    };
    let a = render(Category::Bath, "", 7, &mut backend(), &seq_threading).unwrap();
    let (b, stats) =
        render_with_stats(Category::Bath, "", 7, &mut backend(), &par_threading).unwrap();
    assert_eq!(stats.chunks, 3);
    assert_eq!(a, b);
}

#[test]
fn zero_threads_is_rejected() {
    assert!(build_thread_pool(Some(0)).is_err());
    assert!(build_thread_pool(Some(1)).is_ok());
}

#[test]
fn zero_chunk_size_is_treated_as_one() {
    assert_eq!(normalized_chunk_size(0), 1);
    assert_eq!(normalized_chunk_size(8), 8);
}

#[test]
fn threading_follows_config() {
    let cfg = ThreadingConfig {
        parallel: true,
        threads: Some(3),
        chunk_size: 10,
    };
    let t = RenderThreading::from(&cfg);
    assert!(t.parallel);
    assert_eq!(t.threads, Some(3));
    assert_eq!(t.chunk_size, 10);
}
