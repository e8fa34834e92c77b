use rayon::prelude::*;

use crate::animation::motion::MotionState;
use crate::classify::category::Category;
use crate::compose::frame::compose_frame;
use crate::foundation::config::ThreadingConfig;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::sequence::FrameSequence;

/// Compose and rasterize frame `frame` of a `total_frames`-long clip.
pub fn render_frame(
    category: Category,
    prompt: &str,
    frame: FrameIndex,
    total_frames: u64,
    backend: &mut dyn RenderBackend,
) -> ReelResult<FrameRGBA> {
    let motion = MotionState::new(frame.0, total_frames);
    let scene = compose_frame(category, prompt, motion, Canvas::PORTRAIT);
    backend.render_scene(&scene)
}

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 24,
            threads: None,
        }
    }
}

impl From<&ThreadingConfig> for RenderThreading {
    fn from(cfg: &ThreadingConfig) -> Self {
        Self {
            parallel: cfg.parallel,
            chunk_size: cfg.chunk_size,
            threads: cfg.threads,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Scheduling batches; one per chunk.
    pub chunks: u64,
}

/// Render every frame of a clip, in order.
pub fn render(
    category: Category,
    prompt: &str,
    total_frames: u64,
    backend: &mut dyn RenderBackend,
    threading: &RenderThreading,
) -> ReelResult<FrameSequence> {
    render_with_stats(category, prompt, total_frames, backend, threading).map(|(seq, _)| seq)
}

#[tracing::instrument(skip(backend, threading, prompt), fields(parallel = threading.parallel))]
pub fn render_with_stats(
    category: Category,
    prompt: &str,
    total_frames: u64,
    backend: &mut dyn RenderBackend,
    threading: &RenderThreading,
) -> ReelResult<(FrameSequence, RenderStats)> {
    if total_frames == 0 {
        return Err(ReelError::validation("total_frames must be > 0"));
    }

    let mut seq = FrameSequence::with_capacity(total_frames.min(4096) as usize);
    let mut stats = RenderStats::default();
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    if !threading.parallel {
        for f in 0..total_frames {
            seq.push(render_frame(
                category,
                prompt,
                FrameIndex(f),
                total_frames,
                backend,
            )?)?;
        }
        stats.frames_total = total_frames;
        stats.chunks = total_frames.div_ceil(chunk_size);
        return Ok((seq, stats));
    }

    let worker_settings = backend.worker_render_settings().ok_or_else(|| {
        ReelError::render("parallel render requires backend worker settings support (CpuBackend)")
    })?;
    let pool = build_thread_pool(threading.threads)?;

    let mut indexed = Vec::with_capacity(total_frames.min(4096) as usize);
    let mut chunk_start = 0;
    while chunk_start < total_frames {
        let chunk_end = (chunk_start + chunk_size).min(total_frames);
        tracing::debug!(chunk_start, chunk_end, "rendering chunk");
        indexed.extend(render_chunk_parallel_cpu(
            category,
            prompt,
            chunk_start..chunk_end,
            total_frames,
            &worker_settings,
            &pool,
        )?);
        stats.chunks += 1;
        chunk_start = chunk_end;
    }
    stats.frames_total = total_frames;

    let seq = FrameSequence::from_indexed(indexed)?;
    Ok((seq, stats))
}

fn render_chunk_parallel_cpu(
    category: Category,
    prompt: &str,
    range: std::ops::Range<u64>,
    total_frames: u64,
    settings: &RenderSettings,
    pool: &rayon::ThreadPool,
) -> ReelResult<Vec<(FrameIndex, FrameRGBA)>> {
    let indices: Vec<u64> = range.collect();
    let rendered = pool.install(|| {
        indices
            .par_iter()
            .map_init(
                || crate::render::cpu::CpuBackend::new(settings.clone()),
                |worker_backend, &f| -> ReelResult<(FrameIndex, FrameRGBA)> {
                    let frame = render_frame(
                        category,
                        prompt,
                        FrameIndex(f),
                        total_frames,
                        worker_backend,
                    )?;
                    Ok((FrameIndex(f), frame))
                },
            )
            .collect::<Vec<_>>()
    });

    rendered.into_iter().collect()
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
