use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::LogoResult;
use crate::render::cpu::{CpuRasterizer, CpuRasterizerOpts, render_parallel};
use crate::render::display_list::DisplayList;
use crate::view::showcase::Showcase;

/// Frames rasterized together when rendering in parallel.
const PARALLEL_CHUNK: usize = 32;

/// Options for [`render_sequence`].
#[derive(Clone, Copy, Debug)]
pub struct SequenceOpts {
    /// Output size.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Frames to render; frame `i` is sampled at `fps.frame_time(i)`.
    pub range: FrameRange,
    /// Rasterize chunks of frames on the rayon pool.
    pub parallel: bool,
}

/// Summary of a finished sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceStats {
    /// Frames pushed to the sink.
    pub frames: u64,
}

/// Drive `showcase` through `opts.range` and stream the rasterized frames into `sink`.
///
/// Recording is sequential because the showcase clock only moves forward; rasterization of the
/// recorded lists may run in parallel.
#[tracing::instrument(skip(showcase, sink), fields(frames = opts.range.len_frames()))]
pub fn render_sequence(
    showcase: &mut Showcase,
    opts: &SequenceOpts,
    sink: &mut dyn FrameSink,
) -> LogoResult<SequenceStats> {
    let raster_opts = CpuRasterizerOpts {
        background: showcase.background(),
    };
    let size = opts.canvas.size();
    sink.begin(SinkConfig {
        width: opts.canvas.width,
        height: opts.canvas.height,
        fps: opts.fps,
    })?;

    let mut stats = SequenceStats::default();
    if opts.parallel {
        let mut pending: Vec<(FrameIndex, DisplayList)> = Vec::with_capacity(PARALLEL_CHUNK);
        for idx in opts.range.iter() {
            pending.push((idx, showcase.frame(opts.fps.frame_time(idx), size)));
            if pending.len() == PARALLEL_CHUNK {
                stats.frames += flush_chunk(&mut pending, opts.canvas, raster_opts, sink)?;
            }
        }
        stats.frames += flush_chunk(&mut pending, opts.canvas, raster_opts, sink)?;
    } else {
        let mut raster = CpuRasterizer::new(raster_opts);
        for idx in opts.range.iter() {
            let list = showcase.frame(opts.fps.frame_time(idx), size);
            let frame = raster.render(&list, opts.canvas.width, opts.canvas.height)?;
            sink.push_frame(idx, &frame)?;
            stats.frames += 1;
        }
    }

    sink.end()?;
    Ok(stats)
}

fn flush_chunk(
    pending: &mut Vec<(FrameIndex, DisplayList)>,
    canvas: Canvas,
    opts: CpuRasterizerOpts,
    sink: &mut dyn FrameSink,
) -> LogoResult<u64> {
    if pending.is_empty() {
        return Ok(0);
    }
    let (indices, lists): (Vec<FrameIndex>, Vec<DisplayList>) = pending.drain(..).unzip();
    let frames = render_parallel(&lists, canvas.width, canvas.height, opts)?;
    for (idx, frame) in indices.into_iter().zip(&frames) {
        sink.push_frame(idx, frame)?;
    }
    Ok(frames.len() as u64)
}
