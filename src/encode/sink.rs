use std::path::{Path, PathBuf};

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{LogoError, LogoResult};
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> LogoResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LogoResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> LogoResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LogoResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LogoResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LogoResult<()> {
        Ok(())
    }
}

/// Writes each frame as `frame_NNNNN.png` (straight alpha) into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`; the directory is created in `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name used for frame `idx`.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:05}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> LogoResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LogoResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| LogoError::validation("PngSequenceSink: push_frame before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(LogoError::validation(format!(
                "PngSequenceSink: frame is {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.dir.join(Self::file_name(idx));
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> LogoResult<()> {
        tracing::debug!(dir = %self.dir.display(), frames = self.written.len(), "png sequence written");
        Ok(())
    }
}

/// Write one frame to `path` as an RGBA PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> LogoResult<()> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
        .ok_or_else(|| LogoError::render("invalid rgba buffer size"))?;
    img.save(path)
        .map_err(|e| LogoError::render(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
