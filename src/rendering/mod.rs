//! Turning generations into animation frames.
//!
//! The simulation only ever sees the [`FrameSink`] trait; colors,
//! frame sizes and encoding live behind it.

mod frame;
mod gif;
mod palette;

use thiserror::Error;

use crate::domain::Grid;

pub use frame::{FIGURE_INCHES, MAX_FRAME_EDGE, cell_pixels, frame_dimensions, render_frame};
pub use gif::GifSink;
pub use palette::Palette;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Frame for a {width}x{height} grid at {cell_px}px per cell exceeds the GIF size limit")]
    FrameTooLarge {
        width: usize,
        height: usize,
        cell_px: u32,
    },

    #[error("Animation has no frames")]
    NoFrames,
}

/// Consumer of one grid per generation
pub trait FrameSink {
    fn push_frame(&mut self, grid: &Grid) -> Result<(), RenderError>;

    /// Flush whatever the sink buffers. Called once after the last frame.
    fn finish(self) -> Result<(), RenderError>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Keeps every generation in memory
impl FrameSink for Vec<Grid> {
    fn push_frame(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.push(grid.clone());
        Ok(())
    }
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn push_frame(&mut self, grid: &Grid) -> Result<(), RenderError> {
        (**self).push_frame(grid)
    }
}

/// Drops frames; used when nothing is saved
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardFrames;

impl FrameSink for DiscardFrames {
    fn push_frame(&mut self, _grid: &Grid) -> Result<(), RenderError> {
        Ok(())
    }
}
