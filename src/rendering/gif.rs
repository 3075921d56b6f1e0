use std::cell::RefCell;
use std::io::{self, Write};
use std::mem;
use std::rc::Rc;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame};
use tracing::{debug, info};

use super::{FrameSink, Palette, RenderError, render_frame};
use crate::domain::Grid;

/// Quantization speed handed to the encoder, 1 (best) to 30 (fastest)
const ENCODER_SPEED: i32 = 10;

/// In-memory staging area the encoder writes into.
/// The sink moves its contents to the real writer after every frame.
#[derive(Clone, Default)]
struct Staging(Rc<RefCell<Vec<u8>>>);

impl Staging {
    fn take(&self) -> Vec<u8> {
        mem::take(&mut *self.0.borrow_mut())
    }
}

impl Write for Staging {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Encodes each pushed grid as one GIF frame.
/// No loop extension is written, so viewers play the animation once.
/// Every write to `W`, including the trailer and the final flush,
/// reports its error through `push_frame` or `finish`.
pub struct GifSink<W: Write> {
    writer: W,
    staging: Staging,
    encoder: GifEncoder<Staging>,
    palette: Palette,
    cell_px: u32,
    delay: Delay,
    frames: usize,
}

impl<W: Write> GifSink<W> {
    /// `interval_ms` is the delay between frames
    pub fn new(writer: W, palette: Palette, cell_px: u32, interval_ms: u32) -> Self {
        let staging = Staging::default();
        Self {
            writer,
            encoder: GifEncoder::new_with_speed(staging.clone(), ENCODER_SPEED),
            staging,
            palette,
            cell_px: cell_px.max(1),
            delay: Delay::from_numer_denom_ms(interval_ms, 1),
            frames: 0,
        }
    }

    /// Frames encoded so far
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn push_frame(&mut self, grid: &Grid) -> Result<(), RenderError> {
        let image = render_frame(grid, self.palette, self.cell_px)?;
        self.encoder
            .encode_frame(Frame::from_parts(image, 0, 0, self.delay))?;
        self.writer.write_all(&self.staging.take())?;
        self.frames += 1;
        debug!(frame = self.frames, "encoded gif frame");
        Ok(())
    }

    fn finish(mut self) -> Result<(), RenderError> {
        if self.frames == 0 {
            return Err(RenderError::NoFrames);
        }
        // the trailer lands in staging when the encoder drops
        drop(self.encoder);
        self.writer.write_all(&self.staging.take())?;
        self.writer.flush()?;
        info!(frames = self.frames, "gif complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use std::io::BufWriter;

    /// Writer whose every operation fails
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_writes_gif_stream() {
        let mut buffer: Vec<u8> = Vec::new();
        {
            let mut sink = GifSink::new(&mut buffer, Palette::Inferno, 2, 100);
            let mut grid = Grid::new(4, 4);
            sink.push_frame(&grid).unwrap();
            grid.set(1, 1, Cell::Alive);
            sink.push_frame(&grid).unwrap();
            assert_eq!(sink.frames(), 2);
            sink.finish().unwrap();
        }
        assert!(buffer.starts_with(b"GIF89a"));
        assert_eq!(buffer.last(), Some(&0x3b));
    }

    #[test]
    fn test_oversized_grid_fails() {
        let mut buffer: Vec<u8> = Vec::new();
        let mut sink = GifSink::new(&mut buffer, Palette::Gray, 10, 50);
        let grid = Grid::new(7_000, 1);
        assert!(matches!(
            sink.push_frame(&grid),
            Err(RenderError::FrameTooLarge { .. })
        ));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut sink = GifSink::new(FullDisk, Palette::Gray, 2, 100);
        let result = sink.push_frame(&Grid::new(4, 4));
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_buffered_write_failure_is_reported_on_finish() {
        // small frames fit in the buffer, so the failure only shows up on flush
        let mut sink = GifSink::new(BufWriter::new(FullDisk), Palette::Gray, 2, 100);
        sink.push_frame(&Grid::new(4, 4)).unwrap();
        assert!(matches!(sink.finish(), Err(RenderError::Io(_))));
    }

    #[test]
    fn test_finish_without_frames_fails() {
        let mut buffer: Vec<u8> = Vec::new();
        let sink = GifSink::new(&mut buffer, Palette::Gray, 2, 100);
        assert!(matches!(sink.finish(), Err(RenderError::NoFrames)));
        assert!(buffer.is_empty());
    }
}
