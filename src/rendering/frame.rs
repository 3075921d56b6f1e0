use image::{ImageBuffer, RgbaImage};

use super::{Palette, RenderError};
use crate::domain::{Grid, Size};

/// Figure edge in inches; frame edge in pixels is this times the quality (dpi)
pub const FIGURE_INCHES: u32 = 8;

/// Largest frame edge a GIF can describe
pub const MAX_FRAME_EDGE: u32 = u16::MAX as u32;

/// Pixels per cell edge so the longer grid side spans the figure.
/// Never less than one.
pub fn cell_pixels(size: Size, quality: u32) -> u32 {
    let target = FIGURE_INCHES.saturating_mul(quality);
    let longest = u32::try_from(size.width.max(size.height).max(1)).unwrap_or(u32::MAX);
    (target / longest).max(1)
}

/// Frame dimensions in pixels for a grid of `size`
pub fn frame_dimensions(size: Size, cell_px: u32) -> Result<(u32, u32), RenderError> {
    let edge = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_px))
            .filter(|&px| px <= MAX_FRAME_EDGE)
    };
    match (edge(size.width), edge(size.height)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(RenderError::FrameTooLarge {
            width: size.width,
            height: size.height,
            cell_px,
        }),
    }
}

/// Rasterize a grid, one `cell_px` square per cell
pub fn render_frame(grid: &Grid, palette: Palette, cell_px: u32) -> Result<RgbaImage, RenderError> {
    let (width, height) = grid.dimensions();
    let (frame_width, frame_height) = frame_dimensions(Size::new(width, height), cell_px)?;

    let image = ImageBuffer::from_fn(frame_width, frame_height, |px, py| {
        let x = (px / cell_px) as usize;
        let y = (py / cell_px) as usize;
        palette.pixel(grid.get(x, y).unwrap_or_default())
    });
    Ok(image)
}
