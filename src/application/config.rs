use std::path::PathBuf;

use crate::domain::{Algorithm, DEFAULT_SEED, Placement, Size};
use crate::rendering::{Palette, cell_pixels};

/// Everything one run needs, already validated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub size: Size,
    pub seed: String,
    /// Negative components mean "grid center"
    pub position: Placement,
    pub generations: u64,
    pub algorithm: Algorithm,
    pub mayhem: Option<MayhemConfig>,
    /// Fixed seed for the mayhem random source; entropy when absent
    pub rng_seed: Option<u64>,
    pub palette: Palette,
    /// Frame resolution in dots per inch of the 8-inch figure
    pub quality: u32,
    /// Milliseconds between frames
    pub interval_ms: u32,
    /// Output file without extension; nothing is written when absent
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MayhemConfig {
    pub interval: u64,
    pub seed: String,
}

impl RunConfig {
    /// Edge length of one cell in the rendered frames
    pub fn cell_pixels(&self) -> u32 {
        cell_pixels(self.size, self.quality)
    }

    /// Where the GIF goes, with its extension
    pub fn gif_path(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|stem| {
            let mut path = stem.clone().into_os_string();
            path.push(".gif");
            PathBuf::from(path)
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: Size::new(100, 100),
            seed: DEFAULT_SEED.to_string(),
            position: Placement::new(-1, -1),
            generations: 50,
            algorithm: Algorithm::default(),
            mayhem: None,
            rng_seed: None,
            palette: Palette::default(),
            quality: 100,
            interval_ms: 100,
            output: Some(PathBuf::from("life")),
        }
    }
}
