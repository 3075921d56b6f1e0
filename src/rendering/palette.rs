use image::Rgba;

use crate::domain::Cell;

/// Color maps for rendering frames.
/// Dead cells take the low end of the map and live cells the high end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Palette {
    #[default]
    Inferno,
    Viridis,
    Magma,
    Plasma,
    Cividis,
    Gray,
    Binary,
}

impl Palette {
    /// (dead, alive) colors
    pub const fn colors(self) -> ([u8; 3], [u8; 3]) {
        match self {
            Palette::Inferno => ([0, 0, 4], [252, 255, 164]),
            Palette::Viridis => ([68, 1, 84], [253, 231, 37]),
            Palette::Magma => ([0, 0, 4], [252, 253, 191]),
            Palette::Plasma => ([13, 8, 135], [240, 249, 33]),
            Palette::Cividis => ([0, 34, 78], [254, 232, 56]),
            Palette::Gray => ([0, 0, 0], [255, 255, 255]),
            Palette::Binary => ([255, 255, 255], [0, 0, 0]),
        }
    }

    /// Opaque pixel for a cell
    pub const fn pixel(self, cell: Cell) -> Rgba<u8> {
        let (dead, alive) = self.colors();
        let [r, g, b] = match cell {
            Cell::Alive => alive,
            Cell::Dead => dead,
        };
        Rgba([r, g, b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_default_is_inferno() {
        assert_eq!(Palette::default(), Palette::Inferno);
    }

    #[test]
    fn test_dead_and_alive_differ() {
        for palette in Palette::value_variants() {
            assert_ne!(palette.pixel(Cell::Dead), palette.pixel(Cell::Alive), "{palette:?}");
        }
    }

    #[test]
    fn test_pixels_are_opaque() {
        assert_eq!(Palette::Gray.pixel(Cell::Alive), Rgba([255, 255, 255, 255]));
        assert_eq!(Palette::Binary.pixel(Cell::Alive).0[3], 255);
    }
}
