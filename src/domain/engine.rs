//! Entry points used by the animation driver: build a seeded grid,
//! advance it, and stamp patterns onto it.

use super::{Grid, Pattern, SeedCatalog};

/// Grid size in cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Center cell, rounded toward the top-left
    pub const fn center(self) -> Placement {
        Placement::new((self.width / 2) as i64, (self.height / 2) as i64)
    }
}

/// Where a pattern's center lands. Coordinates wrap onto the grid,
/// so negative or oversized values are fine for stamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

impl Placement {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Sentinel used by [`initialize`]: any negative component means "center"
    pub const fn is_default(self) -> bool {
        self.x < 0 || self.y < 0
    }
}

/// Advance one generation; `grid` is left as it was
pub fn step(grid: &Grid) -> Grid {
    grid.step()
}

/// Overwrite the cells under `pattern` centered at `pos`.
/// Dead template cells clear whatever was there. The anchor is
/// `pos - dimensions / 2` with floor division, so even-sized patterns
/// sit one cell toward the top-left.
pub fn stamp<'g>(grid: &'g mut Grid, pattern: &Pattern, pos: Placement) -> &'g mut Grid {
    let (pw, ph) = pattern.dimensions();
    let anchor_x = pos.x - (pw / 2) as i64;
    let anchor_y = pos.y - (ph / 2) as i64;

    for (px, py, cell) in pattern.iter_cells() {
        grid.set_wrapped(anchor_x + px as i64, anchor_y + py as i64, cell);
    }
    grid
}

/// Dead grid of `size` with `seed_name` stamped at `pos`.
/// Unknown seeds resolve through the catalog fallback; a position with a
/// negative component stands for the grid center.
pub fn initialize(size: Size, seed_name: &str, pos: Placement, catalog: &SeedCatalog) -> Grid {
    let mut grid = Grid::new(size.width, size.height);
    let seed = catalog.lookup(seed_name);
    let pos = if pos.is_default() { size.center() } else { pos };

    stamp(&mut grid, seed, pos);
    grid
}
