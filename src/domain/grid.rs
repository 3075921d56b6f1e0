use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid holds one generation of the automaton on a torus.
/// Storage is row-major: `height` rows of `width` cells.
/// Evolution never touches `self`; each step builds a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from rows of 0/1 values.
    /// Width is the longest row; shorter rows are padded with dead cells.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                grid.set(x, y, Cell::from_value(value));
            }
        }
        grid
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Map signed coordinates onto the torus
    fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Get cell at any signed position, wrapping around both axes
    pub fn get_wrapped(&self, x: i64, y: i64) -> Cell {
        let (x, y) = self.wrap(x, y);
        self.cells[self.get_index(x, y)]
    }

    /// Set cell at any signed position, wrapping around both axes
    pub fn set_wrapped(&mut self, x: i64, y: i64, cell: Cell) {
        let (x, y) = self.wrap(x, y);
        let idx = self.get_index(x, y);
        self.cells[idx] = cell;
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| self.get_wrapped(x + dx, y + dy).value())
            .sum()
    }

    fn next_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.live_neighbors(x, y))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same grid as [`Grid::step`].
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| (0..self.width).map(move |x| self.next_cell(x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fill the grid at random, each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(mut self, rng: &mut R, density: f64) -> Self {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        self
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(move |(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }

    /// Positions of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = Grid::from_rows(&[vec![1u8], vec![0, 0, 1]]);
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn test_wrapped_access() {
        let mut grid = Grid::new(5, 4);
        grid.set_wrapped(-1, -1, Cell::Alive);
        assert_eq!(grid.get(4, 3), Some(Cell::Alive));
        assert_eq!(grid.get_wrapped(9, 7), Cell::Alive);
    }

    #[test]
    fn test_corner_neighbors_wrap_both_axes() {
        let mut grid = Grid::new(5, 4);
        grid.set(0, 0, Cell::Alive);
        grid.set(4, 3, Cell::Alive);
        assert_eq!(grid.live_neighbors(0, 0), 1);
        assert_eq!(grid.live_neighbors(4, 3), 1);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Grid::from_rows(&[
            [0u8, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        let vertical = Grid::from_rows(&[
            [0u8, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert_eq!(horizontal.step(), vertical);
        assert_eq!(vertical.step(), horizontal);
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let grid = Grid::from_rows(&[[1u8, 1, 0], [0, 1, 0], [0, 0, 0]]);
        let before = grid.clone();
        let first = grid.step();
        let second = grid.step();
        assert_eq!(grid, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(37, 23).randomize(&mut rng, 0.4);
        assert_eq!(grid.step(), grid.step_parallel());
    }
}
