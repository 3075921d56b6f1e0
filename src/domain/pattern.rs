use super::Cell;

/// Represents a seed pattern that can be stamped onto the grid.
/// Dead cells are part of the template: stamping writes them too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Create a pattern from rows of 0/1 values.
    /// Shorter rows are padded with dead cells up to the longest row.
    pub fn new(name: &'static str, description: &'static str, rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut cells = vec![Cell::Dead; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                cells[y * width + x] = Cell::from_value(value);
            }
        }
        Self { name, description, width, height, cells }
    }

    /// Pattern dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell at pattern-local position
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Every template cell with its pattern-local position, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Number of live cells in the template
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_follow_rows() {
        let pattern = Pattern::new("test", "", &[&[0, 0, 1], &[1, 0, 1]]);
        assert_eq!(pattern.dimensions(), (3, 2));
        assert_eq!(pattern.get(2, 0), Some(Cell::Alive));
        assert_eq!(pattern.get(1, 1), Some(Cell::Dead));
        assert_eq!(pattern.get(3, 0), None);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let pattern = Pattern::new("ragged", "", &[&[1], &[1, 1, 1]]);
        assert_eq!(pattern.dimensions(), (3, 2));
        assert_eq!(pattern.get(2, 0), Some(Cell::Dead));
        assert_eq!(pattern.population(), 4);
    }

    #[test]
    fn test_iter_cells_includes_dead_cells() {
        let pattern = Pattern::new("blank", "", &[&[0, 0], &[0, 0]]);
        let cells: Vec<_> = pattern.iter_cells().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[3], (1, 1, Cell::Dead));
    }
}
