//! Algorithm enum for selecting the step implementation.

use super::Grid;

/// Available evolution algorithms. Both produce identical grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    #[default]
    Serial,
    /// Rows evaluated in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Compute the next generation of `grid`
    pub fn step(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => grid.step(),
            Algorithm::Parallel => grid.step_parallel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_all_algorithms_agree() {
        let grid = Grid::from_rows(&[
            [0u8, 1, 0, 0],
            [0, 0, 1, 0],
            [1, 1, 1, 0],
            [0, 0, 0, 0],
        ]);
        let expected = grid.step();
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.step(&grid), expected, "{}", algorithm.name());
        }
    }
}
