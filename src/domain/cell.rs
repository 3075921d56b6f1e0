/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric state, 0 for dead and 1 for alive
    pub const fn value(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Any nonzero value is alive
    pub const fn from_value(value: u8) -> Self {
        if value == 0 { Cell::Dead } else { Cell::Alive }
    }

    /// Pure function to compute the next state from the live neighbor count:
    /// 1. Live cell with fewer than 2 or more than 3 neighbors dies
    /// 2. Any cell with exactly 3 neighbors is alive
    /// 3. Otherwise the state is unchanged
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, n) if n < 2 || n > 3 => Cell::Dead,
            (_, 3) => Cell::Alive,
            (current, _) => current,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
