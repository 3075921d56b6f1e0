mod cell;
mod grid;
mod pattern;
mod algorithm;
pub mod catalog;
pub mod engine;

pub use cell::Cell;
pub use grid::Grid;
pub use pattern::Pattern;
pub use catalog::{SeedCatalog, DEFAULT_SEED, presets};
pub use algorithm::Algorithm;
pub use engine::{Size, Placement, initialize, step, stamp};
