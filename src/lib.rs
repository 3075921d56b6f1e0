// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Run orchestration
pub mod application;

// Infrastructure layer - Rendering, command line
pub mod rendering;
pub mod cli;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, Placement, SeedCatalog, Size, Algorithm, initialize, step, stamp};
pub use application::{Mayhem, RunConfig, Simulation};
pub use rendering::{FrameSink, GifSink, Palette};
