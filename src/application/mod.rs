mod config;
mod simulation;

pub use config::{MayhemConfig, RunConfig};
pub use simulation::{Mayhem, Simulation, run};
