use rand::Rng;
use tracing::{debug, info};

use crate::domain::{Algorithm, Grid, Pattern, Placement, stamp};
use crate::rendering::{FrameSink, RenderError};

/// Periodic injection of a pattern at a random position
#[derive(Clone, Debug)]
pub struct Mayhem {
    /// Inject after every step whose index is a multiple of this (>= 1)
    pub interval: u64,
    pub seed: Pattern,
}

impl Mayhem {
    pub fn new(interval: u64, seed: Pattern) -> Self {
        Self {
            interval: interval.max(1),
            seed,
        }
    }

    /// Whether the step with this 0-based index gets an injection
    pub const fn fires_at(&self, step_index: u64) -> bool {
        step_index % self.interval == 0
    }
}

/// Simulation orchestrates a run: stepping, mayhem and the random source.
/// This is the application layer that coordinates domain logic.
pub struct Simulation<R> {
    grid: Grid,
    algorithm: Algorithm,
    mayhem: Option<Mayhem>,
    generation: u64,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Start from an already seeded grid
    pub fn new(grid: Grid, algorithm: Algorithm, rng: R) -> Self {
        Self {
            grid,
            algorithm,
            mayhem: None,
            generation: 0,
            rng,
        }
    }

    /// Enable mayhem (builder pattern)
    pub fn with_mayhem(mut self, mayhem: Mayhem) -> Self {
        self.mayhem = Some(mayhem);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations computed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by one generation, then inject mayhem if it is due
    pub fn tick(mut self) -> Self {
        self.grid = self.algorithm.step(&self.grid);

        if let Some(mayhem) = &self.mayhem {
            if mayhem.fires_at(self.generation) {
                let (width, height) = self.grid.dimensions();
                let pos = Placement::new(
                    self.rng.random_range(0..width) as i64,
                    self.rng.random_range(0..height) as i64,
                );
                debug!(
                    generation = self.generation,
                    seed = mayhem.seed.name,
                    x = pos.x,
                    y = pos.y,
                    "mayhem"
                );
                stamp(&mut self.grid, &mayhem.seed, pos);
            }
        }

        self.generation += 1;
        self
    }
}

/// Run `generations` ticks, handing every new grid to `sink`.
/// The starting grid itself is not emitted.
pub fn run<R, S>(mut simulation: Simulation<R>, generations: u64, mut sink: S) -> Result<Simulation<R>, RenderError>
where
    R: Rng,
    S: FrameSink,
{
    let (width, height) = simulation.grid().dimensions();
    info!(
        width,
        height,
        generations,
        algorithm = simulation.algorithm.name(),
        mayhem = simulation.mayhem.is_some(),
        "starting run"
    );

    for _ in 0..generations {
        simulation = simulation.tick();
        debug!(
            generation = simulation.generation(),
            population = simulation.grid().population(),
            "generation"
        );
        sink.push_frame(simulation.grid())?;
    }
    sink.finish()?;

    info!(
        generations = simulation.generation(),
        population = simulation.grid().population(),
        "run complete"
    );
    Ok(simulation)
}
