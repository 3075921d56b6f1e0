use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use toroidal_life::{
    GifSink, Mayhem, RunConfig, SeedCatalog, Simulation,
    application::run,
    cli::CliArgs,
    domain::initialize,
    rendering::{DiscardFrames, frame_dimensions},
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();
    let catalog = SeedCatalog::builtin();

    if args.list_seeds {
        for pattern in catalog.iter() {
            let (width, height) = pattern.dimensions();
            println!("{:<20} {:>2}x{:<2} {}", pattern.name, width, height, pattern.description);
        }
        return Ok(());
    }

    run_animation(args.into_config(), &catalog)
}

fn run_animation(config: RunConfig, catalog: &SeedCatalog) -> Result<()> {
    if !catalog.contains(&config.seed) {
        warn!(seed = %config.seed, "unknown seed, falling back to the default");
    }
    let grid = initialize(config.size, &config.seed, config.position, catalog);
    info!(seed = %config.seed, population = grid.population(), "universe initialized");

    let rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut simulation = Simulation::new(grid, config.algorithm, rng);
    if let Some(mayhem) = &config.mayhem {
        let seed = catalog.lookup(&mayhem.seed).clone();
        simulation = simulation.with_mayhem(Mayhem::new(mayhem.interval, seed));
    }

    match config.gif_path() {
        Some(path) => {
            let cell_px = config.cell_pixels();
            // fail before simulating if the frames cannot be encoded
            let (width, height) = frame_dimensions(config.size, cell_px)?;
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let sink = GifSink::new(BufWriter::new(file), config.palette, cell_px, config.interval_ms);
            run(simulation, config.generations, sink)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), width, height, "animation saved");
        }
        None => {
            run(simulation, config.generations, DiscardFrames)?;
        }
    }

    Ok(())
}
