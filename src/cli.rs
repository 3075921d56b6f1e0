//! Command-line surface of the `toroidal_life` binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

use crate::application::{MayhemConfig, RunConfig};
use crate::domain::{Algorithm, DEFAULT_SEED, Placement, Size};
use crate::rendering::Palette;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("expected format X,Y, got {0:?}")]
    Format(String),

    #[error("invalid number {0:?}")]
    Number(String),

    #[error("universe dimensions must be positive, got {width},{height}")]
    ZeroSize { width: usize, height: usize },
}

/// Conway's Game of Life on a torus, rendered to an animated GIF.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Size of the universe as WIDTH,HEIGHT.
    #[arg(long, value_name = "X,Y", default_value = "100,100")]
    pub universe_size: UniverseSize,

    /// Starting seed; unknown names fall back to "infinite".
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Center of the starting seed as X,Y. Defaults to the universe center.
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub position: Option<PositionArg>,

    /// Image quality in dots per inch of the 8-inch frame.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub quality: u32,

    /// Delay between frames in milliseconds.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = 100)]
    pub interval: u32,

    /// Number of generations to render.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    pub n_generations: u64,

    /// Add a little mayhem: periodically drop a pattern at a random spot.
    #[arg(long)]
    pub mayhem: bool,

    /// Generations between mayhem injections.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub mayhem_interval: u64,

    /// Pattern injected by mayhem.
    #[arg(long, value_name = "NAME", default_value = "glider")]
    pub mayhem_seed: String,

    /// Seed for the mayhem random source, for reproducible animations.
    #[arg(long, value_name = "N")]
    pub rng_seed: Option<u64>,

    /// Color scheme.
    #[arg(long, value_enum, default_value_t = Palette::Inferno)]
    pub cmap: Palette,

    /// Run the simulation without writing the animation.
    #[arg(long)]
    pub no_save: bool,

    /// Output file name; ".gif" is appended.
    #[arg(long, default_value = "life")]
    pub filename: PathBuf,

    /// Step implementation.
    #[arg(long, value_enum, default_value_t = Algorithm::Serial)]
    pub algorithm: Algorithm,

    /// Print the available seeds and exit.
    #[arg(long)]
    pub list_seeds: bool,
}

impl CliArgs {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            size: self.universe_size.into(),
            seed: self.seed,
            position: self
                .position
                .map_or(Placement::new(-1, -1), Into::into),
            generations: self.n_generations,
            algorithm: self.algorithm,
            mayhem: self.mayhem.then(|| MayhemConfig {
                interval: self.mayhem_interval,
                seed: self.mayhem_seed,
            }),
            rng_seed: self.rng_seed,
            palette: self.cmap,
            quality: self.quality,
            interval_ms: self.interval,
            output: (!self.no_save).then_some(self.filename),
        }
    }
}

fn parse_pair<T: FromStr>(value: &str) -> Result<(T, T), ArgError> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| ArgError::Format(value.to_string()))?;
    let number = |part: &str| {
        part.trim()
            .parse::<T>()
            .map_err(|_| ArgError::Number(part.trim().to_string()))
    };
    Ok((number(x)?, number(y)?))
}

/// Universe dimensions parsed from a WIDTH,HEIGHT argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniverseSize(pub Size);

impl FromStr for UniverseSize {
    type Err = ArgError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_pair::<usize>(value)?;
        if width == 0 || height == 0 {
            return Err(ArgError::ZeroSize { width, height });
        }
        Ok(Self(Size::new(width, height)))
    }
}

impl From<UniverseSize> for Size {
    fn from(size: UniverseSize) -> Self {
        size.0
    }
}

/// Seed center parsed from an X,Y argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionArg(pub Placement);

impl FromStr for PositionArg {
    type Err = ArgError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (x, y) = parse_pair::<i64>(value)?;
        Ok(Self(Placement::new(x, y)))
    }
}

impl From<PositionArg> for Placement {
    fn from(position: PositionArg) -> Self {
        position.0
    }
}
