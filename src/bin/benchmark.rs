//! Step timings for the serial and parallel algorithms

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::domain::{Algorithm, Grid};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size).randomize(&mut rng, 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
