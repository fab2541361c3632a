//! Quadbench - Compare quadtree radius search against a linear scan.

use index::scan::linear_search;
use index::{Config, QuadTree};
use landmark::{Cell, Landmark, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Uniform random position inside `cell`.
fn random_position(rng: &mut StdRng, cell: &Cell) -> Position {
    let min = cell.min();
    let max = cell.max();
    Position::new(rng.random_range(min.x..max.x), rng.random_range(min.y..max.y))
}

fn generate_landmarks(rng: &mut StdRng, cell: &Cell, count: u32) -> Vec<Landmark> {
    (0..count)
        .map(|id| Landmark {
            pos: random_position(rng, cell),
            id,
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Quadbench v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    config.validate()?;
    let cell = Cell::new(config.tree.center(), config.tree.size);
    info!(
        "size: {} resolution: {} n_landmarks: {}",
        config.tree.size, config.tree.resolution, config.bench.landmarks
    );

    let mut rng = StdRng::seed_from_u64(config.bench.seed);
    let count = u32::try_from(config.bench.landmarks)?;
    let landmarks = generate_landmarks(&mut rng, &cell, count);
    info!("created {} landmarks", landmarks.len());

    let vehicle = random_position(&mut rng, &cell);
    let radius = config.bench.search_radius;
    info!("searching at x: {} y: {} radius: {}", vehicle.x, vehicle.y, radius);

    // Brute force search
    let start = Instant::now();
    let brute_force = linear_search(&landmarks, vehicle, radius);
    let elapsed_brute_force = start.elapsed();
    info!("search landmarks brute force, elapsed time {:?}", elapsed_brute_force);
    for lm in &brute_force {
        info!("  {}", lm);
    }

    // Build the quadtree
    let mut tree = QuadTree::with_options(
        config.tree.center(),
        config.tree.size,
        config.tree.resolution,
        config.tree.options(),
    );
    let start = Instant::now();
    for lm in &landmarks {
        tree.insert(*lm)?;
    }
    info!("quadtree inserting landmarks, elapsed time {:?}", start.elapsed());

    let stats = tree.stats();
    info!(
        "quadtree nodes: {} (internal: {}, leaves: {}) depth: {}",
        stats.nodes, stats.internal_nodes, stats.leaf_nodes, stats.max_depth
    );

    // Quadtree search
    let start = Instant::now();
    let found = tree.search(vehicle, radius);
    let elapsed_quadtree = start.elapsed();
    info!("quadtree searching, elapsed time {:?}", elapsed_quadtree);
    for lm in &found {
        info!("  {}", lm);
    }

    let missing = brute_force
        .iter()
        .filter(|lm| !found.iter().any(|f| f.id == lm.id))
        .count();
    if missing > 0 {
        warn!("quadtree missed {} landmarks found by brute force", missing);
    }
    if found.len() > brute_force.len() {
        info!(
            "quadtree returned {} landmarks beyond the search radius",
            found.len() - brute_force.len()
        );
    }

    let speed_up = elapsed_brute_force.as_secs_f64() / elapsed_quadtree.as_secs_f64().max(f64::EPSILON);
    info!("quadtree speed up: {:.2}", speed_up);

    Ok(())
}
