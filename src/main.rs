/*
 * Boid Flocking Simulation
 *
 * Boids wander a window and steer by three rules: separation from crowding
 * neighbours, alignment with their headings and cohesion towards their
 * centre. Predators override all of that, and the mouse cursor is one.
 */

use clap::Parser;
use predator_boids::app::{self, LaunchOptions};

fn main() -> anyhow::Result<()> {
    let options = LaunchOptions::parse();

    let default_level = if options.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    log::info!(
        "Starting with {} boids, seed {:?}",
        options.boids,
        options.seed
    );

    app::run(options)
}
