/*
 * Predator Boids - Module Definitions
 *
 * The simulation core (angle, boid, predator, params, physics, flock, error)
 * builds without any graphics dependency. The desktop host (app, input,
 * renderer, ui, debug) is compiled with the `gui` feature.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use error::ConfigError;
pub use flock::{Command, Flock, StepStats};
pub use params::{BoidConfig, SimulationParams};
pub use physics::{update_boid, FrameContext, Steering};
pub use predator::Predator;

// Define modules
pub mod angle;
pub mod boid;
pub mod error;
pub mod flock;
pub mod params;
pub mod physics;
pub mod predator;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod debug;
#[cfg(feature = "gui")]
pub mod input;
#[cfg(feature = "gui")]
pub mod renderer;
#[cfg(feature = "gui")]
pub mod ui;

// Window size used when nothing else is requested
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
