/*
 * Flock Module
 *
 * The Flock owns every boid, the static predators, the world bounds, the
 * configuration and its own random source. Each frame it snapshots the boids,
 * computes all next states from that snapshot and swaps the new buffer in, so
 * every boid reacts to where the others were at the start of the frame.
 */

use glam::Vec2;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boid::Boid;
use crate::error::ConfigError;
use crate::params::BoidConfig;
use crate::physics::{update_boid, FrameContext, Steering};
use crate::predator::Predator;

// Discrete user commands coming from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Randomize,
    AddBoids(usize),
    RemoveBoids(usize),
    ToggleDebug,
    Quit,
}

// How many boids followed each rule during the last step
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    pub fleeing: usize,
    pub wandering: usize,
    pub separating: usize,
    pub aligning: usize,
    pub cohering: usize,
}

impl StepStats {
    fn record(&mut self, steering: Steering) {
        match steering {
            Steering::FleePredators => self.fleeing += 1,
            Steering::Wander => self.wandering += 1,
            Steering::Separation => self.separating += 1,
            Steering::Alignment => self.aligning += 1,
            Steering::Cohesion => self.cohering += 1,
        }
    }
}

pub struct Flock {
    boids: Vec<Boid>,
    predators: Vec<Predator>,
    bounds: Vec2,
    config: BoidConfig,
    rng: StdRng,
    last_stats: StepStats,
}

impl Flock {
    // Seeded flocks are reproducible; without a seed the OS entropy source is used
    pub fn new(
        config: BoidConfig,
        bounds: Vec2,
        count: usize,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, bounds, count, rng)
    }

    pub fn with_rng(
        config: BoidConfig,
        bounds: Vec2,
        count: usize,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_bounds(bounds)?;

        let mut flock = Self {
            boids: Vec::with_capacity(count),
            predators: Vec::new(),
            bounds,
            config,
            rng,
            last_stats: StepStats::default(),
        };
        flock.add_boids(count);

        info!(
            "Created flock of {} boids in {:.0}x{:.0} world",
            count, bounds.x, bounds.y
        );
        Ok(flock)
    }

    // Build a flock from explicit boids, mostly for tests and scripted scenes
    pub fn from_boids(
        config: BoidConfig,
        bounds: Vec2,
        boids: Vec<Boid>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut flock = Self::with_rng(config, bounds, 0, StdRng::seed_from_u64(seed))?;
        flock.boids = boids;
        Ok(flock)
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn config(&self) -> &BoidConfig {
        &self.config
    }

    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    // Re-randomize every boid in place, keeping the flock size
    pub fn randomize(&mut self) {
        let count = self.boids.len();
        self.boids.clear();
        self.add_boids(count);
        info!("Randomized {} boids", count);
    }

    pub fn add_boids(&mut self, count: usize) {
        let (bounds, config) = (self.bounds, self.config);
        let rng = &mut self.rng;
        self.boids
            .extend((0..count).map(|_| Boid::random(rng, bounds, &config)));
        debug!("Added {} boids, flock size {}", count, self.boids.len());
    }

    // Drops boids from the front of the flock. A flock with more than one
    // boid always keeps at least one.
    pub fn remove_boids(&mut self, count: usize) {
        if self.boids.len() <= 1 {
            return;
        }

        let removed = count.min(self.boids.len() - 1);
        self.boids.drain(..removed);
        debug!("Removed {} boids, flock size {}", removed, self.boids.len());
    }

    pub fn add_predator(&mut self, predator: Predator) {
        self.predators.push(predator);
    }

    pub fn clear_predators(&mut self) {
        self.predators.clear();
    }

    pub fn resize(&mut self, bounds: Vec2) -> Result<(), ConfigError> {
        validate_bounds(bounds)?;
        self.bounds = bounds;
        info!("World resized to {:.0}x{:.0}", bounds.x, bounds.y);
        Ok(())
    }

    // Returns true when the command was handled by the flock
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Randomize => self.randomize(),
            Command::AddBoids(count) => self.add_boids(count),
            Command::RemoveBoids(count) => self.remove_boids(count),
            Command::ToggleDebug | Command::Quit => return false,
        }
        true
    }

    // The static predators plus the pointer predator for this frame only
    pub fn frame_predators(&self, pointer: Option<Vec2>) -> Vec<Predator> {
        let mut predators = self.predators.clone();
        if let Some(position) = pointer {
            predators.push(Predator::new(position, self.config.pointer_predator_radius));
        }
        predators
    }

    // Advance every boid by `dt` seconds
    pub fn step(&mut self, dt: f32, pointer: Option<Vec2>) {
        let predators = self.frame_predators(pointer);
        let frame = FrameContext {
            predators: &predators,
            dt,
            bounds: self.bounds,
            config: &self.config,
        };

        let snapshot = &self.boids;
        let rng = &mut self.rng;
        let mut stats = StepStats::default();
        let next: Vec<Boid> = (0..snapshot.len())
            .map(|index| {
                let (boid, steering) = update_boid(index, snapshot, &frame, rng);
                stats.record(steering);
                boid
            })
            .collect();

        trace!(
            "Stepped {} boids with {} predators, {} fleeing",
            next.len(),
            predators.len(),
            stats.fleeing
        );
        self.boids = next;
        self.last_stats = stats;
    }
}

fn validate_bounds(bounds: Vec2) -> Result<(), ConfigError> {
    if bounds.x.is_finite() && bounds.y.is_finite() && bounds.x > 0.0 && bounds.y > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds {
            width: bounds.x,
            height: bounds.y,
        })
    }
}
