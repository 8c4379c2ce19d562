/*
 * Physics Module
 *
 * The per-boid steering update. Every call reads the flock as it was at the
 * start of the frame and returns the boid's next state; nothing in the
 * snapshot is touched, so the order in which boids are processed does not
 * matter.
 *
 * Order of operations for one boid:
 * 1. Move forward and wrap around the window
 * 2. Turn towards the target heading
 * 3. Flee from nearby predators (skips everything below)
 * 4. Separation, then alignment, then cohesion; first rule that applies wins
 */

use glam::Vec2;
use rand::Rng;

use crate::angle::{centroid, circular_mean_degrees, heading_away, heading_towards};
use crate::boid::Boid;
use crate::params::BoidConfig;
use crate::predator::Predator;

// Everything a boid can see during one frame besides the other boids
pub struct FrameContext<'a> {
    pub predators: &'a [Predator],
    pub dt: f32,
    pub bounds: Vec2,
    pub config: &'a BoidConfig,
}

// Which rule decided the boid's target heading this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    FleePredators,
    Wander,
    Separation,
    Alignment,
    Cohesion,
}

// Compute the next state of `boids[index]` from the pre-frame snapshot
pub fn update_boid<R: Rng + ?Sized>(
    index: usize,
    boids: &[Boid],
    frame: &FrameContext,
    rng: &mut R,
) -> (Boid, Steering) {
    let mut boid = boids[index].clone();
    let config = frame.config;

    boid.translate(frame.dt, frame.bounds);
    boid.relax_heading(frame.dt);

    if flee_predators(&mut boid, frame.predators, config) {
        return (boid, Steering::FleePredators);
    }
    boid.calm_down(frame.dt, config);

    let steering = flock(&mut boid, index, boids, config, rng);
    (boid, steering)
}

// Returns true when at least one predator is close enough to override flocking
fn flee_predators(boid: &mut Boid, predators: &[Predator], config: &BoidConfig) -> bool {
    let detection_distance = config.predator_detection_distance();
    let local_predators: Vec<&Predator> = predators
        .iter()
        .filter(|predator| predator.is_within_reach(boid.position, detection_distance))
        .collect();

    if local_predators.is_empty() {
        return false;
    }

    let predators_center = centroid(local_predators.iter().map(|predator| predator.position));
    boid.set_target_rotation(heading_away(boid.position, predators_center));

    // 1.0 when the predators sit on top of the boid, 0.0 at the detection edge
    let fear = 1.0 - (boid.position.distance(predators_center) / detection_distance).min(1.0);
    boid.accelerate_from_fear(fear, config);

    true
}

// Indices from `candidates` that lie strictly within `distance` of `position`.
// The boid itself is always kept so every set has at least one member.
fn flockmates_within(
    position: Vec2,
    index: usize,
    boids: &[Boid],
    candidates: &[usize],
    distance: f32,
) -> Vec<usize> {
    candidates
        .iter()
        .copied()
        .filter(|&other| other == index || position.distance(boids[other].position) < distance)
        .collect()
}

fn center_of_mass(boids: &[Boid], members: &[usize]) -> Vec2 {
    centroid(members.iter().map(|&i| boids[i].position))
}

fn flock<R: Rng + ?Sized>(
    boid: &mut Boid,
    index: usize,
    boids: &[Boid],
    config: &BoidConfig,
    rng: &mut R,
) -> Steering {
    let everyone: Vec<usize> = (0..boids.len()).collect();

    let cohesion_flockmates =
        flockmates_within(boid.position, index, boids, &everyone, config.cohesion_distance());

    // Alone: wander a little and keep going
    if cohesion_flockmates.len() == 1 {
        boid.apply_rotation_jitter(rng, config.jitter_degrees);
        return Steering::Wander;
    }

    let alignment_flockmates = flockmates_within(
        boid.position,
        index,
        boids,
        &cohesion_flockmates,
        config.alignment_distance(),
    );
    let separation_flockmates = flockmates_within(
        boid.position,
        index,
        boids,
        &alignment_flockmates,
        config.separation_distance(),
    );

    if separation_flockmates.len() > 1 {
        let center = center_of_mass(boids, &separation_flockmates);
        boid.set_target_rotation(heading_away(boid.position, center));
        Steering::Separation
    } else if alignment_flockmates.len() > 1 {
        let average_heading =
            circular_mean_degrees(alignment_flockmates.iter().map(|&i| boids[i].rotation));
        boid.set_target_rotation(average_heading);
        boid.apply_rotation_jitter(rng, config.jitter_degrees);
        Steering::Alignment
    } else {
        let center = center_of_mass(boids, &cohesion_flockmates);
        boid.set_target_rotation(heading_towards(boid.position, center));
        Steering::Cohesion
    }
}
