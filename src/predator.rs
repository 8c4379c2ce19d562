/*
 * Predator Module
 *
 * A predator is a repulsive point with a radius. Boids that come within
 * their alignment distance of the predator's edge stop flocking and flee.
 */

use glam::Vec2;

pub const DEFAULT_PREDATOR_RADIUS: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predator {
    pub position: Vec2,
    pub radius: f32,
}

impl Predator {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    // Predator with the default radius, as used for the pointer-tracked predator
    pub fn at(position: Vec2) -> Self {
        Self::new(position, DEFAULT_PREDATOR_RADIUS)
    }

    // Whether a point is inside this predator's detection reach for a given distance
    pub fn is_within_reach(&self, point: Vec2, detection_distance: f32) -> bool {
        self.position.distance(point) < detection_distance + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_includes_radius() {
        let predator = Predator::new(Vec2::new(0.0, 0.0), 20.0);
        assert!(predator.is_within_reach(Vec2::new(89.0, 0.0), 70.0));
        assert!(!predator.is_within_reach(Vec2::new(90.0, 0.0), 70.0));
    }

    #[test]
    fn test_default_radius() {
        let predator = Predator::at(Vec2::new(5.0, 5.0));
        assert_eq!(predator.radius, DEFAULT_PREDATOR_RADIUS);
    }
}
