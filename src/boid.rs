/*
 * Boid Module
 *
 * This module defines the Boid struct and the motion it performs on its own:
 * moving forward along its heading, wrapping around the window edges and
 * turning towards its target heading. Steering decisions that depend on
 * other boids and predators live in the physics module.
 */

use glam::Vec2;
use rand::Rng;

use crate::angle::{forward, normalize_degrees, shortest_arc, shortest_rotation_direction};
use crate::params::BoidConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    // Current heading in degrees, 0 = up, clockwise
    pub rotation: f32,
    pub target_rotation: f32,
    pub color: [u8; 3],
    pub move_speed: f32,
    pub rotation_speed: f32,
}

impl Boid {
    pub fn new(position: Vec2, rotation: f32, color: [u8; 3], config: &BoidConfig) -> Self {
        let rotation = normalize_degrees(rotation);
        Self {
            position,
            rotation,
            target_rotation: rotation,
            color,
            move_speed: config.default_move_speed,
            rotation_speed: config.default_rotation_speed,
        }
    }

    // Random position within bounds, integer heading in [-180, 179], bright-ish color
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, config: &BoidConfig) -> Self {
        let position = Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y));
        let rotation = rng.gen_range(-180..=179) as f32;
        let color = [
            rng.gen_range(50..=255),
            rng.gen_range(50..=255),
            rng.gen_range(50..=255),
        ];

        Self::new(position, rotation, color, config)
    }

    // Move forward along the current heading, then wrap around the window
    pub fn translate(&mut self, dt: f32, bounds: Vec2) {
        self.position += forward(self.rotation) * (self.move_speed * dt);
        self.wrap_edges(bounds);
    }

    // Leaving one side re-enters at the opposite edge, not at the mirrored offset
    pub fn wrap_edges(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 {
            self.position.x = bounds.x;
        } else if self.position.x > bounds.x {
            self.position.x = 0.0;
        }

        if self.position.y < 0.0 {
            self.position.y = bounds.y;
        } else if self.position.y > bounds.y {
            self.position.y = 0.0;
        }
    }

    // Turn towards the target heading along the shorter arc without overshooting it
    pub fn relax_heading(&mut self, dt: f32) {
        self.normalize_headings();

        let direction = shortest_rotation_direction(self.rotation, self.target_rotation);
        let remaining = shortest_arc(self.rotation, self.target_rotation);
        let step = (self.rotation_speed * dt).min(remaining);
        self.rotation += direction * step;

        self.normalize_headings();
    }

    pub fn normalize_headings(&mut self) {
        self.rotation = normalize_degrees(self.rotation);
        self.target_rotation = normalize_degrees(self.target_rotation);
    }

    pub fn set_target_rotation(&mut self, heading: f32) {
        self.target_rotation = normalize_degrees(heading);
    }

    // Random integer jitter in [-jitter, jitter] added to the target heading
    pub fn apply_rotation_jitter<R: Rng + ?Sized>(&mut self, rng: &mut R, jitter: i32) {
        let offset = rng.gen_range(-jitter..=jitter);
        self.set_target_rotation(self.target_rotation + offset as f32);
    }

    // Ramp speeds up towards the escape values as fear grows; never slows down here
    pub fn accelerate_from_fear(&mut self, fear: f32, config: &BoidConfig) {
        let escape_move_speed = (config.default_move_speed
            + config.escape_move_speed * fear)
            .min(config.escape_move_speed);
        self.move_speed = self.move_speed.max(escape_move_speed);

        // The rotation ramp starts from the default move speed, not the default rotation speed
        let escape_rotation_speed = (config.default_move_speed
            + config.escape_rotation_speed * fear)
            .min(config.escape_rotation_speed);
        self.rotation_speed = self.rotation_speed.max(escape_rotation_speed);
    }

    // Linear decay back to the cruise speeds, never below them
    pub fn calm_down(&mut self, dt: f32, config: &BoidConfig) {
        if self.move_speed > config.default_move_speed {
            self.move_speed -= config.escape_move_speed * dt;
        }
        self.move_speed = self.move_speed.max(config.default_move_speed);

        if self.rotation_speed > config.default_rotation_speed {
            self.rotation_speed -= config.escape_rotation_speed * dt;
        }
        self.rotation_speed = self.rotation_speed.max(config.default_rotation_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn boid_at(x: f32, y: f32, rotation: f32) -> Boid {
        Boid::new(Vec2::new(x, y), rotation, [255, 255, 255], &BoidConfig::default())
    }

    #[test]
    fn test_boid_creation() {
        let boid = boid_at(10.0, 20.0, -90.0);
        assert_eq!(boid.position, Vec2::new(10.0, 20.0));
        assert_eq!(boid.rotation, 270.0);
        assert_eq!(boid.target_rotation, 270.0);
        assert_eq!(boid.move_speed, 200.0);
        assert_eq!(boid.rotation_speed, 360.0);
    }

    #[test]
    fn test_translate_moves_up_at_zero_heading() {
        let mut boid = boid_at(100.0, 100.0, 0.0);
        boid.translate(0.5, Vec2::new(800.0, 600.0));
        assert!((boid.position.x - 100.0).abs() < 1e-3);
        assert!((boid.position.y - 0.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_resets_to_opposite_edge() {
        let bounds = Vec2::new(800.0, 600.0);

        let mut boid = boid_at(801.0, 300.0, 0.0);
        boid.wrap_edges(bounds);
        assert_eq!(boid.position.x, 0.0);

        let mut boid = boid_at(-5.0, -1.0, 0.0);
        boid.wrap_edges(bounds);
        assert_eq!(boid.position, bounds);

        let mut boid = boid_at(10.0, 650.0, 0.0);
        boid.wrap_edges(bounds);
        assert_eq!(boid.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_relax_heading_takes_short_arc_through_zero() {
        let mut boid = boid_at(0.0, 0.0, 10.0);
        boid.target_rotation = 350.0;
        boid.relax_heading(0.01);

        // 360 deg/s for 10 ms turns 3.6 degrees counterclockwise
        assert!((boid.rotation - 6.4).abs() < 1e-3);
    }

    #[test]
    fn test_relax_heading_stops_on_target() {
        let mut boid = boid_at(0.0, 0.0, 350.0);
        boid.target_rotation = 5.0;
        boid.relax_heading(1.0);
        assert!((boid.rotation - 5.0).abs() < 1e-3);

        boid.relax_heading(1.0);
        assert!((boid.rotation - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_fear_ramps_speed_up_only() {
        let config = BoidConfig::default();
        let mut boid = boid_at(0.0, 0.0, 0.0);

        boid.accelerate_from_fear(0.5, &config);
        assert_eq!(boid.move_speed, 600.0);
        assert_eq!(boid.rotation_speed, 920.0);

        boid.accelerate_from_fear(0.1, &config);
        assert_eq!(boid.move_speed, 600.0);
        assert_eq!(boid.rotation_speed, 920.0);

        boid.accelerate_from_fear(1.0, &config);
        assert_eq!(boid.move_speed, 800.0);
        assert_eq!(boid.rotation_speed, 1440.0);
    }

    #[test]
    fn test_calm_down_never_undershoots() {
        let config = BoidConfig::default();
        let mut boid = boid_at(0.0, 0.0, 0.0);
        boid.move_speed = 800.0;
        boid.rotation_speed = 1440.0;

        boid.calm_down(0.25, &config);
        assert_eq!(boid.move_speed, 600.0);
        assert_eq!(boid.rotation_speed, 1080.0);

        boid.calm_down(10.0, &config);
        assert_eq!(boid.move_speed, 200.0);
        assert_eq!(boid.rotation_speed, 360.0);
    }

    #[test]
    fn test_random_boid_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Vec2::new(320.0, 240.0);
        let config = BoidConfig::default();

        for _ in 0..200 {
            let boid = Boid::random(&mut rng, bounds, &config);
            assert!(boid.position.x >= 0.0 && boid.position.x < bounds.x);
            assert!(boid.position.y >= 0.0 && boid.position.y < bounds.y);
            assert!(boid.rotation >= 0.0 && boid.rotation < 360.0);
            assert_eq!(boid.rotation.fract(), 0.0);
            assert!(boid.color.iter().all(|&channel| channel >= 50));
        }
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut boid = boid_at(0.0, 0.0, 180.0);

        for _ in 0..100 {
            boid.target_rotation = 180.0;
            boid.apply_rotation_jitter(&mut rng, 45);
            assert!(boid.target_rotation >= 135.0 && boid.target_rotation <= 225.0);
        }

        boid.target_rotation = 90.0;
        boid.apply_rotation_jitter(&mut rng, 0);
        assert_eq!(boid.target_rotation, 90.0);
    }
}
