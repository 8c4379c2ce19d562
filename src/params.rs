/*
 * Simulation Parameters Module
 *
 * BoidConfig holds the fixed tuning of every boid: body size, cruise and
 * escape speeds, and the detection distance factors. It is validated once
 * when a flock is built so the steering update never sees nonsense values.
 *
 * SimulationParams holds the host-side settings that the control panel edits
 * while the simulation runs, together with change detection for them.
 */

use crate::error::ConfigError;
use crate::predator::DEFAULT_PREDATOR_RADIUS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidConfig {
    pub size: f32,
    pub default_move_speed: f32,
    pub escape_move_speed: f32,
    pub default_rotation_speed: f32,
    pub escape_rotation_speed: f32,
    pub separation_distance_factor: f32,
    pub alignment_distance_factor: f32,
    pub cohesion_distance_factor: f32,
    pub jitter_degrees: i32,
    pub pointer_predator_radius: f32,
}

impl Default for BoidConfig {
    fn default() -> Self {
        let default_move_speed = 200.0;
        let default_rotation_speed = 360.0;

        Self {
            size: 10.0,
            default_move_speed,
            escape_move_speed: 4.0 * default_move_speed,
            default_rotation_speed,
            escape_rotation_speed: 4.0 * default_rotation_speed,
            separation_distance_factor: 2.0,
            alignment_distance_factor: 7.0,
            cohesion_distance_factor: 20.0,
            jitter_degrees: 45,
            pointer_predator_radius: DEFAULT_PREDATOR_RADIUS,
        }
    }
}

impl BoidConfig {
    pub fn cohesion_distance(&self) -> f32 {
        self.size * self.cohesion_distance_factor
    }

    pub fn alignment_distance(&self) -> f32 {
        self.size * self.alignment_distance_factor
    }

    pub fn separation_distance(&self) -> f32 {
        self.size * self.separation_distance_factor
    }

    // Predators are noticed at the alignment distance
    pub fn predator_detection_distance(&self) -> f32 {
        self.alignment_distance()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.size) {
            return Err(ConfigError::InvalidSize(self.size));
        }

        for (name, value) in [
            ("Separation", self.separation_distance_factor),
            ("Alignment", self.alignment_distance_factor),
            ("Cohesion", self.cohesion_distance_factor),
        ] {
            if !is_positive(value) {
                return Err(ConfigError::InvalidDistanceFactor { name, value });
            }
        }

        let (cohesion, alignment, separation) = (
            self.cohesion_distance(),
            self.alignment_distance(),
            self.separation_distance(),
        );
        if !(cohesion > alignment && alignment > separation) {
            return Err(ConfigError::UnorderedDistances {
                cohesion,
                alignment,
                separation,
            });
        }

        for (name, value) in [
            ("Default move speed", self.default_move_speed),
            ("Default rotation speed", self.default_rotation_speed),
        ] {
            if !is_positive(value) {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }

        for (name, escape, default) in [
            ("Escape move speed", self.escape_move_speed, self.default_move_speed),
            (
                "Escape rotation speed",
                self.escape_rotation_speed,
                self.default_rotation_speed,
            ),
        ] {
            if !escape.is_finite() || escape < default {
                return Err(ConfigError::EscapeBelowDefault {
                    name,
                    escape,
                    default,
                });
            }
        }

        if self.jitter_degrees < 0 {
            return Err(ConfigError::NegativeJitter(self.jitter_degrees));
        }

        if !is_positive(self.pointer_predator_radius) {
            return Err(ConfigError::InvalidPredatorRadius(self.pointer_predator_radius));
        }

        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

// Settings adjusted through the control panel
pub struct SimulationParams {
    pub batch_size: usize,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(PartialEq)]
struct ParamSnapshot {
    batch_size: usize,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            batch_size: 10,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn new(batch_size: usize, show_debug: bool) -> Self {
        Self {
            batch_size: batch_size.clamp(1, *Self::get_batch_size_range().end()),
            show_debug,
            ..Self::default()
        }
    }

    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // True when a panel-editable value differs from the last snapshot
    pub fn detect_changes(&self) -> bool {
        match &self.previous_values {
            Some(prev) => *prev != self.snapshot(),
            None => false,
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            batch_size: self.batch_size,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    pub fn get_batch_size_range() -> std::ops::RangeInclusive<usize> {
        1..=500
    }
}
