//! Error types for the flock simulation.
//!
//! The steering update itself cannot fail; the only rejected input is a
//! malformed configuration, caught when a flock is built or resized.

use std::fmt;

/// Reasons a [`BoidConfig`](crate::params::BoidConfig) or world size is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Boid size must be a positive, finite number.
    InvalidSize(f32),
    /// A detection distance factor is zero, negative or not finite.
    InvalidDistanceFactor { name: &'static str, value: f32 },
    /// Detection radii must shrink from cohesion to alignment to separation.
    UnorderedDistances {
        cohesion: f32,
        alignment: f32,
        separation: f32,
    },
    /// A default speed is zero, negative or not finite.
    InvalidSpeed { name: &'static str, value: f32 },
    /// A predator escape speed is lower than the matching default.
    EscapeBelowDefault {
        name: &'static str,
        escape: f32,
        default: f32,
    },
    /// Heading jitter must not be negative.
    NegativeJitter(i32),
    /// Predator radius must be a positive, finite number.
    InvalidPredatorRadius(f32),
    /// World bounds must be positive and finite on both axes.
    InvalidBounds { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize(size) => {
                write!(f, "Boid size must be positive, got {}", size)
            }
            ConfigError::InvalidDistanceFactor { name, value } => {
                write!(f, "{} distance factor must be positive, got {}", name, value)
            }
            ConfigError::UnorderedDistances {
                cohesion,
                alignment,
                separation,
            } => write!(
                f,
                "Detection distances must satisfy cohesion > alignment > separation, got {} / {} / {}",
                cohesion, alignment, separation
            ),
            ConfigError::InvalidSpeed { name, value } => {
                write!(f, "{} must be positive, got {}", name, value)
            }
            ConfigError::EscapeBelowDefault {
                name,
                escape,
                default,
            } => write!(
                f,
                "{} ({}) must not be lower than its default ({})",
                name, escape, default
            ),
            ConfigError::NegativeJitter(jitter) => {
                write!(f, "Heading jitter must not be negative, got {}", jitter)
            }
            ConfigError::InvalidPredatorRadius(radius) => {
                write!(f, "Predator radius must be positive, got {}", radius)
            }
            ConfigError::InvalidBounds { width, height } => {
                write!(f, "World bounds must be positive, got {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
