//! One-dimensional damped spring

use serde::{Deserialize, Serialize};

/// A damped spring pulling a position back toward a neutral point.
///
/// Stepped once per call to [`Spring::simulate`]; there is no time input, so
/// the host is expected to call it at a fixed rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spring {
    pub spring_constant: f32,
    pub damping: f32,
    pub velocity: f32,
    pub acceleration: f32,
    position: f32,
    neutral_position: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            spring_constant: 0.015,
            damping: 0.07,
            velocity: 0.0,
            acceleration: 0.0,
            position: 0.0,
            neutral_position: 0.0,
        }
    }
}

impl Spring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spring resting at `neutral_position` instead of zero
    pub fn with_neutral_position(neutral_position: f32) -> Self {
        Self {
            position: neutral_position,
            neutral_position,
            ..Self::default()
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn neutral_position(&self) -> f32 {
        self.neutral_position
    }

    /// Advance the spring one step and return the new position.
    pub fn simulate(&mut self) -> f32 {
        let force = self.spring_constant * (self.position - self.neutral_position)
            + self.velocity * self.damping;
        self.acceleration = -force;
        self.position += self.velocity;
        self.velocity += self.acceleration;

        self.position
    }

    /// Teleport the spring to `position` and give it an initial velocity of `force`.
    pub fn apply_force_starting_at_position(&mut self, force: f32, position: f32) {
        self.acceleration = 0.0;
        self.position = position;
        self.velocity = force;
    }

    pub fn apply_additive_force(&mut self, force: f32) {
        self.velocity += force;
    }
}
