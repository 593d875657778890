//! Physics domain: tuning constants for character locomotion.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Horizontal speed while a move intent is held, px/s.
    pub move_speed: f32,
    /// Upward speed of a ground jump, px/s.
    pub jump_speed: f32,
    /// Terminal falling speed, px/s.
    pub max_fall_speed: f32,
    /// Fraction of `jump_speed` granted by the air jump.
    pub double_jump_factor: f32,
    pub starting_hp: u32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 1600.0,
            move_speed: 220.0,
            jump_speed: 560.0,
            max_fall_speed: 1000.0,
            double_jump_factor: 0.9,
            starting_hp: 3,
        }
    }
}

impl PhysicsTuning {
    pub fn double_jump_speed(&self) -> f32 {
        self.jump_speed * self.double_jump_factor
    }

    /// Apex height of a ground jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }

    /// Height gained by a ground jump followed by an air jump fired at the apex.
    pub fn max_reachable_height(&self) -> f32 {
        let air = self.double_jump_speed();
        self.single_jump_height() + air * air / (2.0 * self.gravity)
    }
}
