//! Tunable gameplay constants.
//!
//! One immutable record, inserted once by the core plugin. Systems read it,
//! nothing mutates it at runtime.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub laser_speed: f32,
    /// Points credited to the score when a laser hits a target.
    pub points_per_hit: u32,
    /// Minimum seconds between two successful shots.
    pub fire_cooldown: f32,
    /// Shots per run; hitting zero ends the run.
    pub max_ammo: u32,
    pub fire_key: KeyCode,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            laser_speed: 900.0,
            points_per_hit: 1,
            fire_cooldown: 0.5,
            max_ammo: 5,
            fire_key: KeyCode::Space,
        }
    }
}
