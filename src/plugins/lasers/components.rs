use bevy::prelude::*;

/// Marker: entity belongs to the laser pool for its whole lifetime.
#[derive(Component)]
pub struct PooledLaser;

/// Newtype for entities known to carry the pooled laser components.
///
/// Only the pool hands these out, so holders may `expect()` the components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaserEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaserState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone)]
pub struct Laser {
    /// Score credited when this laser hits a target.
    pub points: u32,
    /// Remaining flight time before the laser expires unhit.
    pub flight_secs_left: f32,
}

impl Laser {
    pub const DEFAULT_FLIGHT_SECS: f32 = 1.2;

    #[inline]
    pub fn reset_for_fire(&mut self, points: u32) {
        self.points = points;
        self.flight_secs_left = Self::DEFAULT_FLIGHT_SECS;
    }
}
