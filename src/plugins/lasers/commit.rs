//! Return commit: recycle lasers back into the pool.
//!
//! This system is the owner of the *Inactive invariants*:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)
//!
//! Centralizing these writes here prevents inconsistencies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{LaserEntity, LaserState, PooledLaser};
use super::pool::{inactive_laser_layers, LaserPool};

pub fn return_to_pool_commit(
    mut pool: ResMut<LaserPool>,
    mut q: Query<
        (
            Entity,
            &mut LaserState,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledLaser>,
    >,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != LaserState::PendingReturn {
            continue;
        }

        *state = LaserState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_laser_layers();

        pool.push_free(LaserEntity(e));
    }
}
