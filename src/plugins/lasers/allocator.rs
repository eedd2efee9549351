//! Spawn consumer: activate lasers from the pool.
//!
//! # Fail-fast invariants
//! - The pool free list contains only valid pooled laser entities.
//! - Therefore, a popped entity must match the laser query.
//!
//! A violation means the pool was corrupted; we `expect()` and crash loudly
//! rather than branch around it in the hot loop.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{Laser, LaserEntity, LaserState, PooledLaser};
use super::messages::SpawnLaserRequest;
use super::pool::{active_laser_layers, LaserPool};

pub fn allocate_lasers_from_pool(
    mut pool: ResMut<LaserPool>,
    mut reader: MessageReader<SpawnLaserRequest>,
    mut q: Query<
        (
            &mut LaserState,
            &mut Laser,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledLaser>,
    >,
) {
    for req in reader.read() {
        let Some(LaserEntity(e)) = pool.pop_free() else {
            // Capacity decision, not a correctness failure. The shot was
            // already booked by the producer; only the visual is dropped.
            debug!("Laser pool dry, dropping spawn request");
            continue;
        };

        let (mut state, mut laser, mut tf, mut vel, mut vis, mut layers) = q
            .get_mut(e)
            .expect("LaserPool contained an entity missing pooled laser components");

        *state = LaserState::Active;
        laser.reset_for_fire(req.points);
        tf.translation = req.pos.extend(2.0);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_laser_layers();
    }
}
