use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::{Laser, LaserEntity, LaserState, PooledLaser};

#[derive(Resource, Debug)]
pub struct LaserPool {
    free: Vec<LaserEntity>,
    pub capacity: usize,
}

impl LaserPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<LaserEntity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: LaserEntity) {
        self.free.push(e);
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

#[inline]
pub fn active_laser_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerLaser, [Layer::World, Layer::Target])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_laser_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerLaser, [] as [Layer; 0])
}

/// Pre-spawn pooled lasers (inactive).
///
/// Physics components stay attached for the entity's whole lifetime; inactive
/// lasers never collide (and never emit collision events) because their
/// filters are empty.
pub fn init_laser_pool(mut commands: Commands, mut pool: ResMut<LaserPool>) {
    let cap = pool.capacity;
    pool.free.clear();
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Laser(Pooled)"),
                PooledLaser,
                LaserState::Inactive,
                Laser {
                    points: 0,
                    flight_secs_left: 0.0,
                },
                Sprite {
                    color: Color::srgb(0.4, 1.0, 0.45),
                    custom_size: Some(Vec2::new(4.0, 16.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                RigidBody::Dynamic,
                Collider::rectangle(4.0, 16.0),
                inactive_laser_layers(),
                LinearVelocity(Vec2::ZERO),
                // Always on; inactive lasers can't collide anyway.
                CollisionEventsEnabled,
            ))
            .id();

        pool.free.push(LaserEntity(e));
    }
}
