//! Resolve laser collisions: walls absorb, targets score.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::plugins::shooter::Score;
use crate::plugins::targets::HitPoints;

use super::components::{Laser, LaserState, PooledLaser};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

pub fn process_laser_collisions(
    mut started: MessageReader<CollisionStart>,
    mut score: ResMut<Score>,
    // Fast "is this a pooled laser?" check
    q_is_laser: Query<(), With<PooledLaser>>,
    mut q_lasers: Query<(&Laser, &mut LaserState), With<PooledLaser>>,
    // Read layers from collider entities
    q_layers: Query<&CollisionLayers>,
    mut q_hitpoints: Query<&mut HitPoints>,
    // Per-frame dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        // Identify the laser side without get_mut probing
        let l1 = q_is_laser.contains(t1.collider);
        let l2 = q_is_laser.contains(t2.collider);
        if !(l1 ^ l2) {
            continue; // must be exactly one laser
        }
        let (laser_side, other_side) = if l1 { (t1, t2) } else { (t2, t1) };

        // Deduplicate per laser collider
        if !seen.insert(laser_side.collider) {
            continue;
        }

        let Ok(other_layers) = q_layers.get(other_side.collider) else {
            continue;
        };

        let Ok((laser, mut state)) = q_lasers.get_mut(laser_side.collider) else {
            continue;
        };

        // Ignore if somehow not active (shouldn't happen with empty filters, but safe)
        if *state != LaserState::Active {
            continue;
        }

        // WORLD: walls absorb the laser, no score.
        if is_in_layer(other_layers, Layer::World) {
            *state = LaserState::PendingReturn;
            continue;
        }

        // TARGET: report the carried score increment, damage, absorb.
        if is_in_layer(other_layers, Layer::Target) {
            let target_entity = other_side.gameplay_owner();

            score.0 += laser.points;

            if let Ok(mut hp) = q_hitpoints.get_mut(target_entity) {
                hp.hp = hp.hp.saturating_sub(1);
            }

            *state = LaserState::PendingReturn;
            continue;
        }
    }
}
