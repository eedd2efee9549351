//! Lasers plugin: message-based producer → consumer spawning + data-driven pooling.
//!
//! # Data flow
//! ```text
//! Update schedule (variable dt)
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ (A) Producer: shooter::fire_on_input (lives in the shooter      │
//! │     plugin) writes SpawnLaserRequest messages. Producers never  │
//! │     borrow the pool; they only enqueue intent.                  │
//! │                                                                 │
//! │ (B) Consumer: allocate_lasers_from_pool                         │
//! │     - reads: SpawnLaserRequest messages                         │
//! │     - mutates: LaserPool free list + laser components           │
//! └─────────────────────────────────────────────────────────────────┘
//!                 │
//!                 v
//! FixedUpdate / FixedPostUpdate (fixed dt)
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ (C) tick_flight: expire lasers that never hit anything          │
//! │ (D) Avian emits CollisionStart messages                         │
//! │ (E) process_laser_collisions: wall -> return; target -> score   │
//! │     + damage + return                                           │
//! │ (F) return_to_pool_commit: owner of the Inactive invariants     │
//! └─────────────────────────────────────────────────────────────────┘
//!
//! Feedback loop: commit pushes LaserEntity back into LaserPool.free,
//! the allocator pops it on the next request.
//! ```
//!
//! The pool being dry is a capacity decision, not an error: the request is
//! dropped and the shooter's bookkeeping stands. Invariant violations inside
//! the pipeline (a free-list entry missing its pooled components) fail fast
//! with `expect()` instead of branching in the hot loop.

pub mod components;
pub mod messages;

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod pool;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::shooter;

pub struct LasersPlugin;

/// Maintain spawn request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_spawn_messages(mut msgs: ResMut<Messages<messages::SpawnLaserRequest>>) {
    msgs.update();
}

impl Plugin for LasersPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(pool::LaserPool::new(32))
            .add_systems(Startup, pool::init_laser_pool);

        // Message storage for spawn requests.
        app.init_resource::<Messages<messages::SpawnLaserRequest>>();
        app.add_systems(PostUpdate, update_spawn_messages);

        // A restart must not inherit in-flight lasers from the previous run.
        app.add_systems(OnEnter(GameState::InGame), recall_active_lasers);

        // Update-phase pipeline: producer (shooter) -> consumer (allocator).
        app.add_systems(
            Update,
            allocator::allocate_lasers_from_pool
                .after(shooter::fire_on_input)
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed pipeline: flight budget, collisions, then return commit.
        app.add_systems(FixedUpdate, tick_flight.run_if(in_state(GameState::InGame)));

        app.add_systems(
            FixedPostUpdate,
            collision::process_laser_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            commit::return_to_pool_commit
                .after(collision::process_laser_collisions)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

/// Expire active lasers whose flight budget ran out.
fn tick_flight(
    time: Res<Time>,
    mut q: Query<(&mut components::Laser, &mut components::LaserState), With<components::PooledLaser>>,
) {
    let dt = time.delta_secs();
    for (mut laser, mut state) in &mut q {
        if *state != components::LaserState::Active {
            continue;
        }
        laser.flight_secs_left -= dt;
        if laser.flight_secs_left <= 0.0 {
            *state = components::LaserState::PendingReturn;
        }
    }
}

/// Mark every non-inactive laser for return; the commit system recycles them.
fn recall_active_lasers(
    mut q: Query<&mut components::LaserState, With<components::PooledLaser>>,
) {
    for mut state in &mut q {
        if *state == components::LaserState::Active {
            *state = components::LaserState::PendingReturn;
        }
    }
}
