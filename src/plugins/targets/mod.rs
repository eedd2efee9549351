//! Targets plugin: static shootable targets with a short death state.
//!
//! Lifecycle: `Alive -> Dying{timer} -> Dead`, explicit so flag contradictions
//! cannot happen. The laser collision system (elsewhere) decrements
//! `HitPoints`; this module reads that fact and transitions state.
//!
//! Structural changes are kept out of the fixed step: dying targets are marked
//! `PendingDespawn` and swept later in PostUpdate. Dying targets stop
//! interacting immediately via emptied collision filters, not by removing
//! their collider.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::time::Fixed;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::lasers::collision::process_laser_collisions;

#[derive(Component)]
pub struct Target;

#[derive(Component, Debug, Clone)]
pub struct HitPoints {
    pub hp: u32,
}

/// Target lifecycle state machine.
#[derive(Component, Debug, Clone)]
pub enum TargetLifeState {
    Alive,
    Dying { timer: Timer },
    Dead,
}

/// Marker: target should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_targets);

    // Death trigger runs after collision resolution so it sees updated HitPoints.
    app.add_systems(
        FixedPostUpdate,
        (
            target_death_trigger.after(process_laser_collisions),
            target_death_progress.after(target_death_trigger),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_targets.run_if(in_state(GameState::InGame)),
    );
}

/// Collision layers for a target that should no longer interact with anything.
#[inline]
fn non_interacting_target_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Target, [] as [Layer; 0])
}

/// Spawn a row of stationary targets. Asset-free: plain sprites and simple
/// colliders.
fn spawn_targets(mut commands: Commands) {
    let target_layers =
        CollisionLayers::new(Layer::Target, [Layer::World, Layer::Player, Layer::PlayerLaser]);

    let initial_hp: u32 = 2;

    for (i, x) in [-240.0, -120.0, 0.0, 120.0, 240.0].into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("Target{i}")),
            Target,
            HitPoints { hp: initial_hp },
            TargetLifeState::Alive,
            Sprite {
                color: Color::srgb(0.9, 0.25, 0.25),
                custom_size: Some(Vec2::splat(32.0)),
                ..default()
            },
            Transform::from_xyz(x, 200.0, 1.0),
            RigidBody::Static,
            Collider::circle(16.0),
            target_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Transition Alive -> Dying when hit points drop to 0.
///
/// Does not despawn; it only transitions state and enforces the dying
/// invariant (no further collision interaction).
fn target_death_trigger(
    mut q: Query<
        (
            &HitPoints,
            &mut TargetLifeState,
            &mut CollisionLayers,
            &mut Sprite,
        ),
        (With<Target>, Without<PendingDespawn>),
    >,
) {
    for (hp, mut life, mut layers, mut sprite) in &mut q {
        if !matches!(*life, TargetLifeState::Alive) {
            continue;
        }

        if hp.hp == 0 {
            *life = TargetLifeState::Dying {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
            };
            *layers = non_interacting_target_layers();
            sprite.color = Color::srgba(0.8, 0.8, 0.8, 1.0);
        }
    }
}

/// Animate the Dying state (shrink + fade) and mark PendingDespawn once done.
fn target_death_progress(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut q: Query<
        (Entity, &mut TargetLifeState, &mut Sprite, &mut Transform),
        (With<Target>, Without<PendingDespawn>),
    >,
) {
    for (e, mut life, mut sprite, mut tf) in &mut q {
        let TargetLifeState::Dying { timer } = &mut *life else {
            continue;
        };

        timer.tick(time.delta());

        let dur = timer.duration().as_secs_f32().max(0.0001);
        let t = (timer.elapsed_secs() / dur).clamp(0.0, 1.0);

        tf.scale = Vec3::splat(1.0 - t);

        let mut c = sprite.color.to_srgba();
        c.alpha = 1.0 - t;
        sprite.color = c.into();

        if timer.is_finished() {
            *life = TargetLifeState::Dead;
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

/// Despawn targets marked for removal. Centralized so structural changes stay
/// predictable.
fn despawn_marked_targets(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
