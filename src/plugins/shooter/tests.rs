#![cfg(test)]

use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::lasers::messages::SpawnLaserRequest;
use crate::plugins::player::Player;

use super::{fire_on_input, reset_run, Score, ShooterState};

// -----------------------------------------------------------------------------
// Pure gate tests
// -----------------------------------------------------------------------------

#[test]
fn cannot_fire_before_cooldown_elapses_regardless_of_ammo() {
    let mut s = ShooterState::new(100);
    s.record_fire(1.0);

    for now in [1.0, 1.1, 1.49] {
        assert!(!s.can_fire(now, 0.5), "now={now} should be gated");
    }
    assert!(s.can_fire(1.5, 0.5));
    assert!(s.can_fire(100.0, 0.5));
}

#[test]
fn cannot_fire_with_zero_ammo_regardless_of_time() {
    let s = ShooterState {
        ammo: 0,
        last_fire: Some(0.0),
        out_of_ammo: true,
    };
    for now in [0.0, 1.0, 1e6] {
        assert!(!s.can_fire(now, 0.5));
    }
}

#[test]
fn first_shot_is_always_cooldown_ready() {
    let s = ShooterState::new(1);
    // No prior shot: ready at t=0 and after any amount of elapsed time.
    assert!(s.can_fire(0.0, 10.0));
    assert!(s.can_fire(1e9, 10.0));
}

#[test]
fn negative_cooldown_is_treated_as_zero() {
    let mut s = ShooterState::new(2);
    s.record_fire(5.0);
    assert!(s.can_fire(5.0, -1.0));
}

#[test]
fn record_fire_spends_one_round_and_stamps_time() {
    let mut s = ShooterState::new(3);
    s.record_fire(2.5);
    assert_eq!(s.ammo, 2);
    assert_eq!(s.last_fire, Some(2.5));
}

#[test]
fn reset_restores_ammo_and_clears_terminal_flag() {
    let mut s = ShooterState::new(2);
    s.record_fire(1.0);
    s.record_fire(2.0);
    s.out_of_ammo = true;

    s.reset(2);

    assert_eq!(s.ammo, 2);
    assert!(!s.out_of_ammo);
    // Epoch restored: an immediate shot is legal no matter how stale the run.
    assert!(s.can_fire(0.0, 1000.0));
}

/// Walks the reference timeline: two rounds, 0.5s cooldown.
#[test]
fn two_round_timeline_fires_suppresses_fires_then_stays_dry() {
    let mut s = ShooterState::new(2);
    let cd = 0.5;

    assert!(s.can_fire(0.0, cd));
    s.record_fire(0.0);
    assert_eq!(s.ammo, 1);

    // Cooldown still pending.
    assert!(!s.can_fire(0.2, cd));

    assert!(s.can_fire(0.6, cd));
    s.record_fire(0.6);
    assert_eq!(s.ammo, 0);

    // Dry: time alone never re-enables the gate.
    assert!(!s.can_fire(1.0, cd));
    assert!(!s.can_fire(1e6, cd));
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

fn game_time(elapsed: f32) -> Time {
    let mut t = Time::default();
    t.advance_by(Duration::from_secs_f32(elapsed));
    t
}

fn press_fire(world: &mut World, key: KeyCode) {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(key);
    world.insert_resource(keys);
}

fn shooter_world(max_ammo: u32, cooldown: f32) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables {
        max_ammo,
        fire_cooldown: cooldown,
        ..default()
    });
    world.insert_resource(ShooterState::new(max_ammo));
    world.insert_resource(game_time(0.0));
    world.init_resource::<Messages<SpawnLaserRequest>>();
    world.init_resource::<NextState<GameState>>();
    world
}

fn pending_requests(world: &World) -> usize {
    world.resource::<Messages<SpawnLaserRequest>>().len()
}

#[test]
fn fire_writes_request_and_spends_ammo() {
    let mut world = shooter_world(3, 0.5);
    world.spawn((Player, Transform::from_xyz(0.0, -260.0, 1.0)));
    press_fire(&mut world, KeyCode::Space);

    run_system_once(&mut world, fire_on_input);

    assert_eq!(pending_requests(&world), 1);
    let s = world.resource::<ShooterState>();
    assert_eq!(s.ammo, 2);
    assert_eq!(s.last_fire, Some(0.0));
    assert!(!s.out_of_ammo);
    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Unchanged
    ));
}

#[test]
fn unpressed_key_fires_nothing() {
    let mut world = shooter_world(3, 0.5);
    world.spawn((Player, Transform::default()));
    world.insert_resource(ButtonInput::<KeyCode>::default());

    run_system_once(&mut world, fire_on_input);

    assert_eq!(pending_requests(&world), 0);
    assert_eq!(world.resource::<ShooterState>().ammo, 3);
}

#[test]
fn press_during_cooldown_is_suppressed() {
    let mut world = shooter_world(3, 0.5);
    world.spawn((Player, Transform::default()));
    press_fire(&mut world, KeyCode::Space);
    run_system_once(&mut world, fire_on_input);

    // Second press at t=0.2: inside the cooldown window.
    world.insert_resource(game_time(0.2));
    press_fire(&mut world, KeyCode::Space);
    run_system_once(&mut world, fire_on_input);

    assert_eq!(pending_requests(&world), 1);
    assert_eq!(world.resource::<ShooterState>().ammo, 2);
}

#[test]
fn last_shot_requests_game_over_exactly_once() {
    let mut world = shooter_world(1, 0.0);
    world.spawn((Player, Transform::default()));
    press_fire(&mut world, KeyCode::Space);

    run_system_once(&mut world, fire_on_input);

    let s = world.resource::<ShooterState>();
    assert_eq!(s.ammo, 0);
    assert!(s.out_of_ammo);
    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::GameOver)
    ));

    // Clear the pending transition, keep pressing: nothing re-triggers.
    *world.resource_mut::<NextState<GameState>>() = NextState::Unchanged;
    for _ in 0..3 {
        press_fire(&mut world, KeyCode::Space);
        run_system_once(&mut world, fire_on_input);
    }

    assert_eq!(pending_requests(&world), 1);
    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Unchanged
    ));
}

#[test]
fn missing_player_skips_spawn_but_still_spends_the_shot() {
    let mut world = shooter_world(2, 0.0);
    press_fire(&mut world, KeyCode::Space);

    run_system_once(&mut world, fire_on_input);

    assert_eq!(pending_requests(&world), 0);
    let s = world.resource::<ShooterState>();
    assert_eq!(s.ammo, 1);
    assert_eq!(s.last_fire, Some(0.0));
}

#[test]
fn reset_run_restores_shooter_and_zeroes_score() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        max_ammo: 4,
        ..default()
    });
    world.insert_resource(ShooterState {
        ammo: 0,
        last_fire: Some(9.0),
        out_of_ammo: true,
    });
    world.insert_resource(Score(17));

    run_system_once(&mut world, reset_run);

    let s = world.resource::<ShooterState>();
    assert_eq!(s.ammo, 4);
    assert_eq!(s.last_fire, None);
    assert!(!s.out_of_ammo);
    assert_eq!(*world.resource::<Score>(), Score(0));
}
