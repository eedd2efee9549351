//! End-to-end run lifecycle: spend all ammo through the real schedules,
//! land in GameOver exactly once, restart, and come back reset.

mod common;

use bevy::prelude::*;
use laser_arena::common::state::GameState;
use laser_arena::common::tunables::Tunables;
use laser_arena::plugins::shooter::{Score, ShooterState};

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn two_shot_app() -> App {
    let mut app = common::app_headless();
    // Two rounds, no cooldown: the flow under test is ammo exhaustion, not timing.
    app.insert_resource(Tunables {
        max_ammo: 2,
        fire_cooldown: 0.0,
        ..default()
    });
    app.update();
    app
}

#[test]
fn spending_all_ammo_ends_the_run_once() {
    let mut app = two_shot_app();
    let fire_key = app.world().resource::<Tunables>().fire_key;

    // Shot 1.
    common::press_key(&mut app, fire_key);
    app.update();
    assert_eq!(app.world().resource::<ShooterState>().ammo, 1);
    assert_eq!(current_state(&app), GameState::InGame);

    // Shot 2: last round. The transition request lands this frame and is
    // applied at the next state transition point.
    common::press_key(&mut app, fire_key);
    app.update();
    let shooter = app.world().resource::<ShooterState>();
    assert_eq!(shooter.ammo, 0);
    assert!(shooter.out_of_ammo);

    common::release_keys(&mut app);
    app.update();
    assert_eq!(current_state(&app), GameState::GameOver);

    // Idle ticks after the terminal transition never re-trigger anything.
    for _ in 0..5 {
        app.update();
        assert_eq!(current_state(&app), GameState::GameOver);
        assert_eq!(app.world().resource::<ShooterState>().ammo, 0);
    }
}

#[test]
fn restart_resets_the_run_and_firing_works_again() {
    let mut app = two_shot_app();
    let fire_key = app.world().resource::<Tunables>().fire_key;

    // Burn both rounds.
    for _ in 0..2 {
        common::press_key(&mut app, fire_key);
        app.update();
    }
    common::release_keys(&mut app);
    app.update();
    assert_eq!(current_state(&app), GameState::GameOver);

    // Fire key on the game-over screen restarts.
    common::press_key(&mut app, fire_key);
    app.update();
    common::release_keys(&mut app);
    app.update();
    assert_eq!(current_state(&app), GameState::InGame);

    let shooter = app.world().resource::<ShooterState>();
    assert_eq!(shooter.ammo, 2);
    assert!(!shooter.out_of_ammo);
    assert_eq!(shooter.last_fire, None);
    assert_eq!(app.world().resource::<Score>().0, 0);

    // An immediate shot is legal regardless of time since the previous run.
    common::press_key(&mut app, fire_key);
    app.update();
    assert_eq!(app.world().resource::<ShooterState>().ammo, 1);
}
