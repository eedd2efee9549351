//! HUD: score + ammo readouts, and the game-over screen.
//!
//! Readouts are world-space `Text2d` entities so the project stays asset-free
//! and headless-test friendly. Sync systems locate the single designated
//! readout each frame; a missing readout is the one soft failure this crate
//! has: log an error once, keep playing with the display disabled.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::shooter::{Score, ShooterState};

#[derive(Component)]
pub struct ScoreReadout;

#[derive(Component)]
pub struct AmmoReadout;

#[derive(Component)]
struct GameOverScreen;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud);
    app.add_systems(
        Update,
        (sync_score_readout, sync_ammo_readout).run_if(in_state(GameState::InGame)),
    );

    app.add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen);
    app.add_systems(
        Update,
        restart_on_fire_key.run_if(in_state(GameState::GameOver)),
    );
}

fn spawn_hud(mut commands: Commands) {
    let font = TextFont {
        font_size: 26.0,
        ..default()
    };

    commands.spawn((
        Name::new("ScoreReadout"),
        ScoreReadout,
        Text2d::new("Score 0"),
        font.clone(),
        TextColor(Color::srgb(0.9, 0.9, 0.95)),
        Transform::from_xyz(-480.0, 390.0, 5.0),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        Name::new("AmmoReadout"),
        AmmoReadout,
        Text2d::new("Ammo -"),
        font,
        TextColor(Color::srgb(0.9, 0.9, 0.95)),
        Transform::from_xyz(480.0, 390.0, 5.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn sync_score_readout(
    score: Res<Score>,
    mut q: Query<&mut Text2d, With<ScoreReadout>>,
    mut warned: Local<bool>,
) {
    let Ok(mut text) = q.single_mut() else {
        if !*warned {
            error!("No score readout entity found; score display disabled");
            *warned = true;
        }
        return;
    };
    *warned = false;

    if score.is_changed() {
        text.0 = format!("Score {}", score.0);
    }
}

fn sync_ammo_readout(
    shooter: Res<ShooterState>,
    mut q: Query<&mut Text2d, With<AmmoReadout>>,
    mut warned: Local<bool>,
) {
    let Ok(mut text) = q.single_mut() else {
        if !*warned {
            error!("No ammo readout entity found; ammo display disabled");
            *warned = true;
        }
        return;
    };
    *warned = false;

    if shooter.is_changed() {
        text.0 = format!("Ammo {}", shooter.ammo);
    }
}

fn spawn_game_over_screen(mut commands: Commands, score: Res<Score>) {
    commands.spawn((
        Name::new("GameOverTitle"),
        GameOverScreen,
        Text2d::new("OUT OF AMMO"),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.4, 0.35)),
        Transform::from_xyz(0.0, 60.0, 5.0),
        DespawnOnExit(GameState::GameOver),
    ));

    commands.spawn((
        Name::new("GameOverSummary"),
        GameOverScreen,
        Text2d::new(format!("Final score {}\nPress fire to restart", score.0)),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.95)),
        Transform::from_xyz(0.0, -40.0, 5.0),
        DespawnOnExit(GameState::GameOver),
    ));
}

/// The only return edge out of GameOver: an explicit restart input.
fn restart_on_fire_key(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    tunables: Res<Tunables>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(tunables.fire_key) {
        next.set(GameState::InGame);
    }
}
