//! Lighting plugin (Firefly) (render-only).
//!
//! A warm muzzle glow that tracks the player ship.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct MuzzleGlow;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, follow_player_glow);
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("MuzzleGlow"),
        MuzzleGlow,
        PointLight2d {
            color: Color::srgb(0.75, 1.0, 0.8),
            range: 320.0,
            ..default()
        },
        Transform::from_xyz(0.0, -260.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_glow(
    q_player: Query<&Transform, (With<Player>, Without<MuzzleGlow>)>,
    mut q_light: Query<&mut Transform, (With<MuzzleGlow>, Without<Player>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}
