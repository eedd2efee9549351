//! World plugin: arena walls + an asset-free floor.
//!
//! Walls are static colliders; lasers that reach one are recycled by the
//! laser collision system rather than bouncing.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;

const TILE: i32 = 64;
const HALF_W: i32 = TILE * 10;
const HALF_H: i32 = TILE * 7;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_arena, spawn_floor));
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let thickness = 30.0;

    let wall_layers = CollisionLayers::new(
        Layer::World,
        [Layer::Player, Layer::Target, Layer::PlayerLaser],
    );

    let w = HALF_W as f32;
    let h = HALF_H as f32;
    let walls: [(&str, Vec3, Vec2); 4] = [
        (
            "WallTop",
            Vec3::new(0.0, h + thickness * 0.5, 0.0),
            Vec2::new(w * 2.0 + thickness * 2.0, thickness),
        ),
        (
            "WallBottom",
            Vec3::new(0.0, -h - thickness * 0.5, 0.0),
            Vec2::new(w * 2.0 + thickness * 2.0, thickness),
        ),
        (
            "WallLeft",
            Vec3::new(-w - thickness * 0.5, 0.0, 0.0),
            Vec2::new(thickness, h * 2.0),
        ),
        (
            "WallRight",
            Vec3::new(w + thickness * 0.5, 0.0, 0.0),
            Vec2::new(thickness, h * 2.0),
        ),
    ];

    for (name, pos, size) in walls {
        commands.spawn((
            Name::new(name),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Spawn a simple checkered floor from solid-color sprites so the project
/// carries no assets.
fn spawn_floor(mut commands: Commands) {
    (-(HALF_H / TILE)..=HALF_H / TILE)
        .flat_map(|y| (-(HALF_W / TILE)..=HALF_W / TILE).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let world_pos = Vec3::new(x as f32 * TILE as f32, y as f32 * TILE as f32, 0.0);
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(TILE as f32)),
                Transform::from_translation(world_pos),
                DespawnOnExit(GameState::InGame),
            ));
        });
}
