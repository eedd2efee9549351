//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `laser_arena::game::configure_headless` installs the gameplay plugins.
//! - `ButtonInput<KeyCode>` is initialized manually since there is no input
//!   plugin; tests drive key presses through it.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Core ECS + states. AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    app.init_resource::<ButtonInput<KeyCode>>();

    laser_arena::game::configure_headless(&mut app);
    app
}

/// Produce a fresh edge-triggered press of `key` for the next update.
#[allow(dead_code)]
pub fn press_key(app: &mut App, key: KeyCode) {
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.reset_all();
    keys.press(key);
}

/// Release everything so the next update sees no input edges.
#[allow(dead_code)]
pub fn release_keys(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
}
