//! Global state machine.
//!
//! Two states, one directed edge each way:
//! - `InGame -> GameOver` happens exactly once per run, when the last shot is spent.
//! - `GameOver -> InGame` only via the explicit restart input.
//!
//! Re-entering `InGame` is the reset point: ammo, score, targets and HUD are all
//! rebuilt by `OnEnter(GameState::InGame)` systems.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    GameOver,
}
