//! Shooter plugin: ammo + cooldown gated firing, and the end-of-run transition.
//!
//! # Design
//! The gate is a pure predicate over `(now, last_fire, cooldown, ammo)`; the
//! firing system is the only writer of `ShooterState`. Data flow:
//!
//! ```text
//! Update (in InGame):
//!   fire_on_input
//!     - reads: ButtonInput<KeyCode>, Time, Tunables, Player Transform
//!     - writes: SpawnLaserRequest message (intent only; never touches the pool)
//!     - mutates: ShooterState (ammo, last_fire, out_of_ammo)
//!     - on last shot: NextState<GameState>::set(GameOver), exactly once
//! ```
//!
//! Two things are deliberately *not* errors:
//! - a suppressed shot (cooldown pending or ammo spent) is normal control flow;
//! - a dropped spawn (no player, pool dry) is logged and skipped, but ammo and
//!   cooldown bookkeeping still advance, so mashing the trigger with a broken
//!   spawner cannot produce free shots later.
//!
//! The GameOver request is fire-and-forget: this module does not verify the
//! transition happened. Idempotence is double-guarded by `out_of_ammo` and by
//! the `in_state(InGame)` run condition.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::lasers::messages::SpawnLaserRequest;
use crate::plugins::player::Player;

/// Vertical offset from the ship centre to the laser muzzle.
const MUZZLE_OFFSET: f32 = 18.0;

/// Points accumulator the HUD displays and laser hits report into.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

/// Shot bookkeeping for the current run.
///
/// `last_fire: None` is the epoch value: the very first shot of a run is always
/// cooldown-ready, no matter how much wall time passed since the previous run.
#[derive(Resource, Debug, Clone)]
pub struct ShooterState {
    pub ammo: u32,
    pub last_fire: Option<f32>,
    pub out_of_ammo: bool,
}

impl ShooterState {
    pub fn new(max_ammo: u32) -> Self {
        Self {
            ammo: max_ammo,
            last_fire: None,
            out_of_ammo: false,
        }
    }

    /// Pure gate: true iff ammo remains and the cooldown has elapsed.
    ///
    /// Negative configured cooldowns are treated as zero.
    #[inline]
    pub fn can_fire(&self, now: f32, cooldown: f32) -> bool {
        if self.ammo == 0 {
            return false;
        }
        match self.last_fire {
            None => true,
            Some(last) => now >= last + cooldown.max(0.0),
        }
    }

    /// Book a successful shot: one round spent, cooldown restarted.
    ///
    /// Callers must have checked `can_fire` first; ammo never goes negative
    /// because firing is gated on `ammo > 0`.
    #[inline]
    pub fn record_fire(&mut self, now: f32) {
        debug_assert!(self.ammo > 0);
        self.ammo -= 1;
        self.last_fire = Some(now);
    }

    /// Restore a fresh run: full ammo, cooldown epoch, terminal flag cleared.
    pub fn reset(&mut self, max_ammo: u32) {
        self.ammo = max_ammo;
        self.last_fire = None;
        self.out_of_ammo = false;
    }
}

pub fn plugin(app: &mut App) {
    let max_ammo = app.world().resource::<Tunables>().max_ammo;
    app.insert_resource(ShooterState::new(max_ammo));

    app.add_systems(OnEnter(GameState::InGame), reset_run);
    app.add_systems(Update, fire_on_input.run_if(in_state(GameState::InGame)));
}

/// Fresh ammo and score on every (re)entry into InGame, so the shooter is
/// reusable across runs without reconstruction.
fn reset_run(tunables: Res<Tunables>, mut shooter: ResMut<ShooterState>, mut score: ResMut<Score>) {
    shooter.reset(tunables.max_ammo);
    score.0 = 0;
}

/// Producer: on an edge-triggered press of the fire key, emit one laser spawn
/// request and advance the ammo/cooldown bookkeeping.
///
/// `ButtonInput` is optional so the system also runs under headless test
/// configurations that skip the input plugin.
pub fn fire_on_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut shooter: ResMut<ShooterState>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<SpawnLaserRequest>,
    mut next: ResMut<NextState<GameState>>,
) {
    if shooter.out_of_ammo {
        return;
    }

    let Some(keys) = keys else {
        return;
    };
    if !keys.just_pressed(tunables.fire_key) {
        return;
    }

    let now = time.elapsed_secs();
    if !shooter.can_fire(now, tunables.fire_cooldown) {
        return;
    }

    // Spawn intent first. A missing ship is non-fatal: the shot is still spent.
    match q_player.single() {
        Ok(tf) => {
            let muzzle = tf.translation.truncate() + Vec2::Y * MUZZLE_OFFSET;
            writer.write(SpawnLaserRequest {
                pos: muzzle,
                vel: Vec2::Y * tunables.laser_speed,
                points: tunables.points_per_hit,
            });
        }
        Err(e) => {
            debug!("No single Player to fire from: {e:?}");
        }
    }

    shooter.record_fire(now);

    if shooter.ammo == 0 {
        shooter.out_of_ammo = true;
        info!("Out of ammo, ending run");
        next.set(GameState::GameOver);
    }
}

#[cfg(test)]
mod tests;
