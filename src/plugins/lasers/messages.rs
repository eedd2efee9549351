//! Buffered spawn requests.
//!
//! Producers create *intent*; the consumer applies it (pool pop + component
//! writes). Keeping the pool behind a single writer localizes its mutation.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnLaserRequest {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scoring payload carried through to the spawned laser, so a later hit
    /// can report the configured score increment.
    pub points: u32,
}
