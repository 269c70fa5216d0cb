//! Buffered spawn requests.
//!
//! Producer → queue → consumer pipeline:
//! - the driver writes [`FireRequest`] intent (a direction plus how to fire),
//! - the spawner expands it into fully resolved [`ShotRequest`]s,
//! - the allocator applies them (pool pop + component writes).
//!
//! Producers never touch the pool directly.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FireMode {
    /// Subject to the spawner's minimum inter-fire interval.
    Single,
    /// Bypasses the rate limiter (auto-fire, scripted shots).
    SingleUnlimited,
    /// One request fanned out into `count` shots across `spread_degrees`.
    /// Individual burst shots are never rate-limited.
    Burst { count: u32, spread_degrees: f32 },
}

/// Intent: "fire in this direction". Direction need not be normalized;
/// a degenerate (near-zero) direction falls back to `Vec2::Y`.
#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest {
    pub dir: Vec2,
    pub mode: FireMode,
}

/// A fully resolved shot: where the bullet starts and its velocity.
#[derive(Message, Clone, Copy, Debug)]
pub struct ShotRequest {
    pub pos: Vec2,
    pub vel: Vec2,
}
