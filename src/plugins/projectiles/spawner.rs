//! Spawner: rate limiting + burst spread.
//!
//! [`Spawner`] is the gate between "the driver wants a shot" and "a shot
//! request exists": it enforces the minimum inter-fire interval and fans a
//! burst out across its angular spread. Pure data + pure math; the actual
//! pool mutation happens in the allocator.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

use super::messages::{FireMode, FireRequest, ShotRequest};

/// Distance from the spawn origin to the muzzle, in world units.
const MUZZLE_OFFSET: f32 = 18.0;

#[derive(Resource, Debug)]
pub struct Spawner {
    min_interval: f32,
    last_fire: Option<f32>,
}

impl Spawner {
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            last_fire: None,
        }
    }

    /// Rate-limit gate. Rejects (no side effect) while the interval since the
    /// last accepted fire has not elapsed; records the timestamp on accept.
    pub fn try_fire(&mut self, now: f32) -> bool {
        if let Some(last) = self.last_fire {
            if now - last < self.min_interval {
                return false;
            }
        }
        self.last_fire = Some(now);
        true
    }

    pub fn min_interval(&self) -> f32 {
        self.min_interval
    }

    /// Forget the last accepted fire, re-arming the gate.
    pub fn reset(&mut self) {
        self.last_fire = None;
    }
}

/// Rotate `v` by `degrees`, counter-clockwise positive.
#[inline]
pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Directions of a burst: `count` shots spread evenly across
/// `spread_degrees`, centered on `dir`.
///
/// `count <= 1` degenerates to just `dir`. For larger counts the step is
/// `spread / (count - 1)` and shot `i` is rotated by `-spread/2 + i * step`.
pub fn burst_directions(
    dir: Vec2,
    count: u32,
    spread_degrees: f32,
) -> impl Iterator<Item = Vec2> {
    let count = count.max(1);
    let (start, step) = if count > 1 {
        (-spread_degrees * 0.5, spread_degrees / (count - 1) as f32)
    } else {
        (0.0, 0.0)
    };

    (0..count).map(move |i| rotate(dir, start + step * i as f32))
}

/// Consumer: turn fire intent into per-shot requests.
///
/// Only `FireMode::Single` passes through the rate-limit gate; burst shots
/// and unlimited singles bypass it. Shots originate at the player (muzzle
/// offset along the shot direction); with no player present the origin is
/// the world origin, which keeps headless tests independent of the player
/// plugin.
pub fn expand_fire_requests(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut spawner: ResMut<Spawner>,
    q_origin: Query<&Transform, With<Player>>,
    mut reader: MessageReader<FireRequest>,
    mut shots: MessageWriter<ShotRequest>,
) {
    let now = time.elapsed_secs();
    let origin = q_origin
        .single()
        .map(|tf| tf.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    let mut emit = |dir: Vec2| {
        shots.write(ShotRequest {
            pos: origin + dir * MUZZLE_OFFSET,
            vel: dir * tunables.bullet_speed,
        });
    };

    for req in reader.read() {
        let dir = if req.dir.length_squared() > 1e-4 {
            req.dir.normalize()
        } else {
            Vec2::Y
        };

        match req.mode {
            FireMode::Single => {
                if spawner.try_fire(now) {
                    emit(dir);
                }
            }
            FireMode::SingleUnlimited => emit(dir),
            FireMode::Burst {
                count,
                spread_degrees,
            } => {
                for shot_dir in burst_directions(dir, count, spread_degrees) {
                    emit(shot_dir);
                }
            }
        }
    }
}
