//! Producer: the input driver that decides *when* to fire.
//!
//! Controls:
//! - Left mouse: rate-limited shot toward the cursor.
//! - Space: rate-limited shot straight up.
//! - B: burst along `Vec2::Y`.
//! - F: toggle auto-fire; while on, shots sweep in a circle at 90°/s,
//!   bypassing the rate limiter.
//!
//! This system intentionally does **not** access the pool; it only writes
//! `FireRequest` intent. Input/camera/window are optional so the whole thing
//! is a no-op in headless test apps.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::player::Player;

use super::messages::{FireMode, FireRequest};
use super::spawner::rotate;

/// Degrees the auto-fire direction sweeps per second.
const AUTO_FIRE_SWEEP_DEG_PER_SEC: f32 = 90.0;

#[derive(Resource, Debug, Default)]
pub struct AutoFire {
    pub enabled: bool,
    next_shot: f32,
}

pub fn request_bullets(
    time: Res<Time>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_player: Query<&Transform, With<Player>>,
    tunables: Res<Tunables>,
    mut auto: ResMut<AutoFire>,
    mut writer: MessageWriter<FireRequest>,
) {
    let now = time.elapsed_secs();

    if let Some(keys) = keys.as_deref() {
        if keys.just_pressed(KeyCode::Space) {
            writer.write(FireRequest {
                dir: Vec2::Y,
                mode: FireMode::Single,
            });
        }

        if keys.just_pressed(KeyCode::KeyB) {
            writer.write(FireRequest {
                dir: Vec2::Y,
                mode: FireMode::Burst {
                    count: tunables.burst_count,
                    spread_degrees: tunables.burst_spread_degrees,
                },
            });
        }

        if keys.just_pressed(KeyCode::KeyF) {
            auto.enabled = !auto.enabled;
            auto.next_shot = now;
            debug!("auto fire: {}", if auto.enabled { "on" } else { "off" });
        }
    }

    if let Some(buttons) = buttons.as_deref() {
        if buttons.just_pressed(MouseButton::Left) {
            if let Some(dir) = aim_from_cursor(&windows, &q_camera, &q_player) {
                writer.write(FireRequest {
                    dir,
                    mode: FireMode::Single,
                });
            }
        }
    }

    if auto.enabled && now >= auto.next_shot {
        let dir = rotate(Vec2::X, now * AUTO_FIRE_SWEEP_DEG_PER_SEC);
        writer.write(FireRequest {
            dir,
            mode: FireMode::SingleUnlimited,
        });
        auto.next_shot = now + tunables.auto_fire_interval;
    }
}

/// Cursor position → world space → direction from the player.
///
/// Any missing collaborator (window, cursor, camera, player) yields `None`;
/// real-world input is allowed to be absent, so these are branches, not
/// invariant violations.
fn aim_from_cursor(
    windows: &Query<&Window>,
    q_camera: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_player: &Query<&Transform, With<Player>>,
) -> Option<Vec2> {
    let player_tf = match q_player.single() {
        Ok(tf) => tf,
        Err(e) => {
            debug!("no single Player Transform: {e:?}");
            return None;
        }
    };
    let origin = player_tf.translation.truncate();

    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => {
            debug!("no single Window: {e:?}");
            return None;
        }
    };

    let cursor = window.cursor_position()?;

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => {
            debug!("no single MainCamera: {e:?}");
            return None;
        }
    };

    let world_cursor = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => {
            debug!("viewport_to_world_2d failed: {e:?}");
            return None;
        }
    };

    let dir = world_cursor - origin;
    Some(if dir.length_squared() < 1e-4 {
        Vec2::Y
    } else {
        dir.normalize()
    })
}
