//! Deadline + bounds triggers for recycling.
//!
//! Both systems only flip `BulletState` to `PendingReturn`; the commit
//! system owns the actual return. Ticking is gated on `Active`, so a pooled
//! bullet's timer never advances and a stale deadline cannot expire a
//! recycled bullet.

use bevy::prelude::*;

use crate::plugins::world::in_playable_bounds;

use super::components::{BulletState, Lifetime, PooledBullet};

pub fn tick_bullet_lifetimes(
    time: Res<Time<Fixed>>,
    mut q: Query<(&mut Lifetime, &mut BulletState), With<PooledBullet>>,
) {
    for (mut lifetime, mut state) in &mut q {
        if *state != BulletState::Active {
            continue;
        }

        lifetime.tick(time.delta());
        if lifetime.is_finished() {
            *state = BulletState::PendingReturn;
        }
    }
}

/// Replace "became invisible" with an explicit bounds check: a bullet that
/// escapes the arena (plus margin) is recycled.
pub fn return_out_of_bounds_bullets(
    mut q: Query<(&Transform, &mut BulletState), With<PooledBullet>>,
) {
    for (tf, mut state) in &mut q {
        if *state != BulletState::Active {
            continue;
        }

        if !in_playable_bounds(tf.translation.truncate()) {
            *state = BulletState::PendingReturn;
        }
    }
}
