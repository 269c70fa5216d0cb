//! Return commit: recycle bullets back into the pool.
//!
//! This system is the single owner of the *Inactive invariants*:
//! - hidden
//! - velocity = 0
//! - collides with nothing (filters empty)
//! - lifetime timer paused and cleared
//!
//! Centralizing these writes here prevents inconsistencies, and it is the
//! only place a pooled bullet can be despawned: when the holding area is at
//! its retained-size cap, the pool answers `Discard` and the excess bullet
//! is destroyed instead of kept.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{BulletState, Lifetime, PooledBullet};
use super::pool::{BulletPool, Release, inactive_bullet_layers};

pub fn return_bullets_to_pool(
    mut commands: Commands,
    mut pool: ResMut<BulletPool>,
    mut q: Query<
        (
            Entity,
            &mut BulletState,
            &mut Lifetime,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledBullet>,
    >,
) {
    for (e, mut state, mut lifetime, mut vis, mut vel, mut layers) in &mut q {
        if *state != BulletState::PendingReturn {
            continue;
        }

        *state = BulletState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_bullet_layers();
        lifetime.pause();
        lifetime.reset();

        match pool.release(e) {
            Release::Retained | Release::AlreadyPooled => {}
            Release::Discard => {
                commands.entity(e).despawn();
            }
        }
    }
}

/// Forced deactivation: mark every active bullet for return.
///
/// Runs on state teardown; also callable directly by anything that needs to
/// sweep the world clean without waiting for deadlines. A no-op for bullets
/// that are already inactive.
pub fn force_return_all(mut q: Query<&mut BulletState, With<PooledBullet>>) {
    for mut state in &mut q {
        if *state == BulletState::Active {
            *state = BulletState::PendingReturn;
        }
    }
}
