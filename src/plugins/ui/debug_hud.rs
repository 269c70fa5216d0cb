//! Pool statistics feed for the status display.
//!
//! A `PoolStats` resource mirrors the pool's pooled/active counters each
//! frame; any display collaborator (on-screen panel, console) reads it
//! instead of touching the pool. Changes are also logged at debug level.

use bevy::prelude::*;

use crate::plugins::projectiles::pool::BulletPool;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub pooled: usize,
    pub active: usize,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PoolStats>()
        .add_systems(PostUpdate, publish_pool_stats);
}

fn publish_pool_stats(pool: Option<Res<BulletPool>>, mut stats: ResMut<PoolStats>) {
    let Some(pool) = pool else {
        return;
    };

    let next = PoolStats {
        pooled: pool.pooled_count(),
        active: pool.active_count(),
    };

    if *stats != next {
        *stats = next;
        debug!("bullets pooled: {}, active: {}", next.pooled, next.active);
    }
}
