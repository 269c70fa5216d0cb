use bevy::prelude::*;

/// Marker: this entity belongs to the bullet pool's managed set.
#[derive(Component)]
pub struct PooledBullet;

/// Bullet lifecycle state.
///
/// `PendingReturn` decouples *deciding* a bullet is done (collision, deadline,
/// bounds — all inside the fixed step) from *committing* the return, which is
/// the only place allowed to write the Inactive invariants.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Bullet {
    pub damage: i32,
}

/// Remaining lifetime of an active bullet.
///
/// A plain deadline value, ticked each fixed step while the bullet is Active.
/// Activation replaces it with a fresh running timer, so a deadline from a
/// previous lifetime can never fire against a reused bullet.
#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    /// A paused zero timer for pooled bullets that have never been fired.
    pub fn dormant() -> Self {
        let mut timer = Timer::from_seconds(0.0, TimerMode::Once);
        timer.pause();
        Self(timer)
    }

    /// A running timer counting down `seconds`.
    pub fn running(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

#[derive(Component, Debug, Clone)]
pub struct Health {
    pub hp: i32,
}
