//! Entity pool: FIFO holding area with a retained-size cap.
//!
//! `Pool<M>` is plain data, generic over the marker component of the entity
//! kind it manages. It knows nothing about what activation means; the
//! allocator and commit systems own those invariants. All it promises:
//!
//! - `acquire_with` always yields an entity: pop the oldest free one, or
//!   synthesize through the factory when the holding area is empty.
//! - `release` is idempotent and never retains more than `max_retained`
//!   entities; the caller destroys whatever the pool declines.
//! - `active` is an explicit counter (acquire +1, genuine release -1).
//!   Deriving it from world introspection goes wrong as soon as over-cap
//!   entities are destroyed instead of retained, so it is tracked state here.

use std::collections::VecDeque;
use std::marker::PhantomData;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{Bullet, BulletState, Lifetime, PooledBullet};
use super::layers::Layer;

/// Verdict of [`Pool::release`]; tells the caller what to do with the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Entity is back in the holding area.
    Retained,
    /// Holding area is at capacity; the caller must destroy the entity.
    Discard,
    /// Entity was already pooled; nothing changed.
    AlreadyPooled,
}

#[derive(Resource, Debug)]
pub struct Pool<M: Component> {
    free: VecDeque<Entity>,
    max_retained: usize,
    active: usize,
    _marker: PhantomData<M>,
}

impl<M: Component> Pool<M> {
    pub fn new(max_retained: usize) -> Self {
        Self {
            free: VecDeque::with_capacity(max_retained),
            max_retained,
            active: 0,
            _marker: PhantomData,
        }
    }

    /// Add a freshly built inactive entity to the holding area (pre-fill).
    pub fn prefill(&mut self, entity: Entity) {
        self.free.push_back(entity);
    }

    /// Hand out an entity: oldest pooled one first, otherwise whatever the
    /// factory builds. Never fails.
    pub fn acquire_with(&mut self, factory: impl FnOnce() -> Entity) -> Entity {
        let entity = self.free.pop_front().unwrap_or_else(factory);
        self.active += 1;
        entity
    }

    /// Take an entity back. Idempotent: an entity already in the holding
    /// area is left alone and the counters stay untouched.
    pub fn release(&mut self, entity: Entity) -> Release {
        if self.free.contains(&entity) {
            return Release::AlreadyPooled;
        }

        self.active = self.active.saturating_sub(1);

        if self.free.len() < self.max_retained {
            self.free.push_back(entity);
            Release::Retained
        } else {
            Release::Discard
        }
    }

    /// Entities currently waiting in the holding area.
    pub fn pooled_count(&self) -> usize {
        self.free.len()
    }

    /// Entities currently issued to the world.
    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn max_retained(&self) -> usize {
        self.max_retained
    }

    /// Forget all held entities (the caller is despawning them).
    pub fn clear(&mut self) {
        self.free.clear();
        self.active = 0;
    }
}

pub type BulletPool = Pool<PooledBullet>;

const BULLET_Z: f32 = 2.0;
const BULLET_RADIUS: f32 = 4.0;

#[inline]
pub fn active_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [Layer::World, Layer::Enemy])
}

/// "Disabled" without structural changes: empty filters means we collide with
/// nothing, so a pooled bullet never generates collision events.
#[inline]
pub fn inactive_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [] as [Layer; 0])
}

/// Factory: build one pooled bullet, inactive.
///
/// Used for both the startup pre-fill and on-demand synthesis when the
/// holding area runs dry. Spawning through `Commands` cannot fail; a broken
/// factory is a wiring defect and would panic here at setup, loudly.
pub fn spawn_pooled_bullet(commands: &mut Commands) -> Entity {
    let restitution = Restitution::new(0.95).with_combine_rule(CoefficientCombine::Max);
    let friction = Friction::ZERO;

    commands
        .spawn((
            Name::new("Bullet(Pooled)"),
            PooledBullet,
            BulletState::Inactive,
            Bullet { damage: 1 },
            Lifetime::dormant(),
            Sprite {
                color: Color::srgb(1.0, 0.85, 0.3),
                custom_size: Some(Vec2::splat(BULLET_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, BULLET_Z),
            Visibility::Hidden,
            RigidBody::Dynamic,
            Collider::circle(BULLET_RADIUS),
            inactive_bullet_layers(),
            restitution,
            friction,
            LinearVelocity(Vec2::ZERO),
            // Keep this always; inactive bullets won't collide anyway because layers are empty.
            CollisionEventsEnabled,
        ))
        .id()
}

/// Pre-fill the pool with `Tunables::initial_pool_size` inactive bullets.
pub fn init_bullet_pool(
    mut commands: Commands,
    mut pool: ResMut<BulletPool>,
    tunables: Res<Tunables>,
) {
    pool.clear();

    for _ in 0..tunables.initial_pool_size {
        let e = spawn_pooled_bullet(&mut commands);
        pool.prefill(e);
    }

    debug!(
        "bullet pool initialized with {} bullets (max retained {})",
        tunables.initial_pool_size,
        pool.max_retained()
    );
}
