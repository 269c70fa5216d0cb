//! Collision trigger: qualifying hits mark bullets for return.
//!
//! Walls absorb the bullet outright; enemies take damage first. Either way
//! the bullet only transitions to `PendingReturn` here — no pool mutation,
//! no despawns, nothing structural inside the fixed physics step.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::components::{Bullet, BulletState, Health, PooledBullet};
use super::layers::Layer;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

pub fn process_bullet_collisions(
    mut started: MessageReader<CollisionStart>,
    // Fast "is this a pooled bullet?" check
    q_is_bullet: Query<(), With<PooledBullet>>,
    // Bullet data + state
    mut q_bullets: Query<(&Bullet, &mut BulletState), With<PooledBullet>>,
    // Read layers from collider entities
    q_layers: Query<&CollisionLayers>,
    // Gameplay state
    mut q_health: Query<&mut Health>,
    // Per-step dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        // Identify the bullet side without get_mut probing
        let b1 = q_is_bullet.contains(t1.collider);
        let b2 = q_is_bullet.contains(t2.collider);
        if !(b1 ^ b2) {
            continue; // must be exactly one bullet
        }
        let (bullet_side, other_side) = if b1 { (t1, t2) } else { (t2, t1) };

        // Deduplicate per bullet collider
        if !seen.insert(bullet_side.collider) {
            continue;
        }

        let Ok(other_layers) = q_layers.get(other_side.collider) else {
            continue;
        };

        let Ok((bullet, mut state)) = q_bullets.get_mut(bullet_side.collider) else {
            continue;
        };

        // Inactive bullets have empty filters and should never get here, but
        // a hit resolved in the same step as a return commit is not a bug.
        if *state != BulletState::Active {
            continue;
        }

        // WORLD: wall absorbs the bullet.
        if is_in_layer(other_layers, Layer::World) {
            *state = BulletState::PendingReturn;
            continue;
        }

        // ENEMY: apply damage, then absorb.
        if is_in_layer(other_layers, Layer::Enemy) {
            let enemy_entity = other_side.gameplay_owner();

            if let Ok(mut health) = q_health.get_mut(enemy_entity) {
                health.hp -= bullet.damage;
            }

            *state = BulletState::PendingReturn;
            continue;
        }
    }
}
