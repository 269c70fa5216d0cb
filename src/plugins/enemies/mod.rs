//! Enemies plugin: static targets that absorb bullets.
//!
//! These exist as the "hostile target" collaborator for the projectile
//! pipeline: the collision system damages their `Health` and recycles the
//! bullet. Death is a mark-then-despawn: collision code (fixed step) only
//! mutates numbers; structural despawns happen in PostUpdate.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::projectiles::components::Health;
use crate::plugins::projectiles::layers::Layer;

#[derive(Component)]
pub struct Enemy;

const TARGET_POSITIONS: [Vec2; 3] = [
    Vec2::new(-400.0, 250.0),
    Vec2::new(0.0, 350.0),
    Vec2::new(400.0, 250.0),
];

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_targets)
        .add_systems(PostUpdate, despawn_dead);
}

fn spawn_targets(mut commands: Commands) {
    let layers = CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player, Layer::PlayerBullet]);

    for (i, pos) in TARGET_POSITIONS.into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("Target{i}")),
            Enemy,
            Health { hp: 10 },
            Sprite {
                color: Color::srgb(0.85, 0.3, 0.3),
                custom_size: Some(Vec2::splat(34.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(1.0)),
            RigidBody::Static,
            Collider::circle(17.0),
            layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn despawn_dead(mut commands: Commands, q: Query<(Entity, &Health), With<Enemy>>) {
    for (e, health) in &q {
        if health.hp <= 0 {
            commands.entity(e).despawn();
        }
    }
}
