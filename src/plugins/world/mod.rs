//! World plugin: spawns arena walls and defines the playable bounds.
//!
//! The walls are the "tagged obstacle" colliders that absorb bullets; the
//! bounds constants double as the visibility region for recycling bullets
//! that escape the arena.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::projectiles::layers::Layer;

/// Half extent of the playable area on the X axis, in world units.
pub const ARENA_HALF_WIDTH: f32 = 1024.0;
/// Half extent of the playable area on the Y axis, in world units.
pub const ARENA_HALF_HEIGHT: f32 = 576.0;

/// Slack outside the walls before a bullet counts as out of bounds.
///
/// Bullets can tunnel slightly past a wall within one fixed step; the margin
/// keeps the bounds check from racing the collision response.
pub const OUT_OF_BOUNDS_MARGIN: f32 = 128.0;

/// True while a position is inside the playable region (plus margin).
#[inline]
pub fn in_playable_bounds(pos: Vec2) -> bool {
    pos.x.abs() <= ARENA_HALF_WIDTH + OUT_OF_BOUNDS_MARGIN
        && pos.y.abs() <= ARENA_HALF_HEIGHT + OUT_OF_BOUNDS_MARGIN
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_arena);
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let thickness = 30.0;

    let wall_layers = CollisionLayers::new(
        Layer::World,
        [Layer::Player, Layer::Enemy, Layer::PlayerBullet],
    );

    let mut spawn_wall = |name: String, pos: Vec3, size: Vec2| {
        commands.spawn((
            Name::new(name),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn_wall(
        "WallTop".into(),
        Vec3::new(0.0, ARENA_HALF_HEIGHT + thickness * 0.5, 0.0),
        Vec2::new(ARENA_HALF_WIDTH * 2.0 + thickness * 2.0, thickness),
    );
    spawn_wall(
        "WallBottom".into(),
        Vec3::new(0.0, -ARENA_HALF_HEIGHT - thickness * 0.5, 0.0),
        Vec2::new(ARENA_HALF_WIDTH * 2.0 + thickness * 2.0, thickness),
    );
    spawn_wall(
        "WallLeft".into(),
        Vec3::new(-ARENA_HALF_WIDTH - thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, ARENA_HALF_HEIGHT * 2.0),
    );
    spawn_wall(
        "WallRight".into(),
        Vec3::new(ARENA_HALF_WIDTH + thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, ARENA_HALF_HEIGHT * 2.0),
    );
}
