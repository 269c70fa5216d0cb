//! Camera plugin (render-only).
//!
//! The camera is also how the fire driver converts the cursor to world
//! space, so `MainCamera` is a public marker the projectiles plugin queries.
//!
//! Aliasing note: `follow_player` needs `&Transform` of the player and
//! `&mut Transform` of the camera in one system; disjointness is encoded
//! with `Without<...>` filters so Bevy can prove the queries never overlap.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 5.0 },
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player(
    time: Res<Time>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok((mut tf_cam, main_cam)) = q_cam.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let alpha = 1.0 - (-main_cam.responsiveness * dt).exp();

    tf_cam.translation.x += (tf_player.translation.x - tf_cam.translation.x) * alpha;
    tf_cam.translation.y += (tf_player.translation.y - tf_cam.translation.y) * alpha;
}
