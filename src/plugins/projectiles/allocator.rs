//! Spawn consumer: the single pool writer on the acquire side.
//!
//! Pops the pool's FIFO free list for each shot request, synthesizing a new
//! bullet through the factory when the holding area is empty — acquisition
//! never fails. Activation is written through `Commands` so that a bullet
//! synthesized this frame (whose entity does not exist in the world yet) is
//! activated exactly like a recycled one.
//!
//! A missing pool resource is a wiring defect, not a runtime condition: it
//! is logged once per batch and the requests are dropped. Hot paths never
//! panic over configuration.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{BulletState, Lifetime};
use super::messages::ShotRequest;
use super::pool::{BulletPool, active_bullet_layers, spawn_pooled_bullet};

const BULLET_Z: f32 = 2.0;

pub fn allocate_shots(
    mut commands: Commands,
    pool: Option<ResMut<BulletPool>>,
    tunables: Res<Tunables>,
    mut reader: MessageReader<ShotRequest>,
) {
    let Some(mut pool) = pool else {
        let dropped = reader.read().count();
        if dropped > 0 {
            warn!("dropped {dropped} shot request(s): BulletPool resource is missing");
        }
        return;
    };

    for req in reader.read() {
        let e = pool.acquire_with(|| spawn_pooled_bullet(&mut commands));

        // Active invariants. Inserting a fresh running Lifetime replaces any
        // timer left over from a previous activation.
        commands.entity(e).insert((
            BulletState::Active,
            Lifetime::running(tunables.bullet_lifetime),
            Transform::from_translation(req.pos.extend(BULLET_Z)),
            LinearVelocity(req.vel),
            Visibility::Visible,
            active_bullet_layers(),
        ));
    }
}
