//! Projectiles plugin: pooled bullets behind a **message-based producer → consumer**
//! spawn pipeline.
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule (variable dt)
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  (A) Driver: request_bullets                                             │
//! │      - reads: mouse/keyboard input, MainCamera, Player Transform         │
//! │      - writes: FireRequest message (dir + mode)                          │
//! │                                                                          │
//! │  (B) Spawner: expand_fire_requests                                       │
//! │      - applies the rate-limit gate (Single only)                         │
//! │      - expands Burst into per-shot directions across the spread          │
//! │      - writes: ShotRequest message (pos + vel), one per shot             │
//! │                                                                          │
//! │  (C) Allocator: allocate_shots (single pool writer)                      │
//! │      - pops the pool's FIFO free list, or synthesizes via the factory    │
//! │      - writes the Active invariants (visible, velocity, fresh lifetime,  │
//! │        collision filters on)                                             │
//! └──────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//! Fixed schedules (fixed dt)
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  (D) FixedUpdate: tick_bullet_lifetimes / return_out_of_bounds_bullets   │
//! │      - deadline elapsed or left the arena -> BulletState::PendingReturn  │
//! │                                                                          │
//! │  (E) FixedPostUpdate: process_bullet_collisions (after Avian narrowphase)│
//! │      - wall hit absorbs; enemy hit damages Health then absorbs           │
//! │      - mutates: BulletState -> PendingReturn                             │
//! │                                                                          │
//! │  (F) FixedPostUpdate: return_bullets_to_pool                             │
//! │      - single owner of the Inactive invariants (hidden, zero velocity,   │
//! │        empty filters, paused timer)                                      │
//! │      - pool.release(): FIFO push, or despawn when over max_retained      │
//! └──────────────────────────────────────────────────────────────────────────┘
//!
//! Feedback loop:
//!   commit pushes entities back into the pool's free list
//!   allocator pops them for the next shot
//! ```
//!
//! # Why messages instead of direct pool access?
//! Producers never borrow `ResMut<BulletPool>`; they only enqueue intent.
//! The allocator and the return commit are the only two systems that mutate
//! the pool, which keeps the at-most-one-owner invariant easy to audit.
//!
//! # The one subtle correctness requirement
//! A recycled bullet must never be expired by a deadline from its previous
//! lifetime. Activation replaces the `Lifetime` timer wholesale and the tick
//! system ignores non-Active bullets, so no stale countdown can survive reuse.

pub mod layers;
pub mod components;
pub mod pool;

pub mod messages;
pub mod spawner;
pub mod request;
pub mod allocator;
pub mod lifetime;
pub mod collision;
pub mod commit;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use avian2d::collision::narrow_phase::CollisionEventSystems;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub struct ProjectilesPlugin;

/// Maintain fire/shot message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_projectile_messages(
    mut fire: ResMut<Messages<messages::FireRequest>>,
    mut shots: ResMut<Messages<messages::ShotRequest>>,
) {
    fire.update();
    shots.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let tunables = app.world().resource::<Tunables>().clone();

        // Pool + spawner resources, then pre-fill at startup.
        app.insert_resource(pool::BulletPool::new(tunables.max_pool_size))
            .insert_resource(spawner::Spawner::new(tunables.fire_interval))
            .insert_resource(request::AutoFire::default())
            .add_systems(Startup, pool::init_bullet_pool);

        // Message storage for the spawn pipeline.
        app.init_resource::<Messages<messages::FireRequest>>();
        app.init_resource::<Messages<messages::ShotRequest>>();
        app.add_systems(PostUpdate, update_projectile_messages);

        // Update-phase pipeline: request -> expand -> allocate.
        app.add_systems(
            Update,
            (
                request::request_bullets,
                spawner::expand_fire_requests.after(request::request_bullets),
                allocator::allocate_shots.after(spawner::expand_fire_requests),
            )
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed pipeline: deadlines + bounds, then collisions, then commit.
        app.add_systems(
            FixedUpdate,
            (
                lifetime::tick_bullet_lifetimes,
                lifetime::return_out_of_bounds_bullets,
            ),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::process_bullet_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            commit::return_bullets_to_pool.after(collision::process_bullet_collisions),
        );

        // Teardown: every active bullet goes home before the pool outlives the match.
        app.add_systems(OnExit(GameState::InGame), commit::force_return_all);
    }
}
