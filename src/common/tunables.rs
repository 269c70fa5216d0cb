//! Tunable gameplay constants.
//!
//! This is the whole configuration surface: plain numbers, no file format.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,

    /// Bullet speed in world units per second.
    pub bullet_speed: f32,
    /// Seconds an active bullet lives before it is recycled.
    pub bullet_lifetime: f32,

    /// Bullets pre-spawned into the pool at startup.
    pub initial_pool_size: usize,
    /// Cap on the holding area; returned bullets above this are destroyed.
    pub max_pool_size: usize,

    /// Minimum seconds between accepted rate-limited fire requests.
    pub fire_interval: f32,
    /// Shots per burst request.
    pub burst_count: u32,
    /// Total angular spread of a burst, in degrees.
    pub burst_spread_degrees: f32,
    /// Seconds between auto-fire shots while the toggle is on.
    pub auto_fire_interval: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            bullet_speed: 900.0,
            bullet_lifetime: 5.0,
            initial_pool_size: 20,
            max_pool_size: 50,
            fire_interval: 0.1,
            burst_count: 5,
            burst_spread_degrees: 30.0,
            auto_fire_interval: 0.05,
        }
    }
}
