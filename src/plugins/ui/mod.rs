//! Status/debug readouts.

pub mod debug_hud;
