//! Tile Chase - A maze chase arcade game on a tile grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile collisions, player, enemy AI, camera)
//! - `renderer`: Per-tick draw primitive lists for an external renderer
//! - `platform`: Input source adapters (keyboard/touch -> tick input)
//! - `session`: Render-driven tick callback tying sim and renderer together
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{Error, MapError, Result, TuningError};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Side of a square map cell, in world units
    pub const TILE_SIZE: f32 = 30.0;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Movement speeds (world units per second)
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const ENEMY_SPEED: f32 = 210.0;

    /// Lives at the start of a run
    pub const START_LIVES: u32 = 3;
    /// Grace period after losing a life (seconds)
    pub const IMMORTALITY_SECS: f32 = 3.0;
    /// How long an enemy holds a sighted direction (seconds)
    pub const PURSUIT_SECS: f32 = 1.0;
    /// Length of each enemy sight ray, in tiles
    pub const SIGHT_TILES: u32 = 10;
    /// Camera follow rate (1/s)
    pub const CAMERA_RATE: f32 = 7.0;

    /// Collision box shrink divisor on the axis perpendicular to a probe.
    ///
    /// Empirically tuned so bodies slip around corners before they are fully
    /// lined up with a corridor. Not derived from any physical model.
    pub const CORNER_SHRINK: f32 = 1.5;
}
