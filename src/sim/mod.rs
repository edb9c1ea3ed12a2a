//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied delta time only
//! - Caller-supplied RNG only
//! - Stable iteration order (enemies in spawn-marker order)
//! - No rendering or platform dependencies

pub mod body;
pub mod camera;
pub mod enemy;
pub mod map;
pub mod maps;
pub mod player;
pub mod state;
pub mod tick;

pub use body::{CollisionBox, Direction, MovableBody};
pub use camera::Camera;
pub use enemy::{Enemy, PursuitEvent};
pub use map::{GridPos, Marker, TileMap};
pub use player::{LifeLoss, Player};
pub use state::{GameEvent, GamePhase, GameState, RngState};
pub use tick::{TickInput, tick};
