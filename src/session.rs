//! Render-driven game session
//!
//! The host calls `Session::step` once per animation frame with the elapsed
//! wall-clock time and gets back the primitives to paint.

use rand_pcg::Pcg32;

use crate::error::MapError;
use crate::renderer::{DrawPrimitive, build_frame};
use crate::sim::{GameEvent, GameState, TickInput, TileMap, tick};
use crate::tuning::Tuning;

pub struct Session {
    state: GameState,
    rng: Pcg32,
}

impl Session {
    pub fn new(map: TileMap, tuning: Tuning, seed: u64) -> Self {
        let state = GameState::new(map, tuning, seed);
        let rng = state.rng_state.to_rng();
        Self { state, rng }
    }

    /// Parse `pattern` with the tuning's tile size and start a session on it
    pub fn from_pattern(pattern: &str, tuning: Tuning, seed: u64) -> Result<Self, MapError> {
        let map = TileMap::parse(pattern, tuning.tile_size)?;
        Ok(Self::new(map, tuning, seed))
    }

    /// Run one tick and return the frame to draw
    pub fn step(&mut self, input: &TickInput, dt: f32) -> Vec<DrawPrimitive> {
        tick(&mut self.state, input, dt, &mut self.rng);
        build_frame(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events raised by the last `step`
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }
}
