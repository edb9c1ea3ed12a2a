//! Game state and core simulation types
//!
//! The map is shared read-only; the player and enemy set are owned here and
//! are always rebuilt together.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Direction;
use super::camera::Camera;
use super::enemy::Enemy;
use super::map::TileMap;
use super::player::Player;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player and enemies frozen; camera still follows
    Paused,
    /// Out of lives, waiting for confirm
    GameOver,
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LifeLost { lives_left: u32 },
    GameOver,
    Restarted,
    Paused,
    Resumed,
    PursuitStarted { enemy: u32, dir: Direction },
    PursuitEnded { enemy: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub tuning: Tuning,
    pub map: TileMap,
    pub player: Player,
    /// Enemies in spawn-marker order
    pub enemies: Vec<Enemy>,
    pub camera: Camera,
    pub phase: GamePhase,
    /// Simulated ticks (not counting paused or game-over ticks)
    pub time_ticks: u64,
    /// Runs restarted after a game over
    pub restarts: u32,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on `map`.
    ///
    /// The map's tile size wins over the tuning's, so body radii always match
    /// the grid they collide with.
    pub fn new(map: TileMap, mut tuning: Tuning, seed: u64) -> Self {
        if tuning.tile_size != map.tile_size() {
            log::warn!(
                "Tuning tile size {} overridden by map tile size {}",
                tuning.tile_size,
                map.tile_size()
            );
            tuning.tile_size = map.tile_size();
        }
        let player = spawn_player(&map, &tuning);
        let enemies = spawn_enemies(&map, &tuning);
        let viewport = Vec2::new(tuning.viewport_width, tuning.viewport_height);
        let camera = Camera::new(player.pos(), viewport, map.extent());

        log::info!(
            "New game: seed {}, {} enemies, {} lives",
            seed,
            enemies.len(),
            player.lives
        );

        Self {
            seed,
            rng_state: RngState::new(seed),
            tuning,
            map,
            player,
            enemies,
            camera,
            phase: GamePhase::Playing,
            time_ticks: 0,
            restarts: 0,
            events: Vec::new(),
        }
    }

    /// Throw away the player and every enemy and build fresh ones from the
    /// spawn markers
    pub fn restart(&mut self) {
        self.player = spawn_player(&self.map, &self.tuning);
        self.enemies = spawn_enemies(&self.map, &self.tuning);
        self.phase = GamePhase::Playing;
        self.restarts += 1;
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted (restart #{})", self.restarts);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Simulated time in seconds at a fixed step
    pub fn elapsed_secs(&self, dt: f32) -> f32 {
        self.time_ticks as f32 * dt
    }
}

fn spawn_player(map: &TileMap, tuning: &Tuning) -> Player {
    Player::new(map.cell_center(map.player_spawn()), tuning)
}

fn spawn_enemies(map: &TileMap, tuning: &Tuning) -> Vec<Enemy> {
    map.enemy_spawns()
        .iter()
        .enumerate()
        .map(|(id, &cell)| Enemy::new(id as u32, map.cell_center(cell), tuning))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::maps::DEFAULT_LEVEL;

    fn default_state() -> GameState {
        let tuning = Tuning::default();
        let map = TileMap::parse(DEFAULT_LEVEL, tuning.tile_size).unwrap();
        GameState::new(map, tuning, 12345)
    }

    #[test]
    fn test_new_state_spawns_everything() {
        let state = default_state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.enemies.len(), 4);
        assert_eq!(state.player.pos(), state.map.cell_center(state.map.player_spawn()));
        for (enemy, cell) in state.enemies.iter().zip(state.map.enemy_spawns()) {
            assert_eq!(enemy.body.pos, state.map.cell_center(*cell));
        }
    }

    #[test]
    fn test_restart_rebuilds_player_and_enemies() {
        let mut state = default_state();
        state.player.lives = 0;
        state.player.game_over = true;
        state.player.body.pos += Vec2::new(30.0, 0.0);
        state.enemies[0].body.pos += Vec2::new(0.0, 30.0);
        state.enemies[1].pursuit = Some(Direction::Left);
        state.phase = GamePhase::GameOver;

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.lives, 3);
        assert!(!state.player.game_over);
        assert_eq!(state.player.pos(), state.player.spawn);
        assert!(state.enemies.iter().all(|e| e.body.pos == e.spawn && !e.is_pursuing()));
        assert_eq!(state.restarts, 1);
        assert_eq!(state.events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_map_tile_size_drives_body_radius() {
        let map = TileMap::parse(DEFAULT_LEVEL, 20.0).unwrap();
        let state = GameState::new(map, Tuning::default(), 1);
        assert_eq!(state.tuning.tile_size, 20.0);
        assert_eq!(state.player.radius(), 10.0);
        assert!(state.enemies.iter().all(|e| e.body.radius == 10.0));
        assert_eq!(state.player.pos(), Vec2::new(19.0 * 20.0 + 10.0, 17.0 * 20.0 + 10.0));
    }

    #[test]
    fn test_state_serializes() {
        let state = default_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.enemies.len(), state.enemies.len());
        assert_eq!(back.map.width(), state.map.width());
        assert!(back.events.is_empty());
    }
}
