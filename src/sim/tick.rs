//! Per-tick simulation step
//!
//! Fixed order every tick: input -> player -> camera -> enemies (with player
//! contact). Pause and game over freeze the player and enemies but the camera
//! keeps easing.

use rand::Rng;

use super::body::Direction;
use super::enemy::PursuitEvent;
use super::player::LifeLoss;
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Restart after game over (Space/Enter)
    pub confirm: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Is `dir` held this tick
    pub fn held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Input holding exactly one direction
    pub fn holding(dir: Direction) -> Self {
        let mut input = Self::default();
        match dir {
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
        }
        input
    }
}

/// Advance the game state by `dt` seconds of wall-clock time.
///
/// `dt` is not clamped; a long stall just suppresses movement for that tick.
/// `rng` drives enemy wander and must be the only source of randomness.
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut R) {
    state.events.clear();

    let simulate = match state.phase {
        GamePhase::GameOver => {
            if input.confirm {
                state.restart();
            }
            false
        }
        GamePhase::Playing if input.pause => {
            state.phase = GamePhase::Paused;
            state.events.push(GameEvent::Paused);
            false
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Resumed);
            }
            false
        }
        GamePhase::Playing => true,
    };

    if simulate {
        state.player.update(input, &state.map, &state.tuning, dt);
    }

    state.camera.update(
        state.player.pos(),
        state.map.extent(),
        state.tuning.camera_rate,
        dt,
    );

    if simulate {
        update_enemies(state, dt, rng);
        state.time_ticks += 1;
    }
}

/// Move every enemy and resolve contact with the player.
///
/// Stops at the first contact that ends the run, so nothing else moves once
/// the game is over.
fn update_enemies<R: Rng>(state: &mut GameState, dt: f32, rng: &mut R) {
    let GameState {
        map,
        tuning,
        player,
        enemies,
        events,
        phase,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        let id = enemy.id;
        let outcome = enemy.update(player, map, tuning, dt, rng, |event| {
            events.push(match event {
                PursuitEvent::Locked(dir) => GameEvent::PursuitStarted { enemy: id, dir },
                PursuitEvent::Released => GameEvent::PursuitEnded { enemy: id },
            })
        });

        match outcome {
            Some(LifeLoss::Respawned { lives_left }) => {
                events.push(GameEvent::LifeLost { lives_left });
            }
            Some(LifeLoss::GameOver) => {
                events.push(GameEvent::LifeLost { lives_left: 0 });
                events.push(GameEvent::GameOver);
                *phase = GamePhase::GameOver;
                log::info!("Game over");
                break;
            }
            None => {}
        }
    }
}
