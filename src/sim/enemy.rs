//! Enemy AI: random wander, interrupted by line-of-sight pursuit
//!
//! Wander re-rolls a direction every tick from the non-reversing open
//! directions. When the player shows up on one of the four sight rays the
//! enemy locks onto that direction for a fixed window, whether or not the
//! player stays in view.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Direction, MovableBody};
use super::map::TileMap;
use super::player::{LifeLoss, Player};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub body: MovableBody,
    /// Where this enemy is rebuilt on restart
    pub spawn: Vec2,
    /// Locked pursuit direction, `None` while wandering
    pub pursuit: Option<Direction>,
    /// Seconds since the pursuit lock was taken
    pub pursuit_timer: f32,
}

impl Enemy {
    pub fn new(id: u32, spawn: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            body: MovableBody::new(spawn, tuning.body_radius(), tuning.enemy_speed),
            spawn,
            pursuit: None,
            pursuit_timer: 0.0,
        }
    }

    #[inline]
    pub fn is_pursuing(&self) -> bool {
        self.pursuit.is_some()
    }

    /// Directions wander may pick this tick: open and not a U-turn
    pub fn wander_options(&self, map: &TileMap, dt: f32) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| !self.body.reverses(dir) && self.body.can_move(map, dir, dt))
            .collect()
    }

    /// Pick a random open direction, unless locked onto the player.
    ///
    /// With nowhere to go the velocity is left alone and wall resolution
    /// stops the enemy.
    pub fn wander<R: Rng>(&mut self, map: &TileMap, dt: f32, rng: &mut R) {
        if self.is_pursuing() {
            return;
        }

        let options = self.wander_options(map, dt);
        if options.is_empty() {
            return;
        }
        let dir = options[rng.random_range(0..options.len())];
        self.body.enable(dir);
    }

    /// Sample the ray toward `dir` at whole-tile steps, starting at the
    /// enemy's own position.
    pub fn sees_player(&self, dir: Direction, player: &Player, tuning: &Tuning, tile: f32) -> bool {
        (0..tuning.sight_tiles).any(|i| {
            let sample = self.body.pos + dir.unit() * (i as f32 * tile);
            player.touches(sample, player.radius())
        })
    }

    /// Lock onto a sighted player and age the lock.
    ///
    /// Rays are checked left, right, up, down. When several see the player
    /// in the same tick the last one wins; that ordering is arbitrary, not a
    /// judgement about which ray is better.
    pub fn track<F>(
        &mut self,
        player: &Player,
        tuning: &Tuning,
        tile: f32,
        dt: f32,
        mut on_event: F,
    ) where
        F: FnMut(PursuitEvent),
    {
        let was_pursuing = self.is_pursuing();

        for dir in Direction::ALL {
            if self.sees_player(dir, player, tuning, tile) {
                self.body.enable(dir);
                self.pursuit = Some(dir);
            }
        }

        if let Some(dir) = self.pursuit {
            if !was_pursuing {
                log::debug!("Enemy {} spotted player to the {:?}", self.id, dir);
                on_event(PursuitEvent::Locked(dir));
            }
            self.pursuit_timer += dt;
            if self.pursuit_timer > tuning.pursuit_secs {
                self.pursuit = None;
                self.pursuit_timer = 0.0;
                log::debug!("Enemy {} lost interest", self.id);
                on_event(PursuitEvent::Released);
            }
        }
    }

    /// Full enemy tick: wander, sight, movement, then player contact.
    ///
    /// Returns the life-loss outcome when this enemy caught the player.
    pub fn update<R: Rng>(
        &mut self,
        player: &mut Player,
        map: &TileMap,
        tuning: &Tuning,
        dt: f32,
        rng: &mut R,
        on_event: impl FnMut(PursuitEvent),
    ) -> Option<LifeLoss> {
        self.wander(map, dt, rng);
        self.track(player, tuning, map.tile_size(), dt, on_event);
        self.body.integrate(map, dt);

        // Contact does not care whether we were chasing
        if player.touches(self.body.pos, player.radius()) {
            Some(player.lose_life())
        } else {
            None
        }
    }
}

/// Pursuit state changes reported from `Enemy::track`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitEvent {
    Locked(Direction),
    Released,
}
