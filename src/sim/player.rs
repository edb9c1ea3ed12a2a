//! The player: a movable body with lives, a queued turn and an immortality window

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Direction, MovableBody};
use super::map::TileMap;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// What happened when the player lost a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    /// Lives remain; the player is back at spawn and immortal
    Respawned { lives_left: u32 },
    /// No lives left
    GameOver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: MovableBody,
    /// World position the player returns to after losing a life
    pub spawn: Vec2,
    pub lives: u32,
    /// Contact damage is ignored while set
    pub immortal: bool,
    /// Seconds spent immortal so far
    pub immortality_timer: f32,
    /// Last requested turn, retried every tick until replaced by new input
    pub queued: Option<Direction>,
    pub game_over: bool,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: MovableBody::new(spawn, tuning.body_radius(), tuning.player_speed),
            spawn,
            lives: tuning.lives,
            immortal: false,
            immortality_timer: 0.0,
            queued: None,
            game_over: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    /// Turn held or queued directions into axis velocity.
    ///
    /// Directions are visited left, right, up, down; each one that is held
    /// (or already queued) becomes the queued direction, and enables its axis
    /// only if the look-ahead box is clear.
    pub fn steer(&mut self, input: &TickInput, map: &TileMap, dt: f32) {
        for dir in Direction::ALL {
            if input.held(dir) || self.queued == Some(dir) {
                self.queued = Some(dir);
                if self.body.can_move(map, dir, dt) {
                    self.body.enable(dir);
                }
            }
        }
    }

    /// Steering, wall resolution, movement and the immortality countdown
    pub fn update(&mut self, input: &TickInput, map: &TileMap, tuning: &Tuning, dt: f32) {
        self.steer(input, map, dt);
        self.body.integrate(map, dt);

        if self.immortal {
            self.immortality_timer += dt;
            if self.immortality_timer > tuning.immortality_secs {
                self.immortal = false;
                self.immortality_timer = 0.0;
                log::debug!("Immortality ended");
            }
        }
    }

    /// Whether a circle at `point` reaches the player.
    ///
    /// Always false while immortal, so sight and contact checks both ignore
    /// an immortal player.
    pub fn touches(&self, point: Vec2, radius: f32) -> bool {
        !self.immortal && self.body.distance_to(point) < radius
    }

    /// Take one life; respawn with immortality, or end the run
    pub fn lose_life(&mut self) -> LifeLoss {
        self.lives = self.lives.saturating_sub(1);

        if self.lives > 0 {
            self.body.reset_to(self.spawn);
            self.immortal = true;
            self.immortality_timer = 0.0;
            log::info!("Life lost, {} remaining", self.lives);
            LifeLoss::Respawned {
                lives_left: self.lives,
            }
        } else {
            self.game_over = true;
            log::info!("Last life lost");
            LifeLoss::GameOver
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::map::GridPos;
    use glam::IVec2;

    const JUNCTION: &str = "
#######
###E###
#  P  #
### ###
#######";

    fn setup() -> (TileMap, Tuning, Player) {
        let tuning = Tuning::default();
        let map = TileMap::parse(JUNCTION, tuning.tile_size).unwrap();
        let player = Player::new(map.cell_center(map.player_spawn()), &tuning);
        (map, tuning, player)
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_new_player() {
        let (_, _, player) = setup();
        assert_eq!(player.lives, 3);
        assert_eq!(player.pos(), Vec2::new(105.0, 75.0));
        assert_eq!(player.radius(), 15.0);
        assert!(!player.immortal);
        assert!(player.queued.is_none());
    }

    #[test]
    fn test_held_direction_moves_and_queues() {
        let (map, tuning, mut player) = setup();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(&input, &map, &tuning, DT);
        assert_eq!(player.queued, Some(Direction::Right));
        assert_eq!(player.body.vel, IVec2::new(1, 0));
        assert!(player.pos().x > 105.0);
    }

    #[test]
    fn test_queued_direction_persists_after_release() {
        let (map, tuning, mut player) = setup();
        let hold_down = TickInput {
            down: true,
            ..Default::default()
        };
        let released = TickInput::default();

        // Walk right, then ask for down while passing over the wall below
        player.body.enable(Direction::Right);
        player.body.pos.x = 120.0;
        player.update(&hold_down, &map, &tuning, DT);
        assert_eq!(player.queued, Some(Direction::Down));
        assert_eq!(player.body.vel.y, 0);

        // Released, the queued turn is still retried each tick; back at the
        // gap column it opens up
        player.body.vel = IVec2::new(-1, 0);
        for _ in 0..30 {
            player.update(&released, &map, &tuning, DT);
            if player.body.vel.y == 1 {
                break;
            }
        }
        assert_eq!(player.queued, Some(Direction::Down));
        assert_eq!(player.body.vel.y, 1);
    }

    #[test]
    fn test_blocked_direction_does_not_enable() {
        let (map, tuning, mut player) = setup();
        // West end of the corridor, border wall to the left
        player.body.pos = map.cell_center(GridPos::new(1, 2));
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        player.update(&input, &map, &tuning, DT);
        assert_eq!(player.body.vel.x, 0);
        assert_eq!(player.queued, Some(Direction::Left));
    }

    #[test]
    fn test_lose_life_respawns_with_immortality() {
        let (_, _, mut player) = setup();
        player.body.pos = Vec2::new(10.0, 10.0);
        player.body.vel = IVec2::new(1, 0);

        assert_eq!(player.lose_life(), LifeLoss::Respawned { lives_left: 2 });
        assert_eq!(player.pos(), player.spawn);
        assert_eq!(player.body.vel, IVec2::ZERO);
        assert!(player.immortal);
        assert!(!player.touches(player.pos(), 100.0));
    }

    #[test]
    fn test_last_life_sets_game_over() {
        let (_, _, mut player) = setup();
        player.lives = 1;
        assert_eq!(player.lose_life(), LifeLoss::GameOver);
        assert_eq!(player.lives, 0);
        assert!(player.game_over);
    }

    #[test]
    fn test_immortality_expires_after_window() {
        let (map, tuning, mut player) = setup();
        player.lose_life();
        let idle = TickInput::default();

        // 2.9 seconds in: still immortal
        for _ in 0..174 {
            player.update(&idle, &map, &tuning, DT);
        }
        assert!(player.immortal);

        // Past 3 seconds: mortal again, timer reset
        for _ in 0..10 {
            player.update(&idle, &map, &tuning, DT);
        }
        assert!(!player.immortal);
        assert_eq!(player.immortality_timer, 0.0);
    }

    #[test]
    fn test_touches_uses_distance() {
        let (_, _, player) = setup();
        let p = player.pos();
        assert!(player.touches(p + Vec2::new(14.0, 0.0), 15.0));
        assert!(!player.touches(p + Vec2::new(15.0, 0.0), 15.0));
    }
}
