//! Shared movement and wall collision for the player and enemies
//!
//! A body keeps a per-axis velocity sign and a scalar speed. Each tick it
//! probes one step ahead on each enabled axis, snaps back to the tile when the
//! probe hits a wall, then moves.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::map::TileMap;
use crate::consts::CORNER_SHRINK;

/// One of the four cardinal directions (screen space, +y is down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Evaluation order used by steering, wander and sight checks
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step as a velocity sign pair
    pub const fn delta(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
        }
    }

    #[inline]
    pub fn unit(self) -> Vec2 {
        self.delta().as_vec2()
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Axis-aligned box used for wall probes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CollisionBox {
    #[inline]
    pub fn hits(&self, map: &TileMap) -> bool {
        map.collides(self.x, self.y, self.w, self.h)
    }
}

/// Position, velocity sign, radius and speed of anything that moves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovableBody {
    /// Center in world units
    pub pos: Vec2,
    /// Per-axis velocity sign, each component in -1..=1
    pub vel: IVec2,
    pub radius: f32,
    /// World units per second along each enabled axis
    pub speed: f32,
}

impl MovableBody {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel: IVec2::ZERO,
            radius,
            speed,
        }
    }

    /// Probe box shifted by `shift`.
    ///
    /// A shift along one axis narrows the box on the other axis by
    /// `CORNER_SHRINK`, so a body can start turning into a side corridor a
    /// little before it is exactly lined up with it.
    pub fn collision_box(&self, shift: Vec2) -> CollisionBox {
        let radius_x = self.radius / if shift.y == 0.0 { 1.0 } else { CORNER_SHRINK };
        let radius_y = self.radius / if shift.x == 0.0 { 1.0 } else { CORNER_SHRINK };
        CollisionBox {
            x: self.pos.x - radius_x + shift.x,
            y: self.pos.y - radius_y + shift.y,
            w: radius_x * 2.0,
            h: radius_y * 2.0,
        }
    }

    /// Distance covered this tick on one axis
    #[inline]
    pub fn step(&self, dt: f32) -> f32 {
        self.speed * dt
    }

    /// Whether a one-tick move toward `dir` stays clear of walls
    pub fn can_move(&self, map: &TileMap, dir: Direction, dt: f32) -> bool {
        !self.collision_box(dir.unit() * self.step(dt)).hits(map)
    }

    /// Set the velocity sign on `dir`'s axis, leaving the other axis alone
    pub fn enable(&mut self, dir: Direction) {
        let delta = dir.delta();
        if dir.is_horizontal() {
            self.vel.x = delta.x;
        } else {
            self.vel.y = delta.y;
        }
    }

    /// True when moving toward `dir` would exactly reverse current motion
    pub fn reverses(&self, dir: Direction) -> bool {
        let delta = dir.delta();
        if dir.is_horizontal() {
            self.vel.x == -delta.x
        } else {
            self.vel.y == -delta.y
        }
    }

    /// Check the one-tick-ahead box for each enabled axis.
    ///
    /// On a hit the body snaps to its tile on that axis and the axis velocity
    /// is zeroed. Runs every tick, whether or not there was new input.
    pub fn resolve_walls(&mut self, map: &TileMap, dt: f32) {
        let tile = map.tile_size();
        let step = self.step(dt);

        let shift_x = Vec2::new(self.vel.x as f32 * step, 0.0);
        if self.collision_box(shift_x).hits(map) {
            self.pos.x = (self.pos.x / tile).floor() * tile + self.radius;
            self.vel.x = 0;
        }

        let shift_y = Vec2::new(0.0, self.vel.y as f32 * step);
        if self.collision_box(shift_y).hits(map) {
            self.pos.y = (self.pos.y / tile).floor() * tile + self.radius;
            self.vel.y = 0;
        }
    }

    /// Apply this tick's displacement.
    ///
    /// Skipped entirely when either axis would travel a full tile or more,
    /// so a long stall between ticks cannot tunnel through a wall. Returns
    /// whether the body moved.
    pub fn advance(&mut self, dt: f32, tile_size: f32) -> bool {
        let displacement = self.vel.as_vec2() * self.step(dt);
        if displacement.x.abs() < tile_size && displacement.y.abs() < tile_size {
            self.pos += displacement;
            true
        } else {
            log::warn!(
                "Movement suppressed: displacement {:?} exceeds tile {}",
                displacement,
                tile_size
            );
            false
        }
    }

    /// Wall resolution followed by movement
    pub fn integrate(&mut self, map: &TileMap, dt: f32) -> bool {
        self.resolve_walls(map, dt);
        self.advance(dt, map.tile_size())
    }

    /// Put the body back on a point, at rest
    pub fn reset_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = IVec2::ZERO;
    }

    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }
}
