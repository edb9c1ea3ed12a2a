//! Per-tick frame assembly
//!
//! Builds the full primitive list for one frame from the game state, in draw
//! order: background, walls, player, enemies, status bar, game-over overlay.

use glam::Vec2;

use super::primitives::{DrawPrimitive, colors};
use crate::sim::GameState;

/// Walls are only drawn within this many cells of the player (each way)
pub const RENDER_RADIUS_TILES: usize = 14;

/// Status bar layout
const LIFE_ICON_SPACING: f32 = 25.0;
const LIFE_ICON_MARGIN: f32 = 20.0;
const LIFE_ICON_SHRINK: f32 = 1.5;

const OVERLAY_OPACITY: f32 = 0.75;
const GAME_OVER_TEXT: &str = "GAME OVER";
const GAME_OVER_TEXT_SIZE: f32 = 60.0;

/// Base wall opacity before the vignette term is added
const WALL_BASE_OPACITY: f32 = 0.7;

/// Build every primitive for the current state
pub fn build_frame(state: &GameState) -> Vec<DrawPrimitive> {
    let viewport = state.camera.viewport;
    let mut frame = Vec::with_capacity(512);

    frame.push(DrawPrimitive::rect(Vec2::ZERO, viewport, colors::BACKGROUND, 1.0));

    push_walls(state, &mut frame);

    let player = &state.player;
    let player_opacity = if player.immortal { 0.5 } else { 1.0 };
    frame.push(DrawPrimitive::circle(
        state.camera.to_screen(player.pos()),
        player.radius(),
        colors::PLAYER,
        player_opacity,
    ));

    for enemy in &state.enemies {
        frame.push(DrawPrimitive::circle(
            state.camera.to_screen(enemy.body.pos),
            enemy.body.radius,
            colors::ENEMY,
            1.0,
        ));
    }

    push_status_bar(state, &mut frame);

    if state.is_game_over() {
        frame.push(DrawPrimitive::rect(Vec2::ZERO, viewport, colors::OVERLAY, OVERLAY_OPACITY));
        frame.push(DrawPrimitive::text(
            viewport / 2.0,
            GAME_OVER_TEXT,
            GAME_OVER_TEXT_SIZE,
            colors::OVERLAY_TEXT,
        ));
    }

    frame
}

/// First cell and length of the draw window on one axis.
///
/// The window is centered on the target cell and slid to stay inside the map;
/// a map narrower than the window is drawn whole.
fn window(target: f32, tile: f32, len: usize) -> (usize, usize) {
    let span = 2 * RENDER_RADIUS_TILES + 1;
    let on = (target / tile).ceil().max(0.0) as usize;
    let start = on
        .saturating_sub(1 + RENDER_RADIUS_TILES)
        .min(len.saturating_sub(span));
    (start, span.min(len - start))
}

/// Triangular falloff: 0 at the window edge, 1 at its center
fn vignette(index: usize) -> f32 {
    let scale = index as f32 / RENDER_RADIUS_TILES as f32;
    if scale > 1.0 { 2.0 - scale } else { scale }
}

/// Opacity of a wall at window offset (`col`, `row`)
pub fn wall_opacity(col: usize, row: usize) -> f32 {
    (vignette(col) * vignette(row) + WALL_BASE_OPACITY).min(1.0)
}

fn push_walls(state: &GameState, frame: &mut Vec<DrawPrimitive>) {
    let map = &state.map;
    let tile = map.tile_size();
    let target = state.player.pos();
    let (col0, cols) = window(target.x, tile, map.width());
    let (row0, rows) = window(target.y, tile, map.height());
    let size = Vec2::splat(tile);

    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = (col0 + c, row0 + r);
            if !map.is_wall(x, y) {
                continue;
            }
            let world = Vec2::new(x as f32 * tile, y as f32 * tile);
            frame.push(DrawPrimitive::rect(
                state.camera.to_screen(world),
                size,
                colors::WALL,
                wall_opacity(c, r),
            ));
        }
    }
}

/// One icon per remaining life, right-aligned along the top edge
fn push_status_bar(state: &GameState, frame: &mut Vec<DrawPrimitive>) {
    let radius = state.player.radius() / LIFE_ICON_SHRINK;
    let right = state.camera.viewport.x;
    for i in 0..state.player.lives {
        let center = Vec2::new(
            right - LIFE_ICON_SPACING * i as f32 - LIFE_ICON_MARGIN,
            LIFE_ICON_MARGIN,
        );
        frame.push(DrawPrimitive::outlined_circle(
            center,
            radius,
            colors::PLAYER,
            colors::LIFE_STROKE,
        ));
    }
}
