//! Static wall grid
//!
//! The map is a fixed grid of markers loaded once. Collision queries only look
//! at a 3x3 cell neighborhood around the query box, which assumes nothing
//! moves more than about one tile per tick (see `MovableBody::advance`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use std::path::Path;

use crate::error::{self, MapError};

/// What occupies a single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Wall,
    Open,
    PlayerSpawn,
    EnemySpawn,
}

impl Marker {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Marker::Wall),
            ' ' => Some(Marker::Open),
            'P' => Some(Marker::PlayerSpawn),
            'E' => Some(Marker::EnemySpawn),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        *self == Marker::Wall
    }
}

/// Integer cell coordinates (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Half-width of the collision search window, in cells
const SEARCH_RADIUS: i64 = 1;

/// Immutable wall/open grid
///
/// Deserializing goes through the same validation as parsing; the stored
/// spawn lists are recomputed from the cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTileMap")]
pub struct TileMap {
    width: usize,
    height: usize,
    tile_size: f32,
    /// Row-major cell markers
    cells: Vec<Marker>,
    player_spawn: GridPos,
    enemy_spawns: Vec<GridPos>,
}

/// Unchecked serialized form of `TileMap`
#[derive(Deserialize)]
struct RawTileMap {
    width: usize,
    height: usize,
    tile_size: f32,
    cells: Vec<Marker>,
}

impl TryFrom<RawTileMap> for TileMap {
    type Error = MapError;

    fn try_from(raw: RawTileMap) -> Result<Self, MapError> {
        TileMap::from_markers(raw.width, raw.height, raw.cells, raw.tile_size)
    }
}

impl TileMap {
    /// Parse a text pattern, one row per line.
    ///
    /// Empty lines before the first row and after the last are ignored, so
    /// patterns can be written as raw string literals starting on a new line.
    /// A line of spaces is a row of open cells, not padding.
    pub fn parse(pattern: &str, tile_size: f32) -> Result<Self, MapError> {
        let lines: Vec<&str> = pattern.lines().collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let rows = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(MapError::Empty),
        };

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let marker =
                    Marker::from_char(ch).ok_or(MapError::UnknownMarker { ch, row, col })?;
                cells.push(marker);
            }
        }

        Self::from_markers(width, rows.len(), cells, tile_size)
    }

    /// Read and parse a pattern file
    pub fn load(path: impl AsRef<Path>, tile_size: f32) -> error::Result<Self> {
        let path = path.as_ref();
        let pattern = std::fs::read_to_string(path)?;
        log::info!("Loading map from {}", path.display());
        Ok(Self::parse(&pattern, tile_size)?)
    }

    /// Build a map from an already-decoded row-major marker grid
    pub fn from_markers(
        width: usize,
        height: usize,
        cells: Vec<Marker>,
        tile_size: f32,
    ) -> Result<Self, MapError> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(MapError::InvalidTileSize(tile_size));
        }
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        if width < 3 || height < 3 {
            return Err(MapError::TooSmall { width, height });
        }
        if cells.len() != width * height {
            return Err(MapError::CellCount {
                expected: width * height,
                actual: cells.len(),
            });
        }

        let mut map = Self {
            width,
            height,
            tile_size,
            cells,
            player_spawn: GridPos::new(0, 0),
            enemy_spawns: Vec::new(),
        };

        map.player_spawn = map
            .coordinates_of(Marker::PlayerSpawn)
            .first()
            .copied()
            .ok_or(MapError::MissingSpawn(Marker::PlayerSpawn))?;
        map.enemy_spawns = map.coordinates_of(Marker::EnemySpawn);

        log::info!(
            "Map loaded: {}x{} cells, tile {}, {} enemy spawns",
            width,
            height,
            tile_size,
            map.enemy_spawns.len()
        );

        Ok(map)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Map size in world units
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }

    /// First player spawn marker in row-major order
    pub fn player_spawn(&self) -> GridPos {
        self.player_spawn
    }

    pub fn enemy_spawns(&self) -> &[GridPos] {
        &self.enemy_spawns
    }

    /// Marker at a cell, `None` outside the grid
    pub fn marker_at(&self, x: usize, y: usize) -> Option<Marker> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.marker_at(x, y).is_some_and(|m| m.is_wall())
    }

    /// All cells holding `marker`, in row-major order
    pub fn coordinates_of(&self, marker: Marker) -> Vec<GridPos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == marker)
            .map(|(i, _)| GridPos::new(i % self.width, i / self.width))
            .collect()
    }

    /// World position of a cell's center
    pub fn cell_center(&self, pos: GridPos) -> Vec2 {
        Vec2::new(
            pos.x as f32 * self.tile_size + self.tile_size / 2.0,
            pos.y as f32 * self.tile_size + self.tile_size / 2.0,
        )
    }

    /// Test an axis-aligned box against walls.
    ///
    /// Only the 3x3 cells around `ceil(x / tile), ceil(y / tile)` are searched,
    /// with the window shifted to stay inside the grid. Cells outside the grid
    /// are never walls.
    pub fn collides(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        let tile = self.tile_size;
        let on_col = self.window_center((x / tile).ceil(), self.width);
        let on_row = self.window_center((y / tile).ceil(), self.height);

        for row in (on_row - SEARCH_RADIUS)..=(on_row + SEARCH_RADIUS) {
            for col in (on_col - SEARCH_RADIUS)..=(on_col + SEARCH_RADIUS) {
                if !self.is_wall(col as usize, row as usize) {
                    continue;
                }
                let cell_x = col as f32 * tile;
                let cell_y = row as f32 * tile;
                if x + w > cell_x && x < cell_x + tile && y + h > cell_y && y < cell_y + tile {
                    return true;
                }
            }
        }

        false
    }

    /// Clamp a search-window center so the whole window stays in `0..len`
    fn window_center(&self, index: f32, len: usize) -> i64 {
        // `as` saturates, and NaN maps to 0
        (index as i64).clamp(SEARCH_RADIUS, len as i64 - 1 - SEARCH_RADIUS)
    }
}
