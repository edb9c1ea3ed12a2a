//! Load-time error types
//!
//! The simulation itself never fails; only map and tuning loading can.

use thiserror::Error;

use crate::sim::map::Marker;

/// Problems found while building a tile map from marker data
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("map contains no rows")]
    Empty,
    #[error("row {row} has width {actual}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown marker {ch:?} at row {row}, column {col}")]
    UnknownMarker { ch: char, row: usize, col: usize },
    #[error("map has no {0:?} marker")]
    MissingSpawn(Marker),
    #[error("map is {width}x{height}, needs at least 3x3 cells")]
    TooSmall { width: usize, height: usize },
    #[error("tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),
    #[error("marker grid has {actual} cells, expected {expected}")]
    CellCount { expected: usize, actual: usize },
}

/// Problems loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("non-positive value for {0}")]
    NonPositive(&'static str),
}

/// Anything that can go wrong while setting up a session from files
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

pub type Result<T> = std::result::Result<T, Error>;
