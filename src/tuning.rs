//! Data-driven game balance
//!
//! Every field defaults to the matching value in `consts`, so a tuning file
//! only needs the knobs it wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Side of a map cell in world units
    pub tile_size: f32,
    /// Visible area width
    pub viewport_width: f32,
    /// Visible area height
    pub viewport_height: f32,

    // === Movement ===
    pub player_speed: f32,
    pub enemy_speed: f32,

    // === Lives ===
    pub lives: u32,
    /// Contact immunity after a life loss (seconds)
    pub immortality_secs: f32,

    // === Enemy AI ===
    /// Pursuit lock duration (seconds)
    pub pursuit_secs: f32,
    /// Sight ray length in tiles
    pub sight_tiles: u32,

    // === Camera ===
    pub camera_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,

            lives: START_LIVES,
            immortality_secs: IMMORTALITY_SECS,

            pursuit_secs: PURSUIT_SECS,
            sight_tiles: SIGHT_TILES,

            camera_rate: CAMERA_RATE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("tile_size", self.tile_size),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("immortality_secs", self.immortality_secs),
            ("pursuit_secs", self.pursuit_secs),
            ("camera_rate", self.camera_rate),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NonPositive(field));
            }
        }
        if self.lives == 0 {
            return Err(TuningError::NonPositive("lives"));
        }
        if self.sight_tiles == 0 {
            return Err(TuningError::NonPositive("sight_tiles"));
        }
        Ok(())
    }

    /// Collision radius shared by the player and enemies
    #[inline]
    pub fn body_radius(&self) -> f32 {
        self.tile_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.lives, 3);
        assert_eq!(tuning.player_speed, 200.0);
        assert_eq!(tuning.enemy_speed, 210.0);
        assert_eq!(tuning.body_radius(), 15.0);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "enemy_speed": 150.0, "lives": 5 }"#).unwrap();
        assert_eq!(tuning.enemy_speed, 150.0);
        assert_eq!(tuning.lives, 5);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
        assert_eq!(tuning.tile_size, TILE_SIZE);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "tile_size": 0.0 }"#),
            Err(TuningError::NonPositive("tile_size"))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "lives": 0 }"#),
            Err(TuningError::NonPositive("lives"))
        ));
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Tuning::load("/definitely/not/here.json"),
            Err(TuningError::Io(_))
        ));
    }
}
