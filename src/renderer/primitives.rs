//! Draw primitives handed to the host renderer

use glam::Vec2;
use serde::Serialize;

/// Linear RGB, each channel in 0..=1
pub type Color = [f32; 3];

/// What to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    /// Axis-aligned rectangle; `pos` is its top-left corner
    Rect { size: Vec2 },
    /// Filled circle; `pos` is its center
    Circle {
        radius: f32,
        stroke: Option<Color>,
    },
    /// Text centered on `pos`
    Text { text: String, size: f32 },
}

/// One shape in screen space, already offset by the camera
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawPrimitive {
    pub shape: Shape,
    pub pos: Vec2,
    pub color: Color,
    pub opacity: f32,
}

impl DrawPrimitive {
    pub fn rect(pos: Vec2, size: Vec2, color: Color, opacity: f32) -> Self {
        Self {
            shape: Shape::Rect { size },
            pos,
            color,
            opacity,
        }
    }

    pub fn circle(center: Vec2, radius: f32, color: Color, opacity: f32) -> Self {
        Self {
            shape: Shape::Circle {
                radius,
                stroke: None,
            },
            pos: center,
            color,
            opacity,
        }
    }

    /// Filled circle with an outline
    pub fn outlined_circle(center: Vec2, radius: f32, fill: Color, stroke: Color) -> Self {
        Self {
            shape: Shape::Circle {
                radius,
                stroke: Some(stroke),
            },
            pos: center,
            color: fill,
            opacity: 1.0,
        }
    }

    pub fn text(center: Vec2, text: impl Into<String>, size: f32, color: Color) -> Self {
        Self {
            shape: Shape::Text {
                text: text.into(),
                size,
            },
            pos: center,
            color,
            opacity: 1.0,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0];
    pub const WALL: Color = [0.0, 0.0, 0.0];
    pub const PLAYER: Color = [0.0, 0.0, 1.0];
    pub const ENEMY: Color = [1.0, 0.0, 0.0];
    pub const LIFE_STROKE: Color = [1.0, 1.0, 1.0];
    pub const OVERLAY: Color = [0.0, 0.0, 0.0];
    pub const OVERLAY_TEXT: Color = [1.0, 1.0, 1.0];
}
