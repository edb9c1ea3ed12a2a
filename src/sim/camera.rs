//! Smoothed follow camera, clamped to the map

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Top-left corner of the viewport in world units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    /// Start centered on `target`, already clamped
    pub fn new(target: Vec2, viewport: Vec2, map_extent: Vec2) -> Self {
        let mut camera = Self {
            pos: target - viewport / 2.0,
            viewport,
        };
        camera.clamp_to(map_extent);
        camera
    }

    /// Ease toward centering `target`, then clamp.
    ///
    /// The blend factor `1 - e^(-rate * dt)` is frame-rate independent and
    /// never overshoots, even for a very long tick.
    pub fn update(&mut self, target: Vec2, map_extent: Vec2, rate: f32, dt: f32) {
        let goal = target - self.viewport / 2.0;
        let t = 1.0 - (-rate * dt.max(0.0)).exp();
        self.pos = self.pos.lerp(goal, t);
        self.clamp_to(map_extent);
    }

    /// Keep the viewport inside `[0, extent - viewport]` on both axes.
    ///
    /// A map smaller than the viewport pins that axis to 0.
    pub fn clamp_to(&mut self, map_extent: Vec2) {
        let max = (map_extent - self.viewport).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }

    /// World to screen
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
    const EXTENT: Vec2 = Vec2::new(1170.0, 870.0);

    #[test]
    fn test_starts_centered_and_clamped() {
        let camera = Camera::new(Vec2::new(585.0, 435.0), VIEWPORT, EXTENT);
        assert_eq!(camera.pos, Vec2::new(185.0, 135.0));

        let corner = Camera::new(Vec2::ZERO, VIEWPORT, EXTENT);
        assert_eq!(corner.pos, Vec2::ZERO);
    }

    #[test]
    fn test_eases_instead_of_snapping() {
        let mut camera = Camera::new(Vec2::new(400.0, 300.0), VIEWPORT, EXTENT);
        assert_eq!(camera.pos, Vec2::ZERO);

        camera.update(Vec2::new(700.0, 300.0), EXTENT, 7.0, 1.0 / 60.0);
        // Moved toward 300, but only part of the way
        assert!(camera.pos.x > 0.0 && camera.pos.x < 300.0);
        assert_eq!(camera.pos.y, 0.0);

        for _ in 0..600 {
            camera.update(Vec2::new(700.0, 300.0), EXTENT, 7.0, 1.0 / 60.0);
        }
        assert!((camera.pos.x - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_map_smaller_than_viewport_pins_to_origin() {
        let mut camera = Camera::new(Vec2::new(500.0, 500.0), VIEWPORT, Vec2::new(150.0, 150.0));
        assert_eq!(camera.pos, Vec2::ZERO);
        camera.update(Vec2::new(1000.0, 1000.0), Vec2::new(150.0, 150.0), 7.0, 0.5);
        assert_eq!(camera.pos, Vec2::ZERO);
    }

    #[test]
    fn test_to_screen() {
        let camera = Camera::new(Vec2::new(585.0, 435.0), VIEWPORT, EXTENT);
        assert_eq!(camera.to_screen(Vec2::new(585.0, 435.0)), Vec2::new(400.0, 300.0));
    }

    proptest! {
        #[test]
        fn prop_camera_stays_in_bounds(
            tx in -5000.0f32..5000.0,
            ty in -5000.0f32..5000.0,
            dt in 0.0f32..2.0,
            steps in 1usize..20,
        ) {
            let mut camera = Camera::new(Vec2::new(tx, ty), VIEWPORT, EXTENT);
            for _ in 0..steps {
                camera.update(Vec2::new(tx, ty), EXTENT, 7.0, dt);
                prop_assert!(camera.pos.x >= 0.0 && camera.pos.x <= EXTENT.x - VIEWPORT.x);
                prop_assert!(camera.pos.y >= 0.0 && camera.pos.y <= EXTENT.y - VIEWPORT.y);
            }
        }
    }
}
