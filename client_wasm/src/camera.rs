//! Camera for the Asteroids canvas
//!
//! Simple 2D orthographic camera: world (0, 0)..(width, height) with +y up
//! onto canvas pixels with +y down.

use glam::{Affine2, Vec2};

/// Camera struct
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub world_to_screen: Affine2,
    pub scale: f32,
}

impl Camera {
    /// Fit a `world` sized area into a `canvas` sized viewport.
    /// World height always spans the canvas height.
    pub fn orthographic(world: Vec2, canvas: Vec2) -> Self {
        let scale = if world.y > 0.0 { canvas.y / world.y } else { 1.0 };
        let world_to_screen = Affine2::from_translation(Vec2::new(0.0, canvas.y))
            * Affine2::from_scale(Vec2::new(scale, -scale));
        Self {
            world_to_screen,
            scale,
        }
    }

    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        self.world_to_screen.transform_point2(point)
    }
}
