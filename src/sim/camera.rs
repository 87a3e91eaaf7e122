//! Camera that follows a target within world bounds
//!
//! `follow` is a pure clamp: same target and extents always produce the same
//! origin, with no hidden state. When the world is smaller than the viewport
//! the origin pins to 0 rather than going negative.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport origin tracker. `origin` is the top-left corner of the visible
/// region in world coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub origin: Vec2,
}

impl Camera {
    pub fn new(viewport_width: i32, viewport_height: i32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            origin: Vec2::ZERO,
        }
    }

    /// Center the viewport on `target`, clamping each axis into
    /// `[0, max(0, world - viewport)]`.
    pub fn follow(&mut self, target: Vec2, world_width: i32, world_height: i32) {
        let desired_x = target.x - self.viewport_width as f32 * 0.5;
        let desired_y = target.y - self.viewport_height as f32 * 0.5;
        let max_x = ((world_width - self.viewport_width) as f32).max(0.0);
        let max_y = ((world_height - self.viewport_height) as f32).max(0.0);
        self.origin.x = desired_x.clamp(0.0, max_x);
        self.origin.y = desired_y.clamp(0.0, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_follow_centers_on_target() {
        let mut cam = Camera::new(800, 600);
        cam.follow(Vec2::new(1000.0, 700.0), 3200, 2400);
        assert_eq!(cam.origin, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_follow_clamps_to_world_edges() {
        let mut cam = Camera::new(800, 600);
        cam.follow(Vec2::new(10.0, 10.0), 3200, 2400);
        assert_eq!(cam.origin, Vec2::ZERO);
        cam.follow(Vec2::new(3190.0, 2390.0), 3200, 2400);
        assert_eq!(cam.origin, Vec2::new(2400.0, 1800.0));
    }

    #[test]
    fn test_world_smaller_than_viewport_pins_to_zero() {
        let mut cam = Camera::new(800, 600);
        cam.follow(Vec2::new(200.0, 100.0), 400, 300);
        assert_eq!(cam.origin, Vec2::ZERO);
    }

    #[test]
    fn test_follow_is_idempotent() {
        let mut cam = Camera::new(800, 600);
        cam.follow(Vec2::new(123.4, 567.8), 3200, 2400);
        let first = cam.origin;
        cam.follow(Vec2::new(123.4, 567.8), 3200, 2400);
        assert_eq!(cam.origin, first);
    }

    proptest! {
        /// Origin always lands in [0, max(0, world - viewport)] per axis.
        #[test]
        fn prop_origin_in_bounds(
            tx in -1e4f32..1e4,
            ty in -1e4f32..1e4,
            world_w in 1i32..5000,
            world_h in 1i32..5000,
            view_w in 1i32..2000,
            view_h in 1i32..2000,
        ) {
            let mut cam = Camera::new(view_w, view_h);
            cam.follow(Vec2::new(tx, ty), world_w, world_h);
            let max_x = (world_w - view_w).max(0) as f32;
            let max_y = (world_h - view_h).max(0) as f32;
            prop_assert!(cam.origin.x >= 0.0 && cam.origin.x <= max_x);
            prop_assert!(cam.origin.y >= 0.0 && cam.origin.y <= max_y);
        }
    }
}
