//! Container coordinate spaces
//!
//! A layer is a translated child space of the scene. Scrolling moves the
//! layer origin; children keep their local positions until recycled.
//! - world = local + origin
//! - local = world - origin

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Layer {
    /// Origin of the layer in scene space
    pub origin: Vec2,
}

impl Layer {
    pub fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    /// Convert a layer-local point to scene space
    #[inline]
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        local + self.origin
    }

    /// Convert a scene-space point into this layer
    #[inline]
    pub fn to_local(&self, world: Vec2) -> Vec2 {
        world - self.origin
    }

    /// Shift the layer left by `speed * dt`
    #[inline]
    pub fn scroll(&mut self, speed: f32, dt: f32) {
        self.origin.x -= speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_local_inverse() {
        let layer = Layer::new(Vec2::new(-37.5, 12.0));
        let world = Vec2::new(100.0, 200.0);
        let local = layer.to_local(world);
        assert_eq!(local, Vec2::new(137.5, 188.0));
        assert_eq!(layer.to_world(local), world);
    }

    #[test]
    fn test_scroll_moves_left_only() {
        let mut layer = Layer::default();
        layer.scroll(160.0, 0.5);
        assert_eq!(layer.origin, Vec2::new(-80.0, 0.0));
    }
}
