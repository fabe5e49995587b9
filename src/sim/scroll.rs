//! Ground scrolling
//!
//! The ground is a fixed set of tiles inside the scroll layer. Each tick the
//! layer slides left; a tile whose center has passed `-width / 2` in scene
//! space is moved to `world_width / 2 + width`, keeping its height. Tiles
//! are never created or destroyed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layer::Layer;
use super::state::GameEvent;
use crate::scene::SegmentDesc;

/// One ground tile, positioned in scroll-layer space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSegment {
    pub width: f32,
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollManager {
    pub layer: Layer,
    pub segments: Vec<ScrollSegment>,
}

impl ScrollManager {
    pub fn new(origin: Vec2, tiles: &[SegmentDesc]) -> Self {
        Self {
            layer: Layer::new(origin),
            segments: tiles
                .iter()
                .map(|tile| ScrollSegment {
                    width: tile.width,
                    pos: tile.position,
                })
                .collect(),
        }
    }

    /// Slide the layer and recycle tiles that left the screen
    pub fn scroll(&mut self, world_width: f32, speed: f32, dt: f32, events: &mut Vec<GameEvent>) {
        self.layer.scroll(speed, dt);

        for (index, segment) in self.segments.iter_mut().enumerate() {
            let world = self.layer.to_world(segment.pos);
            if world.x <= -segment.width / 2.0 {
                let trailing = Vec2::new(world_width / 2.0 + segment.width, world.y);
                segment.pos = self.layer.to_local(trailing);
                log::debug!("Recycled ground tile {index} to x={}", trailing.x);
                events.push(GameEvent::SegmentRecycled { index });
            }
        }
    }

    /// Tile centers in scene space
    pub fn world_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.segments.iter().map(|s| self.layer.to_world(s.pos))
    }
}
