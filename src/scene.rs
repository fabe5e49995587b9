//! Scene layout
//!
//! Describes the nodes a round is assembled from: the world size, where the
//! player starts, the two scrolling containers and the ground tiles inside
//! the scroll layer. Absent references are reported at setup and never
//! reach the tick.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SetupError, read_file};

/// One ground tile, positioned in scroll-layer space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentDesc {
    pub width: f32,
    pub position: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Visible world size (scene space)
    pub world_size: Vec2,
    /// Player start position (scene space)
    #[serde(default)]
    pub player: Option<Vec2>,
    /// Scroll layer origin (scene space)
    #[serde(default)]
    pub scroll_layer: Option<Vec2>,
    /// Obstacle layer origin (scene space)
    #[serde(default)]
    pub obstacle_layer: Option<Vec2>,
    /// Ground tiles, left to right
    #[serde(default)]
    pub ground: Vec<SegmentDesc>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        ResolvedScene::default().into()
    }
}

/// Scene references resolved and checked, ready to build a round from
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScene {
    pub world_size: Vec2,
    pub player: Vec2,
    pub scroll_layer: Vec2,
    pub obstacle_layer: Vec2,
    pub ground: Vec<SegmentDesc>,
}

impl Default for ResolvedScene {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            player: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            scroll_layer: Vec2::ZERO,
            obstacle_layer: Vec2::ZERO,
            ground: vec![
                SegmentDesc {
                    width: GROUND_TILE_WIDTH,
                    position: Vec2::new(GROUND_TILE_WIDTH / 2.0, GROUND_TILE_Y),
                },
                SegmentDesc {
                    width: GROUND_TILE_WIDTH,
                    position: Vec2::new(GROUND_TILE_WIDTH * 1.5, GROUND_TILE_Y),
                },
            ],
        }
    }
}

impl From<ResolvedScene> for SceneDescription {
    fn from(scene: ResolvedScene) -> Self {
        Self {
            world_size: scene.world_size,
            player: Some(scene.player),
            scroll_layer: Some(scene.scroll_layer),
            obstacle_layer: Some(scene.obstacle_layer),
            ground: scene.ground,
        }
    }
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        serde_json::from_str(json).map_err(|source| SetupError::Parse {
            what: "scene",
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let scene = Self::from_json(&read_file(path)?)?;
        log::info!("Loaded scene from {}", path.display());
        Ok(scene)
    }

    /// Resolve every required reference, failing on the first one missing
    pub fn resolve(&self) -> Result<ResolvedScene, SetupError> {
        let world = self.world_size;
        if !(world.x > 0.0 && world.y > 0.0) {
            return Err(SetupError::InvalidWorld {
                width: world.x,
                height: world.y,
            });
        }

        let player = self.player.ok_or(SetupError::MissingReference("player"))?;
        let scroll_layer = self
            .scroll_layer
            .ok_or(SetupError::MissingReference("scroll_layer"))?;
        let obstacle_layer = self
            .obstacle_layer
            .ok_or(SetupError::MissingReference("obstacle_layer"))?;

        if self.ground.is_empty() {
            return Err(SetupError::MissingReference("ground"));
        }
        for (index, segment) in self.ground.iter().enumerate() {
            if !(segment.width > 0.0) {
                return Err(SetupError::InvalidSegment {
                    index,
                    width: segment.width,
                });
            }
        }

        let covered: f32 = self.ground.iter().map(|s| s.width).sum();
        if covered < world.x {
            log::warn!(
                "Ground tiles cover {covered} of {} world units; expect a seam",
                world.x
            );
        }

        Ok(ResolvedScene {
            world_size: world,
            player,
            scroll_layer,
            obstacle_layer,
            ground: self.ground.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_resolves() {
        let resolved = SceneDescription::default().resolve().unwrap();
        assert_eq!(resolved.ground.len(), 2);
        assert_eq!(resolved.player, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_missing_player_is_fatal() {
        let json = r#"{
            "world_size": [320.0, 568.0],
            "scroll_layer": [0.0, 0.0],
            "obstacle_layer": [0.0, 0.0],
            "ground": [{ "width": 320.0, "position": [160.0, 40.0] }]
        }"#;
        let scene = SceneDescription::from_json(json).unwrap();
        let err = scene.resolve().unwrap_err();
        assert!(matches!(err, SetupError::MissingReference("player")));
    }

    #[test]
    fn test_missing_ground_is_fatal() {
        let scene = SceneDescription {
            ground: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            scene.resolve(),
            Err(SetupError::MissingReference("ground"))
        ));
    }

    #[test]
    fn test_zero_width_segment_rejected() {
        let mut scene = SceneDescription::default();
        scene.ground[1].width = 0.0;
        assert!(matches!(
            scene.resolve(),
            Err(SetupError::InvalidSegment { index: 1, .. })
        ));
    }

    #[test]
    fn test_negative_world_rejected() {
        let scene = SceneDescription {
            world_size: Vec2::new(-1.0, 568.0),
            ..Default::default()
        };
        assert!(matches!(scene.resolve(), Err(SetupError::InvalidWorld { .. })));
    }
}
