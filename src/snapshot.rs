//! Presentation snapshot
//!
//! A flat, serializable picture of one round in scene space. The
//! presentation layer needs nothing else to draw a frame or decide
//! whether to show the restart control.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, ObstacleId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub rotation: f32,
    pub flapping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: ObstacleId,
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub restart_visible: bool,
    pub player: PlayerView,
    /// Ground tile centers
    pub ground: Vec<Vec2>,
    pub obstacles: Vec<ObstacleView>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            restart_visible: state.restart_visible(),
            player: PlayerView {
                pos: state.player.pos,
                rotation: state.player.rotation,
                flapping: state.player.flapping,
            },
            ground: state.ground.world_positions().collect(),
            obstacles: state
                .obstacles
                .world_positions()
                .map(|(id, pos)| ObstacleView { id, pos })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{BodyKind, Contact, TickInput, on_contact_begin, tick};

    #[test]
    fn test_capture_fresh_round() {
        let state = GameState::new(8);
        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(!snap.restart_visible);
        assert_eq!(snap.ground, vec![Vec2::new(160.0, 40.0), Vec2::new(480.0, 40.0)]);
        assert!(snap.obstacles.is_empty());
    }

    #[test]
    fn test_capture_shows_restart_after_game_over() {
        let mut state = GameState::new(8);
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        on_contact_begin(&mut state, Contact::new(BodyKind::Player, BodyKind::Ground));
        let snap = RenderSnapshot::capture(&state);
        assert!(snap.restart_visible);
        assert!(!snap.player.flapping);
        assert_eq!(snap.obstacles.len(), 1);
    }

    #[test]
    fn test_json_contains_phase() {
        let json = RenderSnapshot::capture(&GameState::new(1)).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Active");
        assert_eq!(value["restart_visible"], false);
    }
}
