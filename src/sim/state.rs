//! Round state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::PlayerBody;
use super::collision::Contact;
use super::pool::ObstacleId;
use super::scroll::ScrollManager;
use super::spawner::ObstacleSpawner;
use crate::error::SetupError;
use crate::scene::{ResolvedScene, SceneDescription};
use crate::tuning::Tuning;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player is flying, world is scrolling
    #[default]
    Active,
    /// First contact happened; absorbing until a new round is built
    GameOver,
}

/// Sound cues the presentation layer may play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    Flap,
}

/// Things that happened during a tick, drained by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fire-and-forget sound request
    PlaySound(SoundEffect),
    /// A new obstacle exists at `world` (scene space at spawn time)
    ObstacleSpawned { id: ObstacleId, world: Vec2 },
    /// The obstacle left the screen and its handle was released
    ObstacleDespawned { id: ObstacleId },
    /// A ground tile was moved to the trailing edge
    SegmentRecycled { index: usize },
    /// The round is over; restart may be offered
    RoundEnded { contact: Contact },
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the spawn RNG was built from
    pub seed: u64,
    pub tuning: Tuning,
    /// Visible world size
    pub world_size: Vec2,
    pub phase: GamePhase,
    pub player: PlayerBody,
    /// Seconds since the last accepted tap
    pub since_touch: f32,
    pub ground: ScrollManager,
    pub obstacles: ObstacleSpawner,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Pending events (not gameplay-affecting)
    pub events: Vec<GameEvent>,
    scene: ResolvedScene,
}

impl GameState {
    /// Default scene and tuning with the given seed
    pub fn new(seed: u64) -> Self {
        Self::assemble(ResolvedScene::default(), Tuning::default(), seed)
    }

    /// Default scene and tuning, seeded from process entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Build a round from a scene description; every missing reference is fatal here
    pub fn from_scene(
        scene: &SceneDescription,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, SetupError> {
        tuning.validate()?;
        let resolved = scene.resolve()?;
        Ok(Self::assemble(resolved, tuning, seed))
    }

    fn assemble(scene: ResolvedScene, tuning: Tuning, seed: u64) -> Self {
        log::info!(
            "Round assembled (seed {seed}, {} ground tiles)",
            scene.ground.len()
        );
        Self {
            seed,
            world_size: scene.world_size,
            phase: GamePhase::Active,
            player: PlayerBody::new(scene.player),
            since_touch: 0.0,
            ground: ScrollManager::new(scene.scroll_layer, &scene.ground),
            obstacles: ObstacleSpawner::new(scene.obstacle_layer),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            tuning,
            scene,
        }
    }

    /// A fresh round over the same scene and tuning
    pub fn restart(&self, seed: u64) -> Self {
        log::info!("Restarting round (seed {seed})");
        Self::assemble(self.scene.clone(), self.tuning.clone(), seed)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Restart control should be shown only once the round is over
    #[inline]
    pub fn restart_visible(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_active() {
        let state = GameState::new(7);
        assert!(state.is_active());
        assert!(!state.restart_visible());
        assert_eq!(state.ground.segments.len(), 2);
        assert!(state.obstacles.pool.is_empty());
        assert!(state.player.flapping);
        assert_eq!(state.since_touch, 0.0);
    }

    #[test]
    fn test_from_scene_rejects_bad_tuning() {
        let tuning = Tuning {
            spawn_interval: -1.0,
            ..Default::default()
        };
        let result = GameState::from_scene(&SceneDescription::default(), tuning, 1);
        assert!(matches!(result, Err(SetupError::InvalidTuning { .. })));
    }

    #[test]
    fn test_restart_builds_fresh_round() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::GameOver;
        state.player.rotation_locked = true;
        state.time_ticks = 500;
        state.tuning.scroll_speed = 90.0;

        let fresh = state.restart(4);
        assert!(fresh.is_active());
        assert!(!fresh.player.rotation_locked);
        assert_eq!(fresh.time_ticks, 0);
        assert_eq!(fresh.seed, 4);
        assert_eq!(fresh.tuning.scroll_speed, 90.0);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1);
        state.events.push(GameEvent::PlaySound(SoundEffect::Flap));
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.events.is_empty());
    }
}
