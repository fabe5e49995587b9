//! Obstacle template binding
//!
//! The simulation only knows obstacle ids and positions. A host turns each
//! id into something it can draw or collide with through an
//! `ObstacleTemplate`, and `ObstacleMirror` keeps exactly one instance per
//! live obstacle by replaying the round's events. `destroy` takes the
//! instance by value, so an instance can be destroyed once at most.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, GameState, ObstacleId};

/// Factory for host-side obstacle objects
pub trait ObstacleTemplate {
    type Instance;

    fn instantiate(&mut self) -> Self::Instance;
    fn set_position(&mut self, instance: &mut Self::Instance, world: Vec2);
    fn destroy(&mut self, instance: Self::Instance);
}

/// Host-side instances kept in step with a round's obstacle pool
pub struct ObstacleMirror<T: ObstacleTemplate> {
    template: T,
    live: BTreeMap<ObstacleId, T::Instance>,
}

impl<T: ObstacleTemplate> ObstacleMirror<T> {
    pub fn new(template: T) -> Self {
        Self {
            template,
            live: BTreeMap::new(),
        }
    }

    /// Apply one round event; events unrelated to obstacles are ignored
    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::ObstacleSpawned { id, world } => {
                let mut instance = self.template.instantiate();
                self.template.set_position(&mut instance, world);
                if let Some(stale) = self.live.insert(id, instance) {
                    log::warn!("Obstacle {}:{} spawned twice", id.index, id.generation);
                    self.template.destroy(stale);
                }
            }
            GameEvent::ObstacleDespawned { id } => {
                if let Some(instance) = self.live.remove(&id) {
                    self.template.destroy(instance);
                }
            }
            _ => {}
        }
    }

    /// Move every instance to its obstacle's current scene position
    pub fn sync(&mut self, state: &GameState) {
        for (id, world) in state.obstacles.world_positions() {
            if let Some(instance) = self.live.get_mut(&id) {
                self.template.set_position(instance, world);
            }
        }
    }

    /// Destroy every instance (round teardown)
    pub fn clear(&mut self) {
        for (_, instance) in std::mem::take(&mut self.live) {
            self.template.destroy(instance);
        }
    }

    pub fn instances(&self) -> impl Iterator<Item = (ObstacleId, &T::Instance)> {
        self.live.iter().map(|(id, instance)| (*id, instance))
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn template(&self) -> &T {
        &self.template
    }
}

/// Shape of the standard obstacle: a column with a gap the player flies through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleShape {
    pub half_width: f32,
    pub gap_half_height: f32,
}

impl Default for ObstacleShape {
    fn default() -> Self {
        Self {
            half_width: 26.0,
            gap_half_height: 70.0,
        }
    }
}

/// Collision geometry of one placed obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleCollider {
    /// Gap center in scene space
    pub center: Vec2,
    pub shape: ObstacleShape,
}

/// Template that builds collision geometry for the headless host
#[derive(Debug, Clone, Default)]
pub struct ColliderTemplate {
    pub shape: ObstacleShape,
    pub instantiated: u64,
    pub destroyed: u64,
}

impl ColliderTemplate {
    pub fn new(shape: ObstacleShape) -> Self {
        Self {
            shape,
            ..Default::default()
        }
    }
}

impl ObstacleTemplate for ColliderTemplate {
    type Instance = ObstacleCollider;

    fn instantiate(&mut self) -> ObstacleCollider {
        self.instantiated += 1;
        ObstacleCollider {
            center: Vec2::ZERO,
            shape: self.shape,
        }
    }

    fn set_position(&mut self, instance: &mut ObstacleCollider, world: Vec2) {
        instance.center = world;
    }

    fn destroy(&mut self, _instance: ObstacleCollider) {
        self.destroyed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_mirror_follows_spawn_and_despawn() {
        let mut state = GameState::new(4);
        let mut mirror = ObstacleMirror::new(ColliderTemplate::default());

        // 90 ticks spawn, 132 more carry it past the left edge
        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            for event in state.drain_events() {
                mirror.apply(&event);
            }
            mirror.sync(&state);
            assert_eq!(mirror.len(), state.obstacles.pool.len());
        }

        let template = mirror.template();
        assert_eq!(template.instantiated, 3);
        assert_eq!(template.destroyed, 1);
    }

    #[test]
    fn test_sync_moves_instances() {
        let mut state = GameState::new(4);
        let mut mirror = ObstacleMirror::new(ColliderTemplate::default());
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            for event in state.drain_events() {
                mirror.apply(&event);
            }
        }
        mirror.sync(&state);
        let (id, collider) = mirror.instances().next().unwrap();
        let world = state
            .obstacles
            .world_positions()
            .find(|(i, _)| *i == id)
            .map(|(_, w)| w)
            .unwrap();
        assert_eq!(collider.center, world);
        assert!(collider.center.x < 352.0);
    }

    #[test]
    fn test_unknown_despawn_is_harmless() {
        let mut mirror = ObstacleMirror::new(ColliderTemplate::default());
        mirror.apply(&GameEvent::ObstacleDespawned {
            id: ObstacleId {
                index: 9,
                generation: 0,
            },
        });
        assert_eq!(mirror.template().destroyed, 0);
    }

    #[test]
    fn test_clear_destroys_everything() {
        let mut mirror = ObstacleMirror::new(ColliderTemplate::default());
        for index in 0..3 {
            mirror.apply(&GameEvent::ObstacleSpawned {
                id: ObstacleId {
                    index,
                    generation: 0,
                },
                world: Vec2::new(352.0, 300.0),
            });
        }
        mirror.clear();
        assert!(mirror.is_empty());
        assert_eq!(mirror.template().destroyed, 3);
    }
}
