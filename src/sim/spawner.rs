//! Obstacle spawning
//!
//! Obstacles live in their own layer that scrolls at the ground's speed.
//! Each tick: slide the layer, release obstacles that reached the left
//! edge, then advance the spawn timer and place at most one new obstacle
//! just past the right edge at a random height.

use glam::Vec2;
use rand::Rng;

use super::layer::Layer;
use super::pool::{Obstacle, ObstacleId, ObstaclePool};
use super::state::GameEvent;
use crate::consts::TIMER_EPSILON;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default)]
pub struct ObstacleSpawner {
    pub layer: Layer,
    pub pool: ObstaclePool,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
}

impl ObstacleSpawner {
    pub fn new(origin: Vec2) -> Self {
        Self {
            layer: Layer::new(origin),
            pool: ObstaclePool::new(),
            spawn_timer: 0.0,
        }
    }

    /// Advance one tick. Returns the obstacle spawned this tick, if any.
    pub fn update<R: Rng>(
        &mut self,
        tuning: &Tuning,
        dt: f32,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> Option<ObstacleId> {
        self.layer.scroll(tuning.scroll_speed, dt);

        // Collect first; removing while iterating the pool is not allowed
        let expired: Vec<ObstacleId> = self
            .pool
            .iter()
            .filter(|(_, obstacle)| self.layer.to_world(obstacle.pos).x <= tuning.despawn_x)
            .map(|(id, _)| id)
            .collect();
        for id in expired {
            if self.pool.remove(id).is_some() {
                log::debug!("Obstacle {}:{} left the screen", id.index, id.generation);
                events.push(GameEvent::ObstacleDespawned { id });
            }
        }

        self.spawn_timer += dt;
        if self.spawn_timer + TIMER_EPSILON < tuning.spawn_interval {
            return None;
        }

        let world = Vec2::new(
            tuning.spawn_x,
            rng.random_range(tuning.spawn_y_min..=tuning.spawn_y_max),
        );
        let id = self.pool.insert(Obstacle {
            pos: self.layer.to_local(world),
        });
        self.spawn_timer = 0.0;
        log::debug!(
            "Spawned obstacle {}:{} at y={:.1}",
            id.index,
            id.generation,
            world.y
        );
        events.push(GameEvent::ObstacleSpawned { id, world });
        Some(id)
    }

    /// Live obstacles in scene space
    pub fn world_positions(&self) -> impl Iterator<Item = (ObstacleId, Vec2)> + '_ {
        self.pool
            .iter()
            .map(|(id, obstacle)| (id, self.layer.to_world(obstacle.pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_after_interval() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut events = Vec::new();

        for _ in 0..89 {
            assert!(spawner.update(&tuning, SIM_DT, &mut rng, &mut events).is_none());
        }
        let id = spawner
            .update(&tuning, SIM_DT, &mut rng, &mut events)
            .expect("spawn on tick 90");
        assert_eq!(spawner.spawn_timer, 0.0);
        assert_eq!(spawner.pool.len(), 1);

        let GameEvent::ObstacleSpawned { id: spawned, world } = events[0] else {
            panic!("expected spawn event, got {:?}", events[0]);
        };
        assert_eq!(spawned, id);
        assert_eq!(world.x, 352.0);
        assert!((234.0..=382.0).contains(&world.y));
        // Stored in layer space
        let local = spawner.pool.get(id).unwrap().pos;
        assert!((local.x - (352.0 - spawner.layer.origin.x)).abs() < 1e-3);
    }

    #[test]
    fn test_timer_bounded_by_one_step() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        for _ in 0..1_000 {
            spawner.update(&tuning, SIM_DT, &mut rng, &mut events);
            assert!(spawner.spawn_timer <= tuning.spawn_interval + SIM_DT);
        }
    }

    #[test]
    fn test_offscreen_obstacle_released_once() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::default();
        let id = spawner.pool.insert(Obstacle {
            pos: Vec2::new(1.0, 300.0),
        });
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();

        spawner.update(&tuning, SIM_DT, &mut rng, &mut events);
        assert!(spawner.pool.is_empty());
        assert_eq!(events, vec![GameEvent::ObstacleDespawned { id }]);

        events.clear();
        spawner.update(&tuning, SIM_DT, &mut rng, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_obstacle_scrolls_with_layer() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::default();
        let id = spawner.pool.insert(Obstacle {
            pos: Vec2::new(200.0, 300.0),
        });
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        for _ in 0..30 {
            spawner.update(&tuning, SIM_DT, &mut rng, &mut events);
        }
        let (_, world) = spawner.world_positions().find(|(i, _)| *i == id).unwrap();
        assert!((world.x - (200.0 - 160.0 * 0.5)).abs() < 1e-2);
        assert_eq!(world.y, 300.0);
    }

    #[test]
    fn test_obstacles_cycle_without_growth() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut events = Vec::new();
        for _ in 0..60 * 60 {
            spawner.update(&tuning, SIM_DT, &mut rng, &mut events);
            // 352 units at 160/s is 2.2 s of life; one spawn per 1.5 s
            assert!(spawner.pool.len() <= 2);
        }
        let spawned = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ObstacleSpawned { .. }))
            .count();
        assert_eq!(spawned, 40);
    }
}
