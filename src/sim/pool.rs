//! Obstacle arena
//!
//! Slots are reused through a freelist; each reuse bumps the slot
//! generation so a stale `ObstacleId` can never reach a newer obstacle.
//! Removing an id twice returns `None` the second time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle to a live obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId {
    pub index: u32,
    pub generation: u32,
}

/// An obstacle, positioned in obstacle-layer space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    obstacle: Option<Obstacle>,
}

#[derive(Debug, Clone, Default)]
pub struct ObstaclePool {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, obstacle: Obstacle) -> ObstacleId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.obstacle = Some(obstacle);
            return ObstacleId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            obstacle: Some(obstacle),
        });
        ObstacleId {
            index,
            generation: 0,
        }
    }

    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let obstacle = slot.obstacle.take()?;
        self.free.push(id.index);
        self.len -= 1;
        Some(obstacle)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.obstacle.as_ref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live obstacles in slot order
    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.obstacle.as_ref().map(|obstacle| {
                (
                    ObstacleId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    obstacle,
                )
            })
        })
    }
}
