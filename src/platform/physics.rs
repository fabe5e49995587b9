//! Headless physics
//!
//! Stands in for the host engine: integrates gravity, velocity and spin on
//! the player body, and reports contact-begin pairs between the player
//! circle, the ground and obstacle columns. Contacts are begin-only; a
//! pair that stays overlapping is reported once.

use std::collections::HashSet;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::template::{ObstacleCollider, ObstacleShape};
use crate::error::{SetupError, read_file};
use crate::sim::{BodyKind, Contact, ObstacleId, PlayerBody};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    pub mass: f32,
    pub inertia: f32,
    pub player_radius: f32,
    /// Scene y of the ground's top surface
    pub ground_top: f32,
    pub obstacle: ObstacleShape,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -600.0,
            mass: 1.0,
            inertia: 1.0,
            player_radius: 12.0,
            ground_top: 80.0,
            obstacle: ObstacleShape::default(),
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        serde_json::from_str(json).map_err(|source| SetupError::Parse {
            what: "physics config",
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SetupError> {
        Self::from_json(&read_file(path)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessPhysics {
    pub config: PhysicsConfig,
    touching: HashSet<BodyKind>,
}

impl HeadlessPhysics {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            touching: HashSet::new(),
        }
    }

    /// Semi-implicit Euler step for the player body
    pub fn integrate(&self, body: &mut PlayerBody, dt: f32) {
        body.vel.y += self.config.gravity * dt;
        body.pos += body.vel * dt;
        if !body.rotation_locked {
            body.rotation += body.angular_vel * dt;
        }
    }

    /// Contacts that began since the previous call
    pub fn detect<'a>(
        &mut self,
        body: &PlayerBody,
        colliders: impl IntoIterator<Item = (ObstacleId, &'a ObstacleCollider)>,
    ) -> Vec<Contact> {
        let radius = self.config.player_radius;
        let mut now = HashSet::new();

        if body.pos.y - radius <= self.config.ground_top {
            now.insert(BodyKind::Ground);
        }
        for (id, collider) in colliders {
            if circle_hits_obstacle(body.pos, radius, collider) {
                now.insert(BodyKind::Obstacle(id));
            }
        }

        let mut began: Vec<Contact> = now
            .difference(&self.touching)
            .map(|other| Contact::new(BodyKind::Player, *other))
            .collect();
        // HashSet order is unstable; keep contact order deterministic
        began.sort_by_key(|c| contact_rank(c.b));
        self.touching = now;
        began
    }

    /// Forget overlap state (round teardown)
    pub fn reset(&mut self) {
        self.touching.clear();
    }
}

fn contact_rank(kind: BodyKind) -> (u8, u32, u32) {
    match kind {
        BodyKind::Ground => (0, 0, 0),
        BodyKind::Obstacle(id) => (1, id.index, id.generation),
        BodyKind::Player => (2, 0, 0),
    }
}

/// Circle against the two columns above and below the gap
fn circle_hits_obstacle(center: Vec2, radius: f32, collider: &ObstacleCollider) -> bool {
    let shape = collider.shape;
    let left = collider.center.x - shape.half_width;
    let right = collider.center.x + shape.half_width;
    let gap_bottom = collider.center.y - shape.gap_half_height;
    let gap_top = collider.center.y + shape.gap_half_height;

    circle_hits_box(center, radius, Vec2::new(left, f32::MIN), Vec2::new(right, gap_bottom))
        || circle_hits_box(center, radius, Vec2::new(left, gap_top), Vec2::new(right, f32::MAX))
}

fn circle_hits_box(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    let closest = center.clamp(min, max);
    center.distance_squared(closest) <= radius * radius
}
