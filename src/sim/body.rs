//! Player rigid body
//!
//! The host engine owns integration; the simulation only applies impulses
//! and writes clamped values back. `PhysicsBody` is the seam between the
//! two so control logic can drive any engine's body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Operations the control logic needs from a rigid body
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn angular_velocity(&self) -> f32;
    fn set_angular_velocity(&mut self, angular_velocity: f32);
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, rotation: f32);
    /// Instantaneous change of linear momentum
    fn apply_impulse(&mut self, impulse: Vec2);
    /// Instantaneous change of angular momentum; ignored while rotation is locked
    fn apply_angular_impulse(&mut self, impulse: f32);
    fn set_allows_rotation(&mut self, allows: bool);
}

/// The player's body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation in radians (positive = nose up)
    pub rotation: f32,
    pub angular_vel: f32,
    /// Set once the round ends; angular integration stops
    pub rotation_locked: bool,
    /// Flap animation running (presentation hint)
    pub flapping: bool,
    pub mass: f32,
    pub inertia: f32,
}

impl PlayerBody {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            angular_vel: 0.0,
            rotation_locked: false,
            flapping: true,
            mass: 1.0,
            inertia: 1.0,
        }
    }

    pub fn with_mass(mut self, mass: f32, inertia: f32) -> Self {
        self.mass = mass.max(f32::EPSILON);
        self.inertia = inertia.max(f32::EPSILON);
        self
    }

    /// Cancel every running animation action
    pub fn stop_actions(&mut self) {
        self.flapping = false;
    }
}

impl PhysicsBody for PlayerBody {
    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.vel = velocity;
    }

    fn angular_velocity(&self) -> f32 {
        self.angular_vel
    }

    fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_vel = angular_velocity;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse / self.mass;
    }

    fn apply_angular_impulse(&mut self, impulse: f32) {
        if self.rotation_locked {
            return;
        }
        self.angular_vel += impulse / self.inertia;
    }

    fn set_allows_rotation(&mut self, allows: bool) {
        self.rotation_locked = !allows;
    }
}
