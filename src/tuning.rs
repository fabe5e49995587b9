//! Data-driven game balance
//!
//! Every number the simulation reacts to lives here so a round can be
//! re-tuned from JSON without touching code. Defaults reproduce the
//! shipped game feel.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SetupError, read_file};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World scroll ===
    /// Leftward speed of both ground and obstacle layers (units/s)
    pub scroll_speed: f32,

    // === Flap ===
    /// Upward linear impulse per accepted tap
    pub flap_impulse: f32,
    /// Nose-up angular impulse per accepted tap
    pub flap_spin: f32,

    // === Attitude ===
    /// Upward speed cap (falling is not capped)
    pub max_rise_speed: f32,
    /// Idle time after which the nose-down torque kicks in (s)
    pub idle_grace: f32,
    /// Nose-down torque; applied as `-idle_torque * dt` every idle tick
    pub idle_torque: f32,
    /// Rotation bounds (degrees)
    pub min_rotation_deg: f32,
    pub max_rotation_deg: f32,
    /// Angular velocity bound (symmetric)
    pub max_angular_speed: f32,

    // === Obstacles ===
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// World x at which new obstacles appear
    pub spawn_x: f32,
    /// World y band for obstacle centers
    pub spawn_y_min: f32,
    pub spawn_y_max: f32,
    /// Obstacles at or left of this world x are destroyed
    pub despawn_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_speed: 160.0,

            flap_impulse: 250.0,
            flap_spin: 1.0,

            max_rise_speed: 400.0,
            idle_grace: 0.1,
            idle_torque: 20_000.0,
            min_rotation_deg: -20.0,
            max_rotation_deg: 30.0,
            max_angular_speed: 2.0,

            spawn_interval: 1.5,
            spawn_x: 352.0,
            spawn_y_min: 234.0,
            spawn_y_max: 382.0,
            despawn_x: 0.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let tuning: Self = serde_json::from_str(json).map_err(|source| SetupError::Parse {
            what: "tuning",
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let tuning = Self::from_json(&read_file(path)?)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        fn bad(field: &'static str, reason: &'static str) -> Result<(), SetupError> {
            Err(SetupError::InvalidTuning { field, reason })
        }

        if !(self.scroll_speed >= 0.0) {
            return bad("scroll_speed", "must be non-negative");
        }
        if !(self.spawn_interval > 0.0) {
            return bad("spawn_interval", "must be positive");
        }
        if !(self.spawn_y_min <= self.spawn_y_max) {
            return bad("spawn_y_min", "must not exceed spawn_y_max");
        }
        if !(self.min_rotation_deg <= self.max_rotation_deg) {
            return bad("min_rotation_deg", "must not exceed max_rotation_deg");
        }
        if !(self.max_angular_speed >= 0.0) {
            return bad("max_angular_speed", "must be non-negative");
        }
        if !(self.idle_grace >= 0.0) {
            return bad("idle_grace", "must be non-negative");
        }
        Ok(())
    }

    /// Lower rotation bound in radians
    #[inline]
    pub fn min_rotation(&self) -> f32 {
        self.min_rotation_deg.to_radians()
    }

    /// Upper rotation bound in radians
    #[inline]
    pub fn max_rotation(&self) -> f32 {
        self.max_rotation_deg.to_radians()
    }
}
