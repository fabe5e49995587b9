//! Hoppy Bunny - a one-tap side-scrolling hopper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (attitude control, scrolling, spawning, round state)
//! - `platform`: Headless stand-in for the host physics engine and tick driver
//! - `snapshot`: Serializable view of a round for the presentation layer
//! - `tuning` / `scene`: Data-driven game balance and scene layout

pub mod error;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use error::SetupError;
pub use scene::SceneDescription;
pub use snapshot::RenderSnapshot;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible world dimensions (scene space, origin bottom-left)
    pub const WORLD_WIDTH: f32 = 320.0;
    pub const WORLD_HEIGHT: f32 = 568.0;

    /// Ground tile defaults
    pub const GROUND_TILE_WIDTH: f32 = 320.0;
    pub const GROUND_TILE_Y: f32 = 40.0;

    /// Player start position
    pub const PLAYER_START_X: f32 = 80.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Slack allowed when comparing accumulated timers against thresholds.
    /// Summing SIM_DT ninety times lands just under 1.5 in f32.
    pub const TIMER_EPSILON: f32 = 1.0e-4;
}

/// Clamp `value` into `[min, max]`, tolerating an inverted range by
/// returning `min`.
#[inline]
pub fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        return min;
    }
    value.clamp(min, max)
}
