//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod collision;
pub mod control;
pub mod layer;
pub mod pool;
pub mod scroll;
pub mod spawner;
pub mod state;
pub mod tick;

pub use body::{PhysicsBody, PlayerBody};
pub use collision::{BodyKind, Contact, on_contact_begin};
pub use control::{apply_flap, regulate_attitude};
pub use layer::Layer;
pub use pool::{Obstacle, ObstacleId, ObstaclePool};
pub use scroll::{ScrollManager, ScrollSegment};
pub use spawner::ObstacleSpawner;
pub use state::{GameEvent, GamePhase, GameState, SoundEffect};
pub use tick::{TickInput, on_input, tick};
