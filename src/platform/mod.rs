//! Headless platform layer
//!
//! Everything the simulation treats as an external collaborator, in a
//! form that runs without a window:
//! - `physics`: gravity integration and begin-only contact detection
//! - `template`: obstacle template binding driven by round events
//! - `autopilot`: unattended tap policy
//! - `session`: fixed-step driver, input queue and restart flow

pub mod autopilot;
pub mod physics;
pub mod session;
pub mod template;

pub use autopilot::Autopilot;
pub use physics::{HeadlessPhysics, PhysicsConfig};
pub use session::{RunStats, Session};
pub use template::{ColliderTemplate, ObstacleCollider, ObstacleMirror, ObstacleShape, ObstacleTemplate};
