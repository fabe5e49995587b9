//! Contact handling and the round's terminal transition
//!
//! The host engine reports contact-begin pairs. The first one seen while
//! the round is active ends it; every later one is ignored. This is the
//! only place that writes `GamePhase::GameOver`.

use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::pool::ObstacleId;
use super::state::{GameEvent, GamePhase, GameState};

/// Collidable bodies the host may report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Obstacle(ObstacleId),
    Ground,
}

/// A contact-begin notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub a: BodyKind,
    pub b: BodyKind,
}

impl Contact {
    pub fn new(a: BodyKind, b: BodyKind) -> Self {
        Self { a, b }
    }

    /// The body the player touched, if the player is part of this contact
    pub fn other_than_player(&self) -> Option<BodyKind> {
        match (self.a, self.b) {
            (BodyKind::Player, other) | (other, BodyKind::Player) => Some(other),
            _ => None,
        }
    }
}

/// Handle a contact-begin. Returns true if this contact ended the round.
pub fn on_contact_begin(state: &mut GameState, contact: Contact) -> bool {
    if state.phase != GamePhase::Active {
        return false;
    }

    state.phase = GamePhase::GameOver;
    state.player.set_allows_rotation(false);
    state.player.set_angular_velocity(0.0);
    state.player.stop_actions();

    match contact.other_than_player() {
        Some(other) => log::info!(
            "Round over after {} ticks (player hit {:?})",
            state.time_ticks,
            other
        ),
        None => log::info!(
            "Round over after {} ticks ({:?} hit {:?})",
            state.time_ticks,
            contact.a,
            contact.b
        ),
    }
    state.events.push(GameEvent::RoundEnded { contact });
    true
}
