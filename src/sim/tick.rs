//! Fixed timestep simulation tick
//!
//! Core game loop that advances a round deterministically. Contacts the
//! host reported since the previous tick are applied first, then taps,
//! attitude control, ground scroll and obstacles, in that order.

use super::collision::{Contact, on_contact_begin};
use super::control::{apply_flap, regulate_attitude};
use super::state::{GameEvent, GamePhase, GameState, SoundEffect};

/// Inputs gathered between two ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Taps received since the last tick
    pub taps: u32,
    /// Contact-begin notifications marshalled from the physics engine
    pub contacts: Vec<Contact>,
}

impl TickInput {
    pub fn tap() -> Self {
        Self {
            taps: 1,
            ..Default::default()
        }
    }

    /// Clear one-shot inputs after they were consumed
    pub fn clear(&mut self) {
        self.taps = 0;
        self.contacts.clear();
    }
}

/// Handle one tap. Ignored (not queued) once the round is over.
pub fn on_input(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Active {
        return false;
    }

    apply_flap(&mut state.player, &state.tuning);
    state.since_touch = 0.0;
    state.events.push(GameEvent::PlaySound(SoundEffect::Flap));
    true
}

/// Advance the round by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Active {
        return;
    }

    for contact in &input.contacts {
        on_contact_begin(state, *contact);
    }
    if state.phase != GamePhase::Active {
        return;
    }

    for _ in 0..input.taps {
        on_input(state);
    }

    if regulate_attitude(&mut state.player, &mut state.since_touch, &state.tuning, dt) {
        log::trace!("Idle torque at tick {}", state.time_ticks);
    }

    state.ground.scroll(
        state.world_size.x,
        state.tuning.scroll_speed,
        dt,
        &mut state.events,
    );
    state
        .obstacles
        .update(&state.tuning, dt, &mut state.rng, &mut state.events);

    state.time_ticks += 1;
}
