//! Unattended tap policy
//!
//! Aims at the gap of the next obstacle still ahead of the player (or the
//! middle of the band when none is) and taps whenever the body sinks
//! below that line. A short cooldown keeps it from chaining impulses
//! into the rise cap.

use crate::sim::GameState;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks to wait after a tap
    pub cooldown_ticks: u32,
    /// Tap when this far below the target line
    pub margin: f32,
    remaining: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            cooldown_ticks: 12,
            margin: 10.0,
            remaining: 0,
        }
    }
}

impl Autopilot {
    /// World y the player should hold
    pub fn target_y(&self, state: &GameState) -> f32 {
        let player_x = state.player.pos.x;
        state
            .obstacles
            .world_positions()
            .map(|(_, pos)| pos)
            .filter(|pos| pos.x + 30.0 >= player_x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
            .map(|pos| pos.y)
            .unwrap_or((state.tuning.spawn_y_min + state.tuning.spawn_y_max) / 2.0)
    }

    /// Drop any cooldown left over from a previous round
    pub fn reset(&mut self) {
        self.remaining = 0;
    }

    /// Decide whether to tap this tick
    pub fn should_tap(&mut self, state: &GameState) -> bool {
        if !state.is_active() {
            return false;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            return false;
        }

        let below = state.player.pos.y < self.target_y(state) - self.margin;
        if below && state.player.vel.y <= 0.0 {
            self.remaining = self.cooldown_ticks;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_taps_when_sinking_below_target() {
        let mut state = GameState::new(1);
        state.player.pos.y = 200.0;
        state.player.vel.y = -50.0;
        let mut pilot = Autopilot::default();
        assert!(pilot.should_tap(&state));
        // Cooldown holds the next taps back
        for _ in 0..12 {
            assert!(!pilot.should_tap(&state));
        }
        assert!(pilot.should_tap(&state));
    }

    #[test]
    fn test_reset_clears_cooldown() {
        let mut state = GameState::new(1);
        state.player.pos.y = 200.0;
        state.player.vel.y = -50.0;
        let mut pilot = Autopilot::default();
        assert!(pilot.should_tap(&state));
        assert!(!pilot.should_tap(&state));
        pilot.reset();
        assert!(pilot.should_tap(&state));
    }

    #[test]
    fn test_no_tap_above_target_or_rising() {
        let mut state = GameState::new(1);
        let mut pilot = Autopilot::default();
        state.player.pos.y = 400.0;
        assert!(!pilot.should_tap(&state));
        state.player.pos.y = 200.0;
        state.player.vel.y = 100.0;
        assert!(!pilot.should_tap(&state));
    }

    #[test]
    fn test_targets_next_gap() {
        let mut state = GameState::new(1);
        state.obstacles.pool.insert(crate::sim::Obstacle {
            pos: Vec2::new(10.0, 250.0),
        });
        state.obstacles.pool.insert(crate::sim::Obstacle {
            pos: Vec2::new(200.0, 360.0),
        });
        state.obstacles.pool.insert(crate::sim::Obstacle {
            pos: Vec2::new(300.0, 240.0),
        });
        let pilot = Autopilot::default();
        assert_eq!(pilot.target_y(&state), 360.0);
    }

    #[test]
    fn test_defaults_to_band_middle() {
        let state = GameState::new(1);
        assert_eq!(Autopilot::default().target_y(&state), 308.0);
    }
}
