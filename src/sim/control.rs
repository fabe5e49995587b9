//! Player attitude control
//!
//! Two halves: the flap impulse applied on each accepted tap, and the
//! per-tick regulator that caps rise speed, pitches the nose down once
//! input goes idle, and keeps rotation inside its bounds.

use glam::Vec2;

use super::body::PhysicsBody;
use crate::clamp_range;
use crate::tuning::Tuning;

/// Apply one tap's worth of lift and nose-up spin
pub fn apply_flap<B: PhysicsBody>(body: &mut B, tuning: &Tuning) {
    body.apply_impulse(Vec2::new(0.0, tuning.flap_impulse));
    body.apply_angular_impulse(tuning.flap_spin);
}

/// Run the per-tick regulator. Returns true when the idle torque fired.
///
/// Only upward speed is capped; falling is left to gravity. The idle
/// torque is applied every tick past the grace period, and the clamps run
/// after it so a single tick's overshoot never survives the tick.
pub fn regulate_attitude<B: PhysicsBody>(
    body: &mut B,
    since_touch: &mut f32,
    tuning: &Tuning,
    dt: f32,
) -> bool {
    let mut vel = body.velocity();
    if vel.y > tuning.max_rise_speed {
        vel.y = tuning.max_rise_speed;
        body.set_velocity(vel);
    }

    let falling = *since_touch > tuning.idle_grace;
    if falling {
        body.apply_angular_impulse(-tuning.idle_torque * dt);
    }

    body.set_rotation(clamp_range(
        body.rotation(),
        tuning.min_rotation(),
        tuning.max_rotation(),
    ));
    body.set_angular_velocity(clamp_range(
        body.angular_velocity(),
        -tuning.max_angular_speed,
        tuning.max_angular_speed,
    ));

    *since_touch += dt;
    falling
}
