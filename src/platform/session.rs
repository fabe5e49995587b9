//! Headless session driver
//!
//! Owns a round plus the host-side pieces around it and drives them in
//! the order a real engine would: simulation tick, then physics
//! integration, then contact detection. Contacts found after a physics
//! step are marshalled into the next tick's input.

use super::autopilot::Autopilot;
use super::physics::{HeadlessPhysics, PhysicsConfig};
use super::template::{ColliderTemplate, ObstacleMirror};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameState, SoundEffect, TickInput, tick};

/// Counters for a finished or ongoing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub taps: u64,
    pub flap_sounds: u64,
    pub obstacles_spawned: u64,
    pub obstacles_passed: u64,
    pub rounds_ended: u64,
}

pub struct Session {
    pub state: GameState,
    pub physics: HeadlessPhysics,
    pub mirror: ObstacleMirror<ColliderTemplate>,
    pub autopilot: Option<Autopilot>,
    pub stats: RunStats,
    pending: TickInput,
    accumulator: f32,
}

impl Session {
    pub fn new(mut state: GameState, config: PhysicsConfig) -> Self {
        state.player = state.player.clone().with_mass(config.mass, config.inertia);
        let mirror = ObstacleMirror::new(ColliderTemplate::new(config.obstacle));
        Self {
            state,
            physics: HeadlessPhysics::new(config),
            mirror,
            autopilot: None,
            stats: RunStats::default(),
            pending: TickInput::default(),
            accumulator: 0.0,
        }
    }

    pub fn with_autopilot(mut self, autopilot: Autopilot) -> Self {
        self.autopilot = Some(autopilot);
        self
    }

    /// Queue a tap for the next tick
    pub fn tap(&mut self) {
        self.pending.taps += 1;
    }

    /// Run one fixed tick and the host work that follows it
    pub fn step(&mut self) -> Vec<GameEvent> {
        if let Some(pilot) = self.autopilot.as_mut() {
            if pilot.should_tap(&self.state) {
                self.pending.taps += 1;
            }
        }

        let was_active = self.state.is_active();
        tick(&mut self.state, &self.pending, SIM_DT);
        // Taps landing on the crash tick or later were dropped by the round
        if self.state.is_active() {
            self.stats.taps += u64::from(self.pending.taps);
        }
        self.pending.clear();
        if was_active {
            self.stats.ticks += 1;
        }

        let events = self.state.drain_events();
        for event in &events {
            self.mirror.apply(event);
            self.record(event);
        }

        if self.state.is_active() {
            self.physics.integrate(&mut self.state.player, SIM_DT);
            self.mirror.sync(&self.state);
            let contacts = self.physics.detect(&self.state.player, self.mirror.instances());
            self.pending.contacts.extend(contacts);
        }

        events
    }

    /// Feed wall-clock frame time; runs as many fixed ticks as fit
    pub fn advance(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        self.accumulator += frame_dt.min(0.1);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        events
    }

    /// Step until the round ends or `max_ticks` have run
    pub fn run(&mut self, max_ticks: u64) -> RunStats {
        for _ in 0..max_ticks {
            self.step();
            if !self.state.is_active() {
                break;
            }
        }
        self.stats
    }

    /// Tear down and build a fresh round over the same scene and tuning
    pub fn restart(&mut self, seed: u64) {
        self.mirror.clear();
        self.physics.reset();
        self.pending.clear();
        self.accumulator = 0.0;
        self.stats = RunStats::default();
        if let Some(pilot) = self.autopilot.as_mut() {
            pilot.reset();
        }

        let (mass, inertia) = (self.physics.config.mass, self.physics.config.inertia);
        let fresh = self.state.restart(seed);
        self.state = fresh;
        self.state.player = self.state.player.clone().with_mass(mass, inertia);
    }

    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlaySound(SoundEffect::Flap) => self.stats.flap_sounds += 1,
            GameEvent::ObstacleSpawned { .. } => self.stats.obstacles_spawned += 1,
            GameEvent::ObstacleDespawned { .. } => self.stats.obstacles_passed += 1,
            GameEvent::RoundEnded { .. } => self.stats.rounds_ended += 1,
            GameEvent::SegmentRecycled { .. } => {}
        }
    }
}
