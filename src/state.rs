//! Trainer state driven by the rotation and countdown timers.
//!
//! All transitions go through [`TrainerState::apply`], which takes the random
//! source explicitly. The Yew reducer only supplies the thread RNG.

use crate::settings::{ComboDuration, TrainerSettings};
use crate::{generate_combination, Combination, RandomSource};
use log::{debug, info};
use std::rc::Rc;
use yew::prelude::*;

/// Seconds left until the next combination. Never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Counts down one second and holds at zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn reset(&mut self, total: u32) {
        self.total = total;
        self.remaining = total;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerAction {
    /// Replace the combination and restart the countdown.
    Regenerate,
    /// One second elapsed.
    Tick,
    SetStrikeMode(bool),
    SetInterval(ComboDuration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerState {
    pub settings: TrainerSettings,
    pub combination: Combination,
    pub countdown: Countdown,
    /// How many combinations have been shown so far.
    pub rotations: u64,
}

impl TrainerState {
    /// Starts with an empty combination; the first `Regenerate` fills it.
    pub fn new(settings: TrainerSettings) -> Self {
        Self {
            settings,
            combination: Combination::default(),
            countdown: Countdown::new(settings.interval.seconds()),
            rotations: 0,
        }
    }

    pub fn apply<R: RandomSource + ?Sized>(&mut self, action: TrainerAction, rng: &mut R) {
        match action {
            TrainerAction::Regenerate => {
                self.combination = generate_combination(self.settings.include_strikes, rng);
                self.countdown.reset(self.settings.interval.seconds());
                self.rotations += 1;
            }
            TrainerAction::Tick => {
                self.countdown.tick();
            }
            TrainerAction::SetStrikeMode(enabled) => {
                if self.settings.include_strikes != enabled {
                    info!("Strike mode {}", if enabled { "enabled" } else { "disabled" });
                }
                self.settings.include_strikes = enabled;
            }
            TrainerAction::SetInterval(interval) => {
                if self.settings.interval != interval {
                    info!("Combination interval set to {}", interval);
                }
                self.settings.interval = interval;
                self.countdown.reset(interval.seconds());
            }
        }
    }
}

impl Reducible for TrainerState {
    type Action = TrainerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action, &mut rand::rng());
        if action == TrainerAction::Regenerate {
            debug!("Rotation #{}: {}", next.rotations, next.combination);
        }
        Rc::new(next)
    }
}
