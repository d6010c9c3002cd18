//! Build progress and the delayed "Coming Soon" reveal.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::LandingConfig;
use crate::LandingSystems;

/// Which panel the overlay shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, States)]
pub enum LandingPhase {
    /// Parts are being placed, progress panel visible
    #[default]
    Building,
    /// Progress hit 100% and the reveal delay elapsed
    Revealed,
}

/// Percentage of the kitchen that has been built, clamped to `0..=100`.
/// Never decreases.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress(u32);

impl Progress {
    pub const MAX: u32 = 100;

    pub fn percent(&self) -> u32 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 >= Self::MAX
    }

    /// Add `step` percent, saturating at 100.
    pub fn advance(&mut self, step: u32) {
        self.0 = self.0.saturating_add(step).min(Self::MAX);
    }

    pub fn fraction(&self) -> f32 {
        self.0 as f32 / Self::MAX as f32
    }
}

/// One-shot countdown from full progress to the reveal.
#[derive(Resource, Debug, Default)]
pub enum Reveal {
    #[default]
    Waiting,
    Counting(Timer),
    Revealed,
}

impl Reveal {
    /// Start the countdown. Only the first call has any effect.
    pub fn arm(&mut self, delay: Duration) -> bool {
        if !matches!(self, Reveal::Waiting) {
            return false;
        }
        *self = Reveal::Counting(Timer::new(delay, TimerMode::Once));
        true
    }

    /// Advance the countdown. Returns true exactly once, on the tick that
    /// completes it.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Reveal::Counting(timer) = self else {
            return false;
        };
        if timer.tick(delta).is_finished() {
            *self = Reveal::Revealed;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, Reveal::Revealed)
    }
}

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<LandingPhase>()
            .init_resource::<Progress>()
            .init_resource::<Reveal>()
            .add_systems(
                Update,
                (arm_reveal, tick_reveal)
                    .chain()
                    .in_set(LandingSystems::Progress),
            );
    }
}

/// Start the reveal countdown the first time progress reaches 100%.
pub fn arm_reveal(progress: Res<Progress>, config: Res<LandingConfig>, mut reveal: ResMut<Reveal>) {
    if !progress.is_complete() {
        return;
    }
    if reveal.arm(config.reveal_delay()) {
        info!("Kitchen complete, revealing in {:.2}s", config.reveal_delay_secs);
    }
}

/// Count down and switch to the reveal phase when the delay elapses.
pub fn tick_reveal(
    time: Res<Time>,
    mut reveal: ResMut<Reveal>,
    mut next_phase: ResMut<NextState<LandingPhase>>,
) {
    if reveal.tick(time.delta()) {
        info!("Coming Soon revealed");
        next_phase.set(LandingPhase::Revealed);
    }
}
