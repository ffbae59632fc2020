//! Traffic light timing for the crossing simulation

use super::types::{LightState, DEFAULT_LIGHT_PHASE_TICKS};

/// The shared signal for every light-controlled cell
#[derive(Debug, Clone)]
pub struct LightCycle {
    pub state: LightState,
    /// Ticks spent in the current phase
    pub phase_timer: u32,
    /// Ticks each phase lasts before advancing
    pub phase_ticks: u32,
}

impl Default for LightCycle {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_PHASE_TICKS)
    }
}

impl LightCycle {
    /// A cycle starting on green. A zero phase length is treated as one.
    pub fn new(phase_ticks: u32) -> Self {
        Self {
            state: LightState::Green,
            phase_timer: 0,
            phase_ticks: phase_ticks.max(1),
        }
    }

    /// Count one tick. Returns true if the light changed phase.
    pub fn advance(&mut self) -> bool {
        self.phase_timer += 1;
        if self.phase_timer >= self.phase_ticks {
            self.phase_timer = 0;
            self.state = self.state.advance();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.state = LightState::Green;
        self.phase_timer = 0;
    }
}
