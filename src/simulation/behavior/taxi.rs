//! Dispatch vehicle (taxi)
//!
//! Drives like a car, but will creep through a red crosswalk after waiting
//! out a short timer.

use crate::simulation::species::Species;
use crate::simulation::types::{LightState, Terrain, RED_LIGHT_WAIT_TICKS};

pub(crate) const FATAL_PARTNERS: &[Species] = &[Species::Truck];

/// Red-light wait state carried only by taxi agents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchState {
    /// Whether the taxi has stopped for the red crosswalk it is facing
    stopped: bool,
    /// Checks remaining before a stopped taxi may go through on red
    wait_timer: u32,
}

impl DispatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn wait_timer(&self) -> u32 {
        self.wait_timer
    }

    /// Check whether the taxi may enter `terrain` under `light`.
    ///
    /// The wait timer ticks down on every call, whatever the terrain.
    /// Returns true if the taxi can go, false if it must hold.
    pub fn can_pass(&mut self, terrain: Terrain, light: LightState) -> bool {
        if self.wait_timer > 0 {
            self.wait_timer -= 1;
        }

        match (terrain, light) {
            (Terrain::Street, _) => true,
            (Terrain::Light, LightState::Green | LightState::Yellow) => true,
            (Terrain::Crosswalk, LightState::Green) => {
                // Green releases any pending wait
                self.wait_timer = 0;
                self.stopped = false;
                true
            }
            (Terrain::Crosswalk, LightState::Yellow) => true,
            (Terrain::Crosswalk, LightState::Red) if !self.stopped => {
                // First look at this red: stop and start the timer
                self.stopped = true;
                self.wait_timer = RED_LIGHT_WAIT_TICKS;
                false
            }
            (Terrain::Crosswalk, LightState::Red) if self.wait_timer == 0 => {
                // Waited long enough, go through
                self.stopped = false;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
