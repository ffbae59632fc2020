//! Agent state and life cycle for the crossing simulation
//!
//! An agent is alive or dead. Collisions kill it; a countdown of pokes
//! brings it back.

use log::debug;
use rand::Rng;

use super::behavior::DispatchState;
use super::species::Species;
use super::types::{AgentId, Direction, LightState, Neighbors, Terrain};

/// Snapshot of another agent passed to `collide`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSummary {
    pub species: Species,
    pub alive: bool,
    pub image: &'static str,
}

/// Construction-time values restored by `reset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialState {
    pub x: i32,
    pub y: i32,
    pub heading: Direction,
    pub revive_duration: u32,
    pub dead_image: &'static str,
    pub alive_image: &'static str,
}

/// A vehicle or pedestrian on the grid
#[derive(Debug, Clone)]
pub struct SimAgent {
    pub id: AgentId,
    species: Species,
    x: i32,
    y: i32,
    heading: Direction,
    alive: bool,
    /// Pokes left before revival; only meaningful while dead
    revive_countdown: u32,
    current_image: &'static str,
    initial: InitialState,
    /// Red-light wait state, present only for taxis
    dispatch: Option<DispatchState>,
}

impl SimAgent {
    pub fn new(id: AgentId, species: Species, x: i32, y: i32, heading: Direction) -> Self {
        let profile = species.profile();
        Self {
            id,
            species,
            x,
            y,
            heading,
            alive: true,
            revive_countdown: profile.revive_duration,
            current_image: profile.alive_image,
            initial: InitialState {
                x,
                y,
                heading,
                revive_duration: profile.revive_duration,
                dead_image: profile.dead_image,
                alive_image: profile.alive_image,
            },
            dispatch: species.waits_at_red().then(DispatchState::new),
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn revive_countdown(&self) -> u32 {
        self.revive_countdown
    }

    /// Display token for the current sprite (alive or dead)
    pub fn image(&self) -> &'static str {
        self.current_image
    }

    pub fn initial(&self) -> &InitialState {
        &self.initial
    }

    pub fn dispatch_state(&self) -> Option<&DispatchState> {
        self.dispatch.as_ref()
    }

    pub fn summary(&self) -> AgentSummary {
        AgentSummary {
            species: self.species,
            alive: self.alive,
            image: self.current_image,
        }
    }

    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Override the revive countdown (e.g. to shorten a death)
    pub fn set_revive_countdown(&mut self, countdown: u32) {
        self.revive_countdown = countdown;
    }

    /// Whether this agent may enter `terrain` under `light` this tick.
    /// Taxis update their red-light wait state here.
    pub fn can_pass(&mut self, terrain: Terrain, light: LightState) -> bool {
        match &mut self.dispatch {
            Some(state) => state.can_pass(terrain, light),
            None => self.species.can_pass(terrain, light).unwrap_or(false),
        }
    }

    /// Heading this agent would like to take given its surroundings
    pub fn choose_direction<R: Rng + ?Sized>(&self, neighbors: &Neighbors, rng: &mut R) -> Direction {
        self.species.choose_direction(self.heading, neighbors, rng)
    }

    /// React to sharing a cell with `other`.
    /// Returns true if this agent was killed by the encounter.
    pub fn collide(&mut self, other: &AgentSummary) -> bool {
        if !(self.alive && other.alive && self.species.is_fatal(other.species)) {
            return false;
        }
        self.kill();
        self.revive_countdown = self.initial.revive_duration;
        debug!(
            "{} {:?} killed by {} at ({}, {})",
            self.species, self.id, other.species, self.x, self.y
        );
        true
    }

    fn kill(&mut self) {
        self.alive = false;
        self.current_image = self.initial.dead_image;
    }

    /// Advance the life cycle by one tick.
    ///
    /// A dead agent counts down; once the countdown is already zero it
    /// revives facing a random heading. Returns true on the revival tick.
    pub fn poke<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.alive {
            return false;
        }
        if self.revive_countdown > 0 {
            self.revive_countdown -= 1;
            return false;
        }

        self.revive_countdown = self.initial.revive_duration;
        self.alive = true;
        self.current_image = self.initial.alive_image;
        self.heading = Direction::random(rng);
        debug!(
            "{} {:?} revived at ({}, {}) heading {}",
            self.species, self.id, self.x, self.y, self.heading
        );
        true
    }

    /// Restore position and heading from construction and bring the agent
    /// back to life. The revive countdown is left alone.
    pub fn reset(&mut self) {
        self.x = self.initial.x;
        self.y = self.initial.y;
        self.heading = self.initial.heading;
        self.alive = true;
        self.current_image = self.initial.alive_image;
        if let Some(state) = &mut self.dispatch {
            state.clear();
        }
    }
}
