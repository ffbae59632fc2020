//! Species table for the crossing simulation
//!
//! Maps each species to its default parameters and to the decision rules in
//! the `behavior` module.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use rand::Rng;

use super::behavior;
use super::types::{Direction, LightState, Neighbors, Terrain};

/// The fixed behavioral category of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Fast off-road vehicle
    Atv,
    /// Pedal-cycle
    Bicycle,
    /// Light passenger vehicle
    Car,
    /// Pedestrian
    Human,
    /// Dispatch vehicle that waits out red crosswalks
    Taxi,
    /// Heavy vehicle, immune to collisions
    Truck,
}

/// Defaults every agent of a species starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesProfile {
    /// Pokes a dead agent waits before it revives
    pub revive_duration: u32,
    /// Display token while alive
    pub alive_image: &'static str,
    /// Display token while dead
    pub dead_image: &'static str,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Atv,
        Species::Bicycle,
        Species::Car,
        Species::Human,
        Species::Taxi,
        Species::Truck,
    ];

    pub fn profile(self) -> SpeciesProfile {
        let (revive_duration, alive_image, dead_image) = match self {
            Species::Atv => (25, "atv.gif", "atv_dead.gif"),
            Species::Bicycle => (35, "bicycle.gif", "bicycle_dead.gif"),
            Species::Car => (15, "car.gif", "car_dead.gif"),
            Species::Human => (45, "human.gif", "human_dead.gif"),
            Species::Taxi => (15, "taxi.gif", "taxi_dead.gif"),
            Species::Truck => (0, "truck.gif", "truck_dead.gif"),
        };
        SpeciesProfile {
            revive_duration,
            alive_image,
            dead_image,
        }
    }

    /// Species whose (living) agents kill this species on contact
    pub fn fatal_partners(self) -> &'static [Species] {
        match self {
            Species::Atv => behavior::atv::FATAL_PARTNERS,
            Species::Bicycle => behavior::bicycle::FATAL_PARTNERS,
            Species::Car => behavior::car::FATAL_PARTNERS,
            Species::Human => behavior::human::FATAL_PARTNERS,
            Species::Taxi => behavior::taxi::FATAL_PARTNERS,
            Species::Truck => &[],
        }
    }

    pub fn is_fatal(self, other: Species) -> bool {
        self.fatal_partners().contains(&other)
    }

    /// Whether this species keeps red-light wait state between checks
    pub fn waits_at_red(self) -> bool {
        self == Species::Taxi
    }

    /// Crossing rule as a pure function of terrain and light.
    ///
    /// `None` for species whose answer depends on per-agent state (the
    /// taxi); ask the agent itself via `SimAgent::can_pass` instead.
    pub fn can_pass(self, terrain: Terrain, light: LightState) -> Option<bool> {
        match self {
            Species::Atv => Some(behavior::atv::can_pass(terrain, light)),
            Species::Bicycle => Some(behavior::bicycle::can_pass(terrain, light)),
            Species::Car => Some(behavior::car::can_pass(terrain, light)),
            Species::Human => Some(behavior::human::can_pass(terrain, light)),
            Species::Taxi => None,
            Species::Truck => Some(behavior::truck::can_pass(terrain, light)),
        }
    }

    /// Preferred heading for an agent of this species currently facing `heading`
    pub fn choose_direction<R: Rng + ?Sized>(
        self,
        heading: Direction,
        neighbors: &Neighbors,
        rng: &mut R,
    ) -> Direction {
        match self {
            Species::Atv => behavior::atv::choose_direction(heading, rng),
            Species::Bicycle => behavior::bicycle::choose_direction(heading, neighbors),
            Species::Car | Species::Taxi => behavior::car::choose_direction(heading, neighbors),
            Species::Human => behavior::human::choose_direction(heading, neighbors, rng),
            Species::Truck => behavior::truck::choose_direction(heading, neighbors, rng),
        }
    }

    /// Single-character marker used when drawing the map
    pub fn letter(self) -> char {
        match self {
            Species::Atv => 'a',
            Species::Bicycle => 'b',
            Species::Car => 'c',
            Species::Human => 'h',
            Species::Taxi => 'x',
            Species::Truck => 't',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Atv => "Atv",
            Species::Bicycle => "Bicycle",
            Species::Car => "Car",
            Species::Human => "Human",
            Species::Taxi => "Taxi",
            Species::Truck => "Truck",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Species {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Species::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(s))
        {
            Some(species) => Ok(species),
            None => bail!("unknown species '{}'", s),
        }
    }
}
