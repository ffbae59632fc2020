//! Pedal-cycle: prefers trails, otherwise rides the roadway.

use super::first_accepted;
use crate::simulation::species::Species;
use crate::simulation::types::{Direction, LightState, Neighbors, Terrain};

pub(crate) const FATAL_PARTNERS: &[Species] =
    &[Species::Truck, Species::Car, Species::Taxi, Species::Atv];

/// Streets, trails, and light cells are always open; crosswalks only on green
pub(crate) fn can_pass(terrain: Terrain, light: LightState) -> bool {
    match terrain {
        Terrain::Street | Terrain::Trail | Terrain::Light => true,
        Terrain::Crosswalk => light == LightState::Green,
        Terrain::Wall | Terrain::Grass => false,
    }
}

pub(crate) fn choose_direction(heading: Direction, neighbors: &Neighbors) -> Direction {
    first_accepted(heading, neighbors, |terrain| terrain == Terrain::Trail)
        .or_else(|| first_accepted(heading, neighbors, Terrain::is_roadway))
        .unwrap_or_else(|| heading.reverse())
}
