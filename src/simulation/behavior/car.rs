//! Light passenger vehicle.

use super::first_accepted;
use crate::simulation::species::Species;
use crate::simulation::types::{Direction, LightState, Neighbors, Terrain};

pub(crate) const FATAL_PARTNERS: &[Species] = &[Species::Truck];

pub(crate) fn can_pass(terrain: Terrain, light: LightState) -> bool {
    match terrain {
        Terrain::Street => true,
        Terrain::Light => matches!(light, LightState::Green | LightState::Yellow),
        Terrain::Crosswalk => light == LightState::Green,
        Terrain::Wall | Terrain::Grass | Terrain::Trail => false,
    }
}

/// Straight if possible, then left, then right, else turn around.
/// Shared with the taxi, which steers the same way.
pub(crate) fn choose_direction(heading: Direction, neighbors: &Neighbors) -> Direction {
    first_accepted(heading, neighbors, Terrain::is_roadway).unwrap_or_else(|| heading.reverse())
}
