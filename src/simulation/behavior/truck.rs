//! Heavy vehicle: ignores lights on light cells and is never killed.

use rand::Rng;

use super::random_accepted;
use crate::simulation::types::{Direction, LightState, Neighbors, Terrain};

pub(crate) fn can_pass(terrain: Terrain, light: LightState) -> bool {
    match terrain {
        Terrain::Street | Terrain::Light => true,
        Terrain::Crosswalk => matches!(light, LightState::Green | LightState::Yellow),
        Terrain::Wall | Terrain::Grass | Terrain::Trail => false,
    }
}

pub(crate) fn choose_direction<R: Rng + ?Sized>(
    heading: Direction,
    neighbors: &Neighbors,
    rng: &mut R,
) -> Direction {
    random_accepted(heading, neighbors, Terrain::is_roadway, rng)
        .unwrap_or_else(|| heading.reverse())
}
