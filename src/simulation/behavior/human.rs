//! Pedestrian: walks on grass and heads for crosswalks.

use rand::Rng;

use super::{random_accepted, terrain_toward};
use crate::simulation::species::Species;
use crate::simulation::types::{Direction, LightState, Neighbors, Terrain};

pub(crate) const FATAL_PARTNERS: &[Species] =
    &[Species::Truck, Species::Car, Species::Atv, Species::Taxi];

/// Grass always; crosswalks only while traffic is held (red or yellow)
pub(crate) fn can_pass(terrain: Terrain, light: LightState) -> bool {
    match terrain {
        Terrain::Grass => true,
        Terrain::Crosswalk => matches!(light, LightState::Red | LightState::Yellow),
        _ => false,
    }
}

/// A neighboring crosswalk wins (left, right, then forward). Otherwise a
/// random grass cell ahead or to the side, else turn around.
pub(crate) fn choose_direction<R: Rng + ?Sized>(
    heading: Direction,
    neighbors: &Neighbors,
    rng: &mut R,
) -> Direction {
    let crosswalk = [heading.left(), heading.right(), heading]
        .into_iter()
        .find(|dir| terrain_toward(neighbors, *dir) == Terrain::Crosswalk);
    if let Some(direction) = crosswalk {
        return direction;
    }

    random_accepted(heading, neighbors, |terrain| terrain == Terrain::Grass, rng)
        .unwrap_or_else(|| heading.reverse())
}
