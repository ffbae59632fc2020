//! Off-road vehicle: goes anywhere but walls, wanders at random.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::simulation::species::Species;
use crate::simulation::types::{Direction, LightState, Terrain};

pub(crate) const FATAL_PARTNERS: &[Species] = &[Species::Truck, Species::Car, Species::Taxi];

pub(crate) fn can_pass(terrain: Terrain, _light: LightState) -> bool {
    terrain != Terrain::Wall
}

/// Any heading except a U-turn, regardless of the terrain around it
pub(crate) fn choose_direction<R: Rng + ?Sized>(heading: Direction, rng: &mut R) -> Direction {
    let choices = [heading, heading.left(), heading.right()];
    *choices.choose(rng).unwrap_or(&heading)
}
