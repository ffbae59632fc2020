//! Per-species decision rules
//!
//! Each submodule holds the crossing, heading, and collision rules for one
//! species. Every heading choice scans forward, then left, then right, and
//! falls back to reversing.

pub(crate) mod atv;
pub(crate) mod bicycle;
pub(crate) mod car;
pub(crate) mod human;
pub(crate) mod taxi;
pub(crate) mod truck;

use log::warn;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::types::{Direction, Neighbors, Terrain};

pub use taxi::DispatchState;

/// Terrain of the neighbor cell in `direction`.
///
/// The driver must supply all four headings. A missing entry trips an
/// assertion in debug builds and is read as a wall otherwise.
pub(crate) fn terrain_toward(neighbors: &Neighbors, direction: Direction) -> Terrain {
    debug_assert!(
        neighbors.contains_key(&direction),
        "neighbor map is missing {:?}",
        direction
    );
    neighbors.get(&direction).copied().unwrap_or_else(|| {
        warn!(
            "Neighbor map is missing {:?}; treating the cell as a wall",
            direction
        );
        Terrain::Wall
    })
}

/// First of forward, left, right whose terrain is accepted
pub(crate) fn first_accepted(
    heading: Direction,
    neighbors: &Neighbors,
    accept: impl Fn(Terrain) -> bool,
) -> Option<Direction> {
    [heading, heading.left(), heading.right()]
        .into_iter()
        .find(|dir| accept(terrain_toward(neighbors, *dir)))
}

/// Uniform pick among left, right, forward whose terrain is accepted
pub(crate) fn random_accepted<R: Rng + ?Sized>(
    heading: Direction,
    neighbors: &Neighbors,
    accept: impl Fn(Terrain) -> bool,
    rng: &mut R,
) -> Option<Direction> {
    let candidates: Vec<Direction> = [heading.left(), heading.right(), heading]
        .into_iter()
        .filter(|dir| accept(terrain_toward(neighbors, *dir)))
        .collect();
    candidates.choose(rng).copied()
}
