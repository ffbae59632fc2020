//! Per-tick entry points a simulation driver calls into
//!
//! The driver owns the grid and decides where agents physically end up;
//! these functions only ask the agent what it wants and advance its life
//! cycle.

use rand::Rng;

use super::agent::{AgentSummary, SimAgent};
use super::behavior::terrain_toward;
use super::types::{Direction, LightState, Neighbors};

/// Result of one agent tick indicating what the driver should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved(Direction),   // Step one cell in this heading
    Blocked(Direction), // Turned to face this heading but must hold
    Dead,               // Still dead, counting down
    Revived,            // Came back to life this tick
}

/// Run one tick for `agent`: choose a heading, check whether it can enter
/// the cell ahead, then poke its life cycle.
pub fn tick<R: Rng + ?Sized>(
    agent: &mut SimAgent,
    neighbors: &Neighbors,
    light: LightState,
    rng: &mut R,
) -> TickOutcome {
    if !agent.is_alive() {
        return if agent.poke(rng) {
            TickOutcome::Revived
        } else {
            TickOutcome::Dead
        };
    }

    let direction = agent.choose_direction(neighbors, rng);
    agent.set_heading(direction);
    let passable = agent.can_pass(terrain_toward(neighbors, direction), light);

    // No-op for a living agent, but the life cycle is poked every tick
    agent.poke(rng);

    if passable {
        TickOutcome::Moved(direction)
    } else {
        TickOutcome::Blocked(direction)
    }
}

/// Tell `agent` it shares a cell with `other`. Returns true if it died.
pub fn notify_collision(agent: &mut SimAgent, other: &AgentSummary) -> bool {
    agent.collide(other)
}

pub fn reset_round(agent: &mut SimAgent) {
    agent.reset();
}
