//! Standalone crossing simulation module
//!
//! The agent behavior model (species rules and the alive/dead life cycle)
//! plus a headless driver that runs it on a terrain grid.

mod agent;
mod behavior;
pub mod driver;
mod grid;
mod light;
mod species;
mod stats;
mod types;
mod world;

// Re-export public types for external use
pub use agent::{AgentSummary, InitialState, SimAgent};
pub use behavior::DispatchState;
pub use driver::TickOutcome;
pub use grid::SimGrid;
pub use light::LightCycle;
pub use species::{Species, SpeciesProfile};
pub use stats::SimStats;
pub use types::{
    AgentId, Direction, LightState, Neighbors, Terrain, DEFAULT_LIGHT_PHASE_TICKS,
    RED_LIGHT_WAIT_TICKS,
};
pub use world::{SimWorld, DEMO_MAP};
