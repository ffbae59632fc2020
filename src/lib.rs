//! Crossing Simulation Library
//!
//! Grid-based crossing simulation: per-species agent behavior, the shared
//! alive/dead life cycle, and a headless driver that ticks them.

pub mod simulation;
