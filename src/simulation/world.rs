//! Main simulation world that ties everything together
//!
//! Owns the terrain grid, the light cycle, and every agent, and runs the
//! per-tick loop: agent moves, then collisions, then the light timer.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::{AgentSummary, SimAgent};
use super::driver::{self, TickOutcome};
use super::grid::SimGrid;
use super::light::LightCycle;
use super::species::Species;
use super::stats::SimStats;
use super::types::{AgentId, Direction, LightState, Terrain};

/// Built-in demo map: a four-way light-controlled crossing with a trail
pub const DEMO_MAP: &str = "\
# Four-way crossing
GGGGGGGGGSSGGGGGGGGGG
GGGGGGGGGSSGGGGGGGGGG
TTTTTTTTTSSTTTTTTTTTT
GGGGGGGGGSSGGGGGGGGGG
GGGGGGGGGCCGGGGGGGGGG
SSSSSSSSCLLCSSSSSSSSS
SSSSSSSSCLLCSSSSSSSSS
GGGGGGGGGCCGGGGGGGGGG
GGGGGGGGGSSGGGGGGGGGG
WWWWWWWWWSSWWWWWWWWWW
WWWWWWWWWSSWWWWWWWWWW

truck 0 5 E
car 20 6 W
taxi 9 0 S
bicycle 0 2 E
human 3 4 E
human 15 7 W
atv 5 8 N
car 10 10 N
";

/// The main simulation world
#[derive(Debug)]
pub struct SimWorld {
    pub grid: SimGrid,

    /// All agents, in the order they act each tick
    agents: Vec<SimAgent>,

    pub lights: LightCycle,

    pub stats: SimStats,

    rng: StdRng,
}

impl SimWorld {
    fn new_internal(grid: SimGrid, rng: StdRng) -> Self {
        Self {
            grid,
            agents: Vec::new(),
            lights: LightCycle::default(),
            stats: SimStats::default(),
            rng,
        }
    }

    pub fn new(grid: SimGrid) -> Self {
        Self::new_internal(grid, StdRng::from_os_rng())
    }

    /// Create a world with a seeded RNG for reproducible simulations
    pub fn new_with_seed(grid: SimGrid, seed: u64) -> Self {
        Self::new_internal(grid, StdRng::seed_from_u64(seed))
    }

    /// Build a world from map text: a block of terrain rows followed by
    /// agent lines of the form `<species> <x> <y> <heading>`.
    pub fn from_map_str(text: &str, seed: Option<u64>) -> Result<Self> {
        let mut rows: Vec<Vec<Terrain>> = Vec::new();
        let mut placements: Vec<(usize, Species, i32, i32, Direction)> = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if placements.is_empty() && line.chars().all(|c| Terrain::from_symbol(c).is_some()) {
                rows.push(SimGrid::parse_row(line).with_context(|| format!("line {}", line_no))?);
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 4 {
                bail!(
                    "line {}: expected '<species> <x> <y> <heading>', got '{}'",
                    line_no,
                    line
                );
            }
            let species: Species = fields[0]
                .parse()
                .with_context(|| format!("line {}", line_no))?;
            let x: i32 = fields[1]
                .parse()
                .with_context(|| format!("line {}: bad x '{}'", line_no, fields[1]))?;
            let y: i32 = fields[2]
                .parse()
                .with_context(|| format!("line {}: bad y '{}'", line_no, fields[2]))?;
            let heading: Direction = fields[3]
                .parse()
                .with_context(|| format!("line {}", line_no))?;
            placements.push((line_no, species, x, y, heading));
        }

        let grid = SimGrid::new(rows).context("Invalid terrain block")?;
        let mut world = match seed {
            Some(seed) => Self::new_with_seed(grid, seed),
            None => Self::new(grid),
        };

        for (line_no, species, x, y, heading) in placements {
            world
                .add_agent(species, x, y, heading)
                .with_context(|| format!("line {}", line_no))?;
        }

        info!(
            "Loaded {}x{} map with {} agents",
            world.grid.width(),
            world.grid.height(),
            world.agents.len()
        );
        Ok(world)
    }

    pub fn load_map(path: &Path, seed: Option<u64>) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read map file {}", path.display()))?;
        Self::from_map_str(&text, seed)
            .with_context(|| format!("Failed to parse map file {}", path.display()))
    }

    pub fn create_demo_world(seed: Option<u64>) -> Result<Self> {
        Self::from_map_str(DEMO_MAP, seed)
    }

    /// Place a new agent. Fails if the position is off the grid.
    pub fn add_agent(
        &mut self,
        species: Species,
        x: i32,
        y: i32,
        heading: Direction,
    ) -> Result<AgentId> {
        if !self.grid.in_bounds(x, y) {
            bail!(
                "{} at ({}, {}) is outside the {}x{} grid",
                species,
                x,
                y,
                self.grid.width(),
                self.grid.height()
            );
        }
        let id = AgentId(self.agents.len());
        self.agents.push(SimAgent::new(id, species, x, y, heading));
        Ok(id)
    }

    pub fn agents(&self) -> &[SimAgent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&SimAgent> {
        self.agents.get(id.0)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut SimAgent> {
        self.agents.get_mut(id.0)
    }

    pub fn light(&self) -> LightState {
        self.lights.state
    }

    pub fn set_light_phase_ticks(&mut self, phase_ticks: u32) {
        self.lights = LightCycle::new(phase_ticks);
    }

    /// Advance the whole world by one tick: agents act under the current
    /// light, collide, then the light cycle counts the tick.
    pub fn tick(&mut self) {
        self.stats.ticks += 1;
        let light = self.lights.state;

        for agent in &mut self.agents {
            let neighbors = self.grid.neighbors(agent.x(), agent.y());
            match driver::tick(agent, &neighbors, light, &mut self.rng) {
                TickOutcome::Moved(direction) => {
                    let (x, y) = agent.position();
                    agent.move_to(x + direction.dx(), y + direction.dy());
                    self.stats.moves += 1;
                }
                TickOutcome::Blocked(_) => self.stats.blocked += 1,
                TickOutcome::Revived => self.stats.revivals += 1,
                TickOutcome::Dead => {}
            }
        }

        self.stats.deaths += self.resolve_collisions();

        // The phase agents just acted under counts as observed
        if self.lights.advance() {
            self.stats.light_changes += 1;
            debug!("Light changed to {}", self.lights.state);
        }
    }

    /// Let every pair of agents sharing a cell collide. Each agent sees the
    /// other as it was before any collision this tick. Returns the number
    /// of agents killed.
    fn resolve_collisions(&mut self) -> u64 {
        let mut cells: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        for (index, agent) in self.agents.iter().enumerate() {
            cells.entry(agent.position()).or_default().push(index);
        }

        let summaries: Vec<AgentSummary> = self.agents.iter().map(SimAgent::summary).collect();
        let mut killed = 0;
        for occupants in cells.values().filter(|occupants| occupants.len() > 1) {
            for &index in occupants {
                for &other in occupants {
                    if index != other
                        && driver::notify_collision(&mut self.agents[index], &summaries[other])
                    {
                        killed += 1;
                    }
                }
            }
        }
        killed
    }

    /// Start a new round: every agent back to its starting state, lights
    /// back to green.
    pub fn reset_round(&mut self) {
        for agent in &mut self.agents {
            driver::reset_round(agent);
        }
        self.lights.reset();
        self.stats.rounds += 1;
        info!("Round {} started", self.stats.rounds + 1);
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_alive()).count()
    }

    pub fn print_summary(&self) {
        println!("=== Crossing Simulation Summary ===");
        println!("Tick: {}, Light: {}", self.stats.ticks, self.lights.state);
        println!("Grid: {}x{}", self.grid.width(), self.grid.height());
        println!(
            "Agents: {} ({} alive)",
            self.agents.len(),
            self.alive_count()
        );
        println!("{}", self.stats.summary());

        println!("--- Agents ---");
        for agent in &self.agents {
            println!(
                "  {} {:?}: position=({}, {}), heading={}, {}",
                agent.species(),
                agent.id.0,
                agent.x(),
                agent.y(),
                agent.heading(),
                if agent.is_alive() {
                    "alive".to_string()
                } else {
                    format!("dead ({} to revive)", agent.revive_countdown())
                }
            );
        }
    }

    /// Text rendering of the grid with agents drawn over the terrain
    pub fn render_map(&self) -> String {
        let mut canvas: Vec<Vec<char>> = self
            .grid
            .rows()
            .map(|row| row.iter().map(|terrain| terrain.symbol()).collect())
            .collect();

        for agent in &self.agents {
            let (x, y) = agent.position();
            if self.grid.in_bounds(x, y) {
                canvas[y as usize][x as usize] = if agent.is_alive() {
                    agent.species().letter()
                } else {
                    '*'
                };
            }
        }

        let mut out = String::new();
        for row in canvas {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    pub fn draw_map(&self) {
        println!("\n=== World Map ===");
        println!("Legend: S=Street, W=Wall, G=Grass, T=Trail, L=Light, C=Crosswalk");
        println!("        a=Atv, b=Bicycle, c=Car, h=Human, x=Taxi, t=Truck, *=Dead");
        println!();
        print!("{}", self.render_map());
        println!();
    }
}
