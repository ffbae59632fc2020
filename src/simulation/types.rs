//! Core value types for the crossing simulation
//!
//! Headings, terrain kinds, and signal states. None of these depend on the
//! grid or on any agent.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use rand::Rng;

/// A compass heading on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four headings, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// Rotate 90 degrees counter-clockwise
    pub fn left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Rotate 90 degrees clockwise
    pub fn right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Uniform pick among the four headings
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Column delta when stepping one cell in this heading
    pub fn dx(self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }

    /// Row delta when stepping one cell in this heading (north is up)
    pub fn dy(self) -> i32 {
        match self {
            Direction::South => 1,
            Direction::North => -1,
            Direction::East | Direction::West => 0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => bail!("unknown direction '{}'", s),
        }
    }
}

/// The kind of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Street,
    Wall,
    Grass,
    Trail,
    /// Light-controlled street cell
    Light,
    /// Light-controlled pedestrian crossing
    Crosswalk,
}

impl Terrain {
    /// Character used for this terrain in map files and console output
    pub fn symbol(self) -> char {
        match self {
            Terrain::Street => 'S',
            Terrain::Wall => 'W',
            Terrain::Grass => 'G',
            Terrain::Trail => 'T',
            Terrain::Light => 'L',
            Terrain::Crosswalk => 'C',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Terrain> {
        match symbol {
            'S' => Some(Terrain::Street),
            'W' => Some(Terrain::Wall),
            'G' => Some(Terrain::Grass),
            'T' => Some(Terrain::Trail),
            'L' => Some(Terrain::Light),
            'C' => Some(Terrain::Crosswalk),
            _ => None,
        }
    }

    /// Street-like cells that motor vehicles drive on
    pub fn is_roadway(self) -> bool {
        matches!(self, Terrain::Street | Terrain::Light | Terrain::Crosswalk)
    }
}

/// Shared signal phase for light-controlled cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightState {
    Green,
    Yellow,
    Red,
}

impl LightState {
    /// Next phase in the Green -> Yellow -> Red cycle
    pub fn advance(self) -> LightState {
        match self {
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
            LightState::Red => LightState::Green,
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightState::Green => "GREEN",
            LightState::Yellow => "YELLOW",
            LightState::Red => "RED",
        };
        write!(f, "{}", name)
    }
}

/// Terrain of the four cells around an agent, keyed by heading
pub type Neighbors = HashMap<Direction, Terrain>;

/// A unique identifier for an agent in a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentId(pub usize);

/// Ticks the dispatch vehicle waits at a red crosswalk before going through
pub const RED_LIGHT_WAIT_TICKS: u32 = 3;

/// Default number of ticks each light phase lasts
pub const DEFAULT_LIGHT_PHASE_TICKS: u32 = 19;
