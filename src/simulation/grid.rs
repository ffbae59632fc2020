//! Terrain grid for the crossing simulation

use anyhow::{bail, Result};

use super::types::{Direction, Neighbors, Terrain};

/// A rectangular grid of terrain cells, addressed as (x = column, y = row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimGrid {
    cells: Vec<Vec<Terrain>>,
    width: usize,
}

impl SimGrid {
    /// Build a grid from rows of terrain. All rows must be the same width.
    pub fn new(cells: Vec<Vec<Terrain>>) -> Result<Self> {
        let width = cells.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            bail!("grid must have at least one non-empty row");
        }
        if let Some(row) = cells.iter().position(|row| row.len() != width) {
            bail!(
                "row {} has {} cells, expected {}",
                row,
                cells[row].len(),
                width
            );
        }
        Ok(Self { cells, width })
    }

    /// Parse one line of terrain symbols
    pub fn parse_row(line: &str) -> Result<Vec<Terrain>> {
        line.chars()
            .map(|symbol| match Terrain::from_symbol(symbol) {
                Some(terrain) => Ok(terrain),
                None => bail!("unknown terrain symbol '{}'", symbol),
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height()
    }

    /// Terrain at (x, y); anything off the grid is a wall
    pub fn terrain(&self, x: i32, y: i32) -> Terrain {
        if self.in_bounds(x, y) {
            self.cells[y as usize][x as usize]
        } else {
            Terrain::Wall
        }
    }

    /// Terrain of the four cells around (x, y)
    pub fn neighbors(&self, x: i32, y: i32) -> Neighbors {
        Direction::ALL
            .into_iter()
            .map(|dir| (dir, self.terrain(x + dir.dx(), y + dir.dy())))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Terrain]> {
        self.cells.iter().map(Vec::as_slice)
    }
}
