//! Occupancy and ownership grids
//!
//! Both grids are flat row-major buffers indexed `y * width + x`. Everything
//! outside this module goes through coordinate accessors; raw offsets stay
//! private.

use crate::core::error::{ConquestError, Result};
use crate::core::types::{Coord, EmpireId};

/// Ownership value for cells outside the world. Fixed at construction.
pub const VOID: i32 = -1;
/// Ownership value for occupied cells no empire has claimed yet.
pub const UNCLAIMED: i32 = 0;

/// Boolean W×H matrix marking which cells belong to the simulated world.
/// Immutable once handed to an engine.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Build from row-major cells; the length must match the dimensions.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConquestError::InvalidConfiguration(format!(
                "occupancy grid must have positive dimensions, got {width}x{height}"
            )));
        }
        if cells.len() != width * height {
            return Err(ConquestError::InvalidConfiguration(format!(
                "occupancy grid {}x{} expects {} cells, got {}",
                width,
                height,
                width * height,
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// All-empty grid of the given dimensions, for builders to fill in.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        Self::from_cells(width, height, vec![false; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell is part of the world. Out-of-bounds reads as false.
    pub fn is_occupied(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height && self.cells[c.y * self.width + c.x]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    pub(crate) fn set(&mut self, c: Coord, occupied: bool) {
        if c.x < self.width && c.y < self.height {
            self.cells[c.y * self.width + c.x] = occupied;
        }
    }
}

/// Integer W×H matrix tracking per-cell ownership: `VOID`, `UNCLAIMED`, or a
/// positive empire id. A cell is `VOID` iff the source occupancy grid is
/// false there; that never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipGrid {
    width: usize,
    height: usize,
    cells: Vec<i32>,
}

impl OwnershipGrid {
    /// Derive a fresh grid: every occupied cell starts unclaimed.
    pub fn from_occupancy(occupancy: &OccupancyGrid) -> Self {
        let mut cells = Vec::with_capacity(occupancy.width() * occupancy.height());
        for y in 0..occupancy.height() {
            for x in 0..occupancy.width() {
                cells.push(if occupancy.is_occupied(Coord::new(x, y)) {
                    UNCLAIMED
                } else {
                    VOID
                });
            }
        }
        Self {
            width: occupancy.width(),
            height: occupancy.height(),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Ownership value at `c`, or None out of bounds.
    pub fn get(&self, c: Coord) -> Option<i32> {
        if c.x < self.width && c.y < self.height {
            Some(self.cells[c.y * self.width + c.x])
        } else {
            None
        }
    }

    pub fn is_unclaimed(&self, c: Coord) -> bool {
        self.get(c) == Some(UNCLAIMED)
    }

    /// Step from `from` by an orthogonal offset, staying in bounds.
    pub fn step(&self, from: Coord, delta: (i32, i32)) -> Option<Coord> {
        let x = from.x as i64 + i64::from(delta.0);
        let y = from.y as i64 + i64::from(delta.1);
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some(Coord::new(x as usize, y as usize))
        }
    }

    /// Iterate every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &owner)| (Coord::new(i % width, i / width), owner))
    }

    /// Total cells that are part of the world, claimed or not.
    pub fn total_occupied(&self) -> u32 {
        self.cells.iter().filter(|&&owner| owner != VOID).count() as u32
    }

    pub(crate) fn claim(&mut self, c: Coord, empire: EmpireId) {
        debug_assert!(self.is_unclaimed(c), "claimed cell must be unclaimed");
        self.cells[c.y * self.width + c.x] = empire.0 as i32;
    }
}
