//! Occupancy-grid builders
//!
//! The conquest core consumes a ready-made occupancy grid; these builders
//! produce one from a width, height, and target coverage ratio. Two shapes
//! are available: scattered vertical column spans, and a single connected
//! blob grown from a random seed cell. Both hit the exact target count
//! `floor(coverage * width * height)`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::conquest::grid::OccupancyGrid;
use crate::core::error::{ConquestError, Result};
use crate::core::types::Coord;

fn target_cells(width: usize, height: usize, coverage: f64) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(ConquestError::InvalidConfiguration(format!(
            "world dimensions must be positive, got {width}x{height}"
        )));
    }
    if !(0.0..=1.0).contains(&coverage) {
        return Err(ConquestError::InvalidConfiguration(format!(
            "coverage must be within [0, 1], got {coverage}"
        )));
    }
    Ok((coverage * (width * height) as f64).floor() as usize)
}

fn neighbors(c: Coord, width: usize, height: usize) -> Vec<Coord> {
    let offsets: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    offsets
        .iter()
        .filter_map(|&(dx, dy)| {
            let x = c.x as i64 + i64::from(dx);
            let y = c.y as i64 + i64::from(dy);
            if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                None
            } else {
                Some(Coord::new(x as usize, y as usize))
            }
        })
        .collect()
}

/// Fill random vertical column spans until the target count is reached.
/// Produces a striped, fragmented world.
pub fn build_columns(
    width: usize,
    height: usize,
    coverage: f64,
    rng: &mut ChaCha8Rng,
) -> Result<OccupancyGrid> {
    let target = target_cells(width, height, coverage)?;
    let mut grid = OccupancyGrid::blank(width, height)?;

    let mut remaining = target;
    while remaining > 0 {
        let x = rng.gen_range(0..width);
        let start = rng.gen_range(0..height);
        let span = rng.gen_range(1..=height - start);

        for y in start..start + span {
            let c = Coord::new(x, y);
            if !grid.is_occupied(c) {
                grid.set(c, true);
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }
    }

    Ok(grid)
}

/// Grow one 4-connected blob from a random seed cell, claiming random
/// frontier cells until the target count is reached.
pub fn build_flood(
    width: usize,
    height: usize,
    coverage: f64,
    rng: &mut ChaCha8Rng,
) -> Result<OccupancyGrid> {
    let target = target_cells(width, height, coverage)?;
    let mut grid = OccupancyGrid::blank(width, height)?;
    if target == 0 {
        return Ok(grid);
    }

    let seed = Coord::new(rng.gen_range(0..width), rng.gen_range(0..height));
    grid.set(seed, true);
    let mut placed = 1;
    let mut frontier = neighbors(seed, width, height);

    while placed < target && !frontier.is_empty() {
        let next = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        if grid.is_occupied(next) {
            continue;
        }
        grid.set(next, true);
        placed += 1;

        for neighbor in neighbors(next, width, height) {
            if !grid.is_occupied(neighbor) && !frontier.contains(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }

    Ok(grid)
}
