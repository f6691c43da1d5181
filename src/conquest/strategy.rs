//! Growth strategies
//!
//! Each strategy consumes an empire's owned-cell sequence and the shared
//! ownership grid and claims at most one cell per call. The RNG draw order
//! is fixed (frontier selection, then tie-break, then direction or neighbor
//! choice) so a seeded run reproduces exactly.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::conquest::empire::Empire;
use crate::conquest::grid::OwnershipGrid;
use crate::core::error::{ConquestError, Result};
use crate::core::types::{Coord, EmpireId};

/// Orthogonal step offsets; the random direction die maps onto this order.
const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The closed set of growth algorithms an empire can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Algorithm 1: random owned cell, random direction; claims only when
    /// the die happens to point at a free cell.
    RandomFrontier,
    /// Algorithm 2: owned cell with the most unclaimed neighbors (ties
    /// broken at random), then the same single random-direction attempt.
    GreedyFrontier,
    /// Algorithm 3: random owned cell, then a uniform choice among its
    /// unclaimed neighbors; stalls only when that cell is fully enclosed.
    FreeNeighbor,
}

/// Result of one expansion attempt. A stall is expected behavior, not an
/// error; algorithms 1 and 2 can stall indefinitely on an enclosed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Claimed(Coord),
    Stalled,
}

impl Strategy {
    /// Resolve a wire-level algorithm id. Ids outside 1..=3 are rejected
    /// here, which keeps the turn loop's dispatch exhaustive.
    pub fn from_id(id: u8, empire: EmpireId) -> Result<Self> {
        match id {
            1 => Ok(Self::RandomFrontier),
            2 => Ok(Self::GreedyFrontier),
            3 => Ok(Self::FreeNeighbor),
            _ => Err(ConquestError::UnsupportedAlgorithm {
                empire,
                algorithm: id,
            }),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::RandomFrontier => 1,
            Self::GreedyFrontier => 2,
            Self::FreeNeighbor => 3,
        }
    }

    /// Run one expansion attempt for `empire` against the shared grid.
    pub fn attempt_expand(
        self,
        empire: &mut Empire,
        grid: &mut OwnershipGrid,
        rng: &mut ChaCha8Rng,
    ) -> Outcome {
        if empire.cells.is_empty() {
            return Outcome::Stalled;
        }

        match self {
            Self::RandomFrontier => {
                let index = rng.gen_range(0..empire.cells.len());
                let origin = empire.cells[index];
                step_random_direction(origin, empire, grid, rng)
            }
            Self::GreedyFrontier => {
                let origin = busiest_frontier_cell(empire, grid, rng);
                step_random_direction(origin, empire, grid, rng)
            }
            Self::FreeNeighbor => {
                let index = rng.gen_range(0..empire.cells.len());
                let free = free_neighbors(empire.cells[index], grid);
                if free.is_empty() {
                    Outcome::Stalled
                } else {
                    claim(empire, grid, free[rng.gen_range(0..free.len())])
                }
            }
        }
    }
}

/// Roll a direction die from `origin`; claim the target cell if it is
/// in-bounds and unclaimed, otherwise stall this turn.
fn step_random_direction(
    origin: Coord,
    empire: &mut Empire,
    grid: &mut OwnershipGrid,
    rng: &mut ChaCha8Rng,
) -> Outcome {
    let delta = ORTHOGONAL[rng.gen_range(0..ORTHOGONAL.len())];
    match grid.step(origin, delta) {
        Some(target) if grid.is_unclaimed(target) => claim(empire, grid, target),
        _ => Outcome::Stalled,
    }
}

fn claim(empire: &mut Empire, grid: &mut OwnershipGrid, cell: Coord) -> Outcome {
    grid.claim(cell, empire.id);
    empire.cells.push(cell);
    Outcome::Claimed(cell)
}

/// The owned cell with the most unclaimed orthogonal neighbors; ties are
/// broken uniformly at random. The cell sequence must be non-empty.
fn busiest_frontier_cell(empire: &Empire, grid: &OwnershipGrid, rng: &mut ChaCha8Rng) -> Coord {
    let mut best: Vec<usize> = Vec::new();
    let mut max_free = 0;

    for (index, &cell) in empire.cells.iter().enumerate() {
        let free = free_neighbors(cell, grid).len();
        if free > max_free {
            best.clear();
            max_free = free;
        }
        if free == max_free {
            best.push(index);
        }
    }

    empire.cells[best[rng.gen_range(0..best.len())]]
}

fn free_neighbors(cell: Coord, grid: &OwnershipGrid) -> Vec<Coord> {
    ORTHOGONAL
        .iter()
        .filter_map(|&delta| grid.step(cell, delta))
        .filter(|&neighbor| grid.is_unclaimed(neighbor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conquest::grid::OccupancyGrid;
    use rand::SeedableRng;

    fn full_world(width: usize, height: usize) -> OwnershipGrid {
        let occupancy = OccupancyGrid::from_cells(width, height, vec![true; width * height])
            .unwrap();
        OwnershipGrid::from_occupancy(&occupancy)
    }

    fn empire_at(grid: &mut OwnershipGrid, id: u32, start: Coord) -> Empire {
        grid.claim(start, EmpireId(id));
        Empire::new(EmpireId(id), Some(Strategy::FreeNeighbor), start)
    }

    #[test]
    fn test_from_id_resolves_known_algorithms() {
        let empire = EmpireId(1);
        assert_eq!(
            Strategy::from_id(1, empire).unwrap(),
            Strategy::RandomFrontier
        );
        assert_eq!(
            Strategy::from_id(2, empire).unwrap(),
            Strategy::GreedyFrontier
        );
        assert_eq!(Strategy::from_id(3, empire).unwrap(), Strategy::FreeNeighbor);
    }

    #[test]
    fn test_from_id_rejects_unknown_algorithm() {
        let err = Strategy::from_id(9, EmpireId(4)).unwrap_err();
        assert!(matches!(
            err,
            ConquestError::UnsupportedAlgorithm {
                empire: EmpireId(4),
                algorithm: 9
            }
        ));
    }

    #[test]
    fn test_free_neighbor_claims_the_only_neighbor() {
        let mut grid = full_world(2, 1);
        let mut empire = empire_at(&mut grid, 1, Coord::new(0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let outcome = Strategy::FreeNeighbor.attempt_expand(&mut empire, &mut grid, &mut rng);

        assert_eq!(outcome, Outcome::Claimed(Coord::new(1, 0)));
        assert_eq!(empire.size(), 2);
        assert_eq!(grid.get(Coord::new(1, 0)), Some(1));
    }

    #[test]
    fn test_free_neighbor_stalls_when_enclosed() {
        let mut grid = full_world(1, 1);
        let mut empire = empire_at(&mut grid, 1, Coord::new(0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let outcome = Strategy::FreeNeighbor.attempt_expand(&mut empire, &mut grid, &mut rng);

        assert_eq!(outcome, Outcome::Stalled);
        assert_eq!(empire.size(), 1);
    }

    #[test]
    fn test_random_frontier_stalls_on_one_cell_world() {
        let mut grid = full_world(1, 1);
        let mut empire = empire_at(&mut grid, 1, Coord::new(0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        for _ in 0..20 {
            let outcome =
                Strategy::RandomFrontier.attempt_expand(&mut empire, &mut grid, &mut rng);
            assert_eq!(outcome, Outcome::Stalled);
        }
    }

    #[test]
    fn test_busiest_frontier_prefers_open_cell() {
        let mut grid = full_world(3, 1);
        let mut empire = empire_at(&mut grid, 1, Coord::new(0, 0));
        grid.claim(Coord::new(1, 0), EmpireId(1));
        empire.cells.push(Coord::new(1, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        // (0,0) has no free neighbor; (1,0) borders the free cell (2,0).
        let chosen = busiest_frontier_cell(&empire, &grid, &mut rng);
        assert_eq!(chosen, Coord::new(1, 0));
    }

    #[test]
    fn test_empty_empire_is_skipped() {
        let mut grid = full_world(2, 2);
        let mut empire = Empire {
            id: EmpireId(1),
            strategy: Some(Strategy::FreeNeighbor),
            cells: Vec::new(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let outcome = Strategy::FreeNeighbor.attempt_expand(&mut empire, &mut grid, &mut rng);
        assert_eq!(outcome, Outcome::Stalled);
    }
}
