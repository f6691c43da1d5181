//! Start-cell placement
//!
//! Placements are sequential: each empire draws uniformly from the occupied
//! cells still unclaimed when its turn comes, so earlier placements shrink
//! the later pools. An empty pool fails the whole placement with
//! `PlacementExhausted` instead of spinning on rejection sampling.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::conquest::empire::{Empire, EmpireRegistry};
use crate::conquest::grid::{OwnershipGrid, UNCLAIMED};
use crate::conquest::strategy::Strategy;
use crate::core::error::{ConquestError, Result};
use crate::core::types::{Coord, EmpireId};

/// Give every empire in `bindings` a distinct random start cell, claiming it
/// on the grid. Bindings are processed in slice order.
pub fn place_empires(
    bindings: &[(EmpireId, Option<Strategy>)],
    ownership: &mut OwnershipGrid,
    rng: &mut ChaCha8Rng,
) -> Result<EmpireRegistry> {
    let mut pool: Vec<Coord> = ownership
        .cells()
        .filter(|&(_, owner)| owner == UNCLAIMED)
        .map(|(c, _)| c)
        .collect();

    let mut registry = EmpireRegistry::new();

    for &(id, strategy) in bindings {
        if pool.is_empty() {
            return Err(ConquestError::PlacementExhausted(id));
        }
        let cell = pool.swap_remove(rng.gen_range(0..pool.len()));
        ownership.claim(cell, id);
        registry.insert(Empire::new(id, strategy, cell));
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conquest::grid::OccupancyGrid;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_each_empire_gets_one_distinct_cell() {
        let occupancy = OccupancyGrid::from_cells(3, 3, vec![true; 9]).unwrap();
        let mut ownership = OwnershipGrid::from_occupancy(&occupancy);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let bindings: Vec<_> = (1..=4)
            .map(|id| (EmpireId(id), Some(Strategy::RandomFrontier)))
            .collect();

        let registry = place_empires(&bindings, &mut ownership, &mut rng).unwrap();

        assert_eq!(registry.len(), 4);
        let mut seen = HashSet::new();
        for empire in registry.iter() {
            assert_eq!(empire.size(), 1);
            let cell = empire.cells[0];
            assert!(seen.insert(cell), "start cells must be distinct");
            assert_eq!(ownership.get(cell), Some(empire.id.0 as i32));
        }
    }

    #[test]
    fn test_exhausted_pool_names_the_failing_empire() {
        let occupancy = OccupancyGrid::from_cells(2, 2, vec![true, false, false, false]).unwrap();
        let mut ownership = OwnershipGrid::from_occupancy(&occupancy);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let bindings = vec![
            (EmpireId(1), Some(Strategy::FreeNeighbor)),
            (EmpireId(2), Some(Strategy::FreeNeighbor)),
        ];

        let err = place_empires(&bindings, &mut ownership, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ConquestError::PlacementExhausted(EmpireId(2))
        ));
    }

    #[test]
    fn test_placement_never_picks_void_cells() {
        let cells = vec![false, true, false, true, false, true];
        let occupancy = OccupancyGrid::from_cells(3, 2, cells).unwrap();
        let mut ownership = OwnershipGrid::from_occupancy(&occupancy);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let bindings: Vec<_> = (1..=3)
            .map(|id| (EmpireId(id), Some(Strategy::FreeNeighbor)))
            .collect();

        let registry = place_empires(&bindings, &mut ownership, &mut rng).unwrap();

        for empire in registry.iter() {
            assert!(occupancy.is_occupied(empire.cells[0]));
        }
    }
}
