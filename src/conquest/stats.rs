//! Final ownership statistics

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::conquest::grid::{OwnershipGrid, UNCLAIMED, VOID};
use crate::core::types::EmpireId;

/// Final size and share of the occupied world for one empire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmpireStanding {
    pub size: u32,
    pub percentage: f64,
}

/// Scan the grid once: count occupied cells, then per-empire counts and
/// percentages. A zero-occupancy world yields percentage 0 rather than a
/// division by zero. The returned map carries no ordering.
pub fn calculate(grid: &OwnershipGrid) -> HashMap<EmpireId, EmpireStanding> {
    let mut total_occupied = 0u32;
    let mut counts: HashMap<EmpireId, u32> = HashMap::new();

    for (_, owner) in grid.cells() {
        if owner == VOID {
            continue;
        }
        total_occupied += 1;
        if owner > UNCLAIMED {
            *counts.entry(EmpireId(owner as u32)).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(id, size)| {
            let percentage = if total_occupied == 0 {
                0.0
            } else {
                f64::from(size) / f64::from(total_occupied) * 100.0
            };
            (id, EmpireStanding { size, percentage })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conquest::grid::OccupancyGrid;
    use crate::core::types::Coord;

    #[test]
    fn test_counts_and_percentages() {
        let occupancy = OccupancyGrid::from_cells(2, 2, vec![true, true, true, false]).unwrap();
        let mut ownership = OwnershipGrid::from_occupancy(&occupancy);
        ownership.claim(Coord::new(0, 0), EmpireId(1));
        ownership.claim(Coord::new(1, 0), EmpireId(1));
        ownership.claim(Coord::new(0, 1), EmpireId(2));

        let standings = calculate(&ownership);

        assert_eq!(standings.len(), 2);
        let first = standings[&EmpireId(1)];
        assert_eq!(first.size, 2);
        assert!((first.percentage - 200.0 / 3.0).abs() < 1e-9);
        let second = standings[&EmpireId(2)];
        assert_eq!(second.size, 1);
        assert!((second.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unclaimed_cells_count_toward_total_only() {
        let occupancy = OccupancyGrid::from_cells(2, 1, vec![true, true]).unwrap();
        let mut ownership = OwnershipGrid::from_occupancy(&occupancy);
        ownership.claim(Coord::new(0, 0), EmpireId(1));

        let standings = calculate(&ownership);
        assert!((standings[&EmpireId(1)].percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_world_produces_no_entries() {
        let occupancy = OccupancyGrid::blank(3, 3).unwrap();
        let ownership = OwnershipGrid::from_occupancy(&occupancy);

        assert_eq!(ownership.total_occupied(), 0);
        assert!(calculate(&ownership).is_empty());
    }
}
