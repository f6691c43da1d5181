//! The expansion engine: placement plus the deterministic turn loop

use std::collections::{BTreeMap, HashMap};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::conquest::empire::EmpireRegistry;
use crate::conquest::grid::{OccupancyGrid, OwnershipGrid};
use crate::conquest::placement;
use crate::conquest::stats::{self, EmpireStanding};
use crate::conquest::strategy::Strategy;
use crate::core::error::{ConquestError, Result};
use crate::core::types::EmpireId;

/// One conquest run over one occupancy grid.
///
/// The engine owns its grids, registry, and random source exclusively; a
/// fresh run gets a fresh engine. All randomness flows through the single
/// seeded generator, so identical seed, grid, mapping, and turn count
/// reproduce a bit-identical ownership grid.
pub struct ExpansionEngine {
    occupancy: OccupancyGrid,
    ownership: OwnershipGrid,
    empires: EmpireRegistry,
    rng: ChaCha8Rng,
}

impl ExpansionEngine {
    /// Derive a fresh ownership grid from `occupancy` and seed the engine's
    /// private random source.
    pub fn new(occupancy: OccupancyGrid, seed: u64) -> Self {
        let ownership = OwnershipGrid::from_occupancy(&occupancy);
        Self {
            occupancy,
            ownership,
            empires: EmpireRegistry::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    pub fn ownership(&self) -> &OwnershipGrid {
        &self.ownership
    }

    pub fn empires(&self) -> &EmpireRegistry {
        &self.empires
    }

    /// Place every empire in `mapping` and run `turns` turns. Within a turn,
    /// empires take their expansion attempts in ascending id order.
    ///
    /// An empire bound to an unknown algorithm id is diagnosed once, keeps
    /// its start cell, and sits out the whole run; other empires are
    /// unaffected. Placement failure aborts the run entirely.
    pub fn conquer(
        &mut self,
        mapping: &BTreeMap<EmpireId, u8>,
        turns: u32,
    ) -> Result<&OwnershipGrid> {
        if mapping.is_empty() {
            return Err(ConquestError::InvalidConfiguration(
                "empire mapping is empty".into(),
            ));
        }
        if !self.empires.is_empty() {
            return Err(ConquestError::InvalidConfiguration(
                "engine has already run a conquest".into(),
            ));
        }
        if let Some((&id, _)) = mapping.iter().find(|(id, _)| id.0 == 0) {
            return Err(ConquestError::InvalidConfiguration(format!(
                "empire id {id} is reserved for unclaimed cells"
            )));
        }

        // Resolve algorithm bindings up front so a bad id is diagnosed once.
        let mut bindings = Vec::with_capacity(mapping.len());
        for (&empire, &algorithm) in mapping {
            match Strategy::from_id(algorithm, empire) {
                Ok(strategy) => bindings.push((empire, Some(strategy))),
                Err(err) => {
                    tracing::warn!("{}; empire {} sits out this run", err, empire);
                    bindings.push((empire, None));
                }
            }
        }

        self.empires = placement::place_empires(&bindings, &mut self.ownership, &mut self.rng)?;

        for _ in 0..turns {
            for empire in self.empires.iter_mut() {
                let Some(strategy) = empire.strategy else {
                    continue;
                };
                strategy.attempt_expand(empire, &mut self.ownership, &mut self.rng);
            }
        }

        tracing::debug!(
            "conquest finished: {} empires, {} turns",
            self.empires.len(),
            turns
        );
        Ok(&self.ownership)
    }

    /// Final sizes and world shares, read from the current ownership grid.
    pub fn standings(&self) -> HashMap<EmpireId, EmpireStanding> {
        stats::calculate(&self.ownership)
    }
}
