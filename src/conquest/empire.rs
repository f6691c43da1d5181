//! Empires and the registry the turn loop walks

use std::collections::BTreeMap;

use crate::conquest::strategy::Strategy;
use crate::core::types::{Coord, EmpireId};

/// One empire: its id, bound strategy, and owned cells in acquisition order.
///
/// `strategy` is None when the empire was bound to an unknown algorithm id;
/// such an empire keeps its start cell but sits out every turn.
#[derive(Debug, Clone)]
pub struct Empire {
    pub id: EmpireId,
    pub strategy: Option<Strategy>,
    pub cells: Vec<Coord>,
}

impl Empire {
    pub fn new(id: EmpireId, strategy: Option<Strategy>, start: Coord) -> Self {
        Self {
            id,
            strategy,
            cells: vec![start],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

/// Registry of empires, iterated in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct EmpireRegistry {
    empires: BTreeMap<EmpireId, Empire>,
}

impl EmpireRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, empire: Empire) {
        self.empires.insert(empire.id, empire);
    }

    pub fn get(&self, id: EmpireId) -> Option<&Empire> {
        self.empires.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Empire> {
        self.empires.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Empire> {
        self.empires.values_mut()
    }

    pub fn len(&self) -> usize {
        self.empires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.empires.is_empty()
    }
}
