//! The expansion core
//!
//! Grids, start-cell placement, the three growth strategies, the turn loop,
//! and final statistics. Performs no I/O; worldgen, render, and report sit
//! around it.

pub mod empire;
pub mod engine;
pub mod grid;
pub mod placement;
pub mod stats;
pub mod strategy;

pub use empire::{Empire, EmpireRegistry};
pub use engine::ExpansionEngine;
pub use grid::{OccupancyGrid, OwnershipGrid, UNCLAIMED, VOID};
pub use stats::EmpireStanding;
pub use strategy::{Outcome, Strategy};
