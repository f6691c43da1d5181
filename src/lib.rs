//! Grid Conquest - competitive territorial expansion over occupancy grids
//!
//! The conquest core (grids, placement, growth strategies, turn loop,
//! statistics) performs no I/O and prescribes no parallelism; worldgen,
//! render, and report are the collaborators around it.

pub mod conquest;
pub mod core;
pub mod render;
pub mod report;
pub mod worldgen;
