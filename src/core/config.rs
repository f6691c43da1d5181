//! Run configuration
//!
//! Collects the knobs a conquest run needs. `validate` fails fast with
//! `InvalidConfiguration` before any world is built or any empire placed.

use crate::core::error::{ConquestError, Result};

/// Configuration for a full conquest run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// World width in cells
    pub width: usize,
    /// World height in cells
    pub height: usize,
    /// Target fraction of the grid that is part of the world (0.0 to 1.0)
    pub coverage: f64,
    /// Number of empires competing on the grid
    pub empires: u32,
    /// Number of turns; every empire gets one expansion attempt per turn
    pub turns: u32,
    /// Seed for the run's random source
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            coverage: 0.6,
            empires: 5,
            turns: 25000,
            seed: 1,
        }
    }
}

impl RunConfig {
    /// Validate for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConquestError::InvalidConfiguration(format!(
                "world dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if !(0.0..=1.0).contains(&self.coverage) {
            return Err(ConquestError::InvalidConfiguration(format!(
                "coverage must be within [0, 1], got {}",
                self.coverage
            )));
        }

        if self.empires == 0 {
            return Err(ConquestError::InvalidConfiguration(
                "at least one empire is required".into(),
            ));
        }

        if self.empires as usize > self.width * self.height {
            return Err(ConquestError::InvalidConfiguration(format!(
                "{} empires cannot fit a {}x{} world",
                self.empires, self.width, self.height
            )));
        }

        Ok(())
    }
}
