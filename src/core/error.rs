use thiserror::Error;

use crate::core::types::EmpireId;

#[derive(Error, Debug)]
pub enum ConquestError {
    #[error("no unclaimed occupied cell left to place empire {0}")]
    PlacementExhausted(EmpireId),

    #[error("empire {empire} is bound to unknown algorithm {algorithm}")]
    UnsupportedAlgorithm { empire: EmpireId, algorithm: u8 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ConquestError>;
