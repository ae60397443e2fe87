use thiserror::Error;

use crate::core::Planet;

pub type DashaResult<T> = Result<T, DashaError>;

#[derive(Debug, Error)]
pub enum DashaError {
    #[error("no top-level period for planet {planet} in the dasha sequence")]
    MissingTopLevelPeriod { planet: Planet },

    #[error("no antardasha reference data for planet {planet}")]
    MissingReferenceData { planet: Planet },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
