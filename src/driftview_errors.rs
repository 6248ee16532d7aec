use thiserror::Error;

use crate::constants::ModuleKey;
use crate::det_id::{DetId, DetIdError};
use crate::detector::geometry_file::ParseGeometryError;

/// Crate-level error type of the event display.
#[derive(Error, Debug)]
pub enum DriftviewError {
    #[error("Invalid detector id: {0}")]
    InvalidDetId(#[from] DetIdError),

    #[error("No module {module} in detector for detector id {det_id}")]
    ModuleNotFound { det_id: DetId, module: ModuleKey },

    #[error("No tube with detector id {det_id} in module {module}")]
    TubeNotFound { det_id: DetId, module: ModuleKey },

    #[error("Duplicate tube id {det_id} in module {module}")]
    DuplicateTubeId { det_id: DetId, module: ModuleKey },

    #[error("Error during the geometry file parsing: {0}")]
    GeometryParsing(#[from] ParseGeometryError),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid canvas bounds: {0}")]
    InvalidCanvas(String),

    #[error("Drawing backend error: {0}")]
    Rendering(String),
}

impl PartialEq for DriftviewError {
    fn eq(&self, other: &Self) -> bool {
        use DriftviewError::*;
        match (self, other) {
            (InvalidDetId(a), InvalidDetId(b)) => a == b,
            (
                ModuleNotFound { det_id: a, module: m },
                ModuleNotFound { det_id: b, module: n },
            ) => a == b && m == n,
            (
                TubeNotFound { det_id: a, module: m },
                TubeNotFound { det_id: b, module: n },
            ) => a == b && m == n,
            (
                DuplicateTubeId { det_id: a, module: m },
                DuplicateTubeId { det_id: b, module: n },
            ) => a == b && m == n,

            // Payloads are not comparable, equality is same-variant
            (GeometryParsing(_), GeometryParsing(_)) => true,
            (IoError(_), IoError(_)) => true,

            (InvalidCanvas(a), InvalidCanvas(b)) => a == b,
            (Rendering(a), Rendering(b)) => a == b,

            _ => false,
        }
    }
}
