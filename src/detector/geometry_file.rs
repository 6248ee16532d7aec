//! # Geometry file ingestion
//!
//! Builds a [`ModuleMap`] from a surveyed tube-position file.
//!
//! ## Overview
//! -----------------
//! The expected input is CSV with a header line and one row per tube:
//!
//! ```csv
//! module,det_id,x,y,z
//! T1X,10000001,0.0,0.0,0.0
//! T1X,10000002,5.0,0.0,10.0
//! ```
//!
//! Rows are grouped into modules keyed by the `module` column, preserving file
//! order inside each module. Parsing is **fail-fast**: the first malformed row
//! aborts ingestion with a record-precise [`ParseGeometryError`].
//!
//! ## Validation
//! -----------------
//! - `det_id` must decode (see [`DetId::parse`](crate::det_id::DetId::parse)).
//! - The module key encoded in `det_id` must equal the `module` column, so a
//!   later hit lookup resolves into the same module the tube was filed under.
//! - Duplicate tube ids inside a module are rejected by
//!   [`DtModule::add_tube`](crate::detector::DtModule::add_tube).
//!
//! ## See also
//! ------------
//! * [`GeometryFile`] – Constructor/extend trait implemented for [`ModuleMap`].
//! * [`DtModule`](crate::detector::DtModule) – Per-module tube storage.

use std::io::Read;
use std::path::Path;

use nalgebra::Vector3;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::Centimeter;
use crate::det_id::{DetId, DetIdError};
use crate::detector::{DriftTube, DtModule, ModuleMap};
use crate::driftview_errors::DriftviewError;

/// Geometry CSV parsing failure.
#[derive(Error, Debug)]
pub enum ParseGeometryError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record}: invalid detector id {det_id}: {source}")]
    InvalidDetId {
        record: usize,
        det_id: u32,
        source: DetIdError,
    },

    #[error("record {record}: module column {found} does not match id-encoded module {expected}")]
    ModuleMismatch {
        record: usize,
        found: String,
        expected: String,
    },
}

/// One row of the geometry file.
#[derive(Debug, Deserialize)]
struct TubeRecord {
    module: String,
    det_id: u32,
    x: Centimeter,
    y: Centimeter,
    z: Centimeter,
}

/// Build or extend a [`ModuleMap`] from geometry files.
pub trait GeometryFile: Sized {
    /// Create a module map from a geometry CSV file.
    fn new_from_csv(path: impl AsRef<Path>) -> Result<Self, DriftviewError>;

    /// Ingest a geometry CSV file into an existing map.
    fn add_from_csv(&mut self, path: impl AsRef<Path>) -> Result<(), DriftviewError>;

    /// Ingest geometry CSV from any reader (in-memory buffers included).
    fn add_from_reader<R: Read>(&mut self, reader: R) -> Result<(), DriftviewError>;
}

impl GeometryFile for ModuleMap {
    fn new_from_csv(path: impl AsRef<Path>) -> Result<Self, DriftviewError> {
        let mut modules = ModuleMap::new();
        modules.add_from_csv(path)?;
        Ok(modules)
    }

    fn add_from_csv(&mut self, path: impl AsRef<Path>) -> Result<(), DriftviewError> {
        let reader = csv::Reader::from_path(path.as_ref()).map_err(ParseGeometryError::from)?;
        ingest(self, reader)
    }

    fn add_from_reader<R: Read>(&mut self, reader: R) -> Result<(), DriftviewError> {
        ingest(self, csv::Reader::from_reader(reader))
    }
}

fn ingest<R: Read>(
    modules: &mut ModuleMap,
    mut reader: csv::Reader<R>,
) -> Result<(), DriftviewError> {
    for (slot, row) in reader.deserialize::<TubeRecord>().enumerate() {
        // 1-based data record number, header excluded
        let record = slot + 1;
        let row = row.map_err(ParseGeometryError::from)?;

        let det_id = DetId(row.det_id);
        let parsed = det_id
            .parse()
            .map_err(|source| ParseGeometryError::InvalidDetId {
                record,
                det_id: row.det_id,
                source,
            })?;

        let expected = parsed.module_key();
        if expected != row.module {
            return Err(ParseGeometryError::ModuleMismatch {
                record,
                found: row.module,
                expected,
            }
            .into());
        }

        modules
            .entry(row.module.clone())
            .or_insert_with(|| DtModule::empty(row.module))
            .add_tube(DriftTube::new(det_id, Vector3::new(row.x, row.y, row.z)))?;
    }
    Ok(())
}

#[cfg(test)]
mod geometry_file_tests {
    use super::*;

    const GEOMETRY: &str = "\
module,det_id,x,y,z
T1X,10000001,0.0,0.0,0.0
T1X,10000002,5.0,0.0,10.0
T2V,22000001,-3.5,0.0,250.0
";

    #[test]
    fn test_ingest_groups_by_module() {
        let mut modules = ModuleMap::new();
        modules.add_from_reader(GEOMETRY.as_bytes()).unwrap();

        assert_eq!(modules.len(), 2);
        let t1x = modules.get("T1X").unwrap();
        assert_eq!(t1x.tubes().len(), 2);
        assert_eq!(t1x.tubes()[1].position, Vector3::new(5.0, 0.0, 10.0));

        let t2v = modules.get("T2V").unwrap();
        assert_eq!(t2v.tubes().len(), 1);
        assert_eq!(t2v.tubes()[0].id, DetId(22000001));
    }

    #[test]
    fn test_module_mismatch_is_rejected() {
        let data = "module,det_id,x,y,z\nT2X,10000001,0.0,0.0,0.0\n";
        let mut modules = ModuleMap::new();
        let err = modules.add_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DriftviewError::GeometryParsing(ParseGeometryError::ModuleMismatch {
                record: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_det_id_is_rejected() {
        // view digit 5 is not a stereo view
        let data = "module,det_id,x,y,z\nT1X,15000001,0.0,0.0,0.0\n";
        let mut modules = ModuleMap::new();
        let err = modules.add_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DriftviewError::GeometryParsing(ParseGeometryError::InvalidDetId { .. })
        ));
    }

    #[test]
    fn test_duplicate_tube_is_rejected() {
        let data = "\
module,det_id,x,y,z
T1X,10000001,0.0,0.0,0.0
T1X,10000001,5.0,0.0,10.0
";
        let mut modules = ModuleMap::new();
        let err = modules.add_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DriftviewError::DuplicateTubeId { .. }));
    }
}
