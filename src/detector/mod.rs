//! # Detector geometry: drift tubes and modules
//!
//! In-memory model of the drift-tube detector as seen by the event display:
//! a [`ModuleMap`] keyed by [`ModuleKey`](crate::constants::ModuleKey), each
//! module holding its tubes in construction order.
//!
//! Tube lookup by detector id goes through a per-module index that is built
//! once at construction and reused across display calls, so resolving a hit
//! is O(1) instead of a scan over the module's tube list.
//!
//! Geometries are either assembled in memory ([`DtModule::new`],
//! [`DtModule::add_tube`]) or ingested from a CSV survey file via the
//! [`GeometryFile`](crate::detector::geometry_file::GeometryFile) trait.

pub mod geometry_file;

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::constants::{Centimeter, ModuleKey};
use crate::det_id::DetId;
use crate::driftview_errors::DriftviewError;

/// Lookup table from module key to [`DtModule`]
pub type ModuleMap = HashMap<ModuleKey, DtModule>;

/// A single drift tube: identifier plus wire-center position.
///
/// # Fields
///
/// * `id` - The packed detector id of the tube
/// * `position` - Wire center in detector coordinates, centimeters
#[derive(Debug, Clone, PartialEq)]
pub struct DriftTube {
    pub id: DetId,
    pub position: Vector3<Centimeter>,
}

impl DriftTube {
    /// Create a new drift tube
    pub fn new(id: impl Into<DetId>, position: Vector3<Centimeter>) -> Self {
        DriftTube {
            id: id.into(),
            position,
        }
    }
}

/// One detector module: an ordered tube collection with an id index.
#[derive(Debug, Clone, PartialEq)]
pub struct DtModule {
    name: ModuleKey,
    tubes: Vec<DriftTube>,
    /// Slot of each tube id inside `tubes`, built once at construction.
    index: HashMap<DetId, usize>,
}

impl DtModule {
    /// Create a module from its name and tube list.
    ///
    /// Arguments
    /// -----------------
    /// * `name`: module key, e.g. `"T1X"`.
    /// * `tubes`: tubes in detector order.
    ///
    /// Return
    /// ----------
    /// * The module, or [`DriftviewError::DuplicateTubeId`] if two tubes share
    ///   an id.
    pub fn new(name: impl Into<ModuleKey>, tubes: Vec<DriftTube>) -> Result<Self, DriftviewError> {
        let mut module = DtModule {
            name: name.into(),
            tubes: Vec::with_capacity(tubes.len()),
            index: HashMap::with_capacity(tubes.len()),
        };
        for tube in tubes {
            module.add_tube(tube)?;
        }
        Ok(module)
    }

    /// Create an empty module.
    pub fn empty(name: impl Into<ModuleKey>) -> Self {
        DtModule {
            name: name.into(),
            tubes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a tube, keeping the id index in sync.
    pub fn add_tube(&mut self, tube: DriftTube) -> Result<(), DriftviewError> {
        if self.index.contains_key(&tube.id) {
            return Err(DriftviewError::DuplicateTubeId {
                det_id: tube.id,
                module: self.name.clone(),
            });
        }
        self.index.insert(tube.id, self.tubes.len());
        self.tubes.push(tube);
        Ok(())
    }

    /// Module key this module was built with.
    pub fn name(&self) -> &ModuleKey {
        &self.name
    }

    /// Tubes in construction order.
    pub fn tubes(&self) -> &[DriftTube] {
        &self.tubes
    }

    /// Resolve a tube by detector id through the precomputed index.
    pub fn tube_by_id(&self, det_id: DetId) -> Option<&DriftTube> {
        self.index.get(&det_id).map(|&slot| &self.tubes[slot])
    }
}

/// Total tube count over all modules of a [`ModuleMap`].
pub fn total_tubes(modules: &ModuleMap) -> usize {
    modules.values().map(|module| module.tubes().len()).sum()
}
