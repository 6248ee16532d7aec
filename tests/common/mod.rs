use std::path::PathBuf;

use nalgebra::Vector3;

use driftview::det_id::{make_det_id, DetId, TubeView};
use driftview::detector::{DriftTube, DtModule, ModuleMap};
use driftview::track::{FitState, FittedTrack, Measurement};

/// Id of tube `n` in the single-layer X module of `station`.
pub fn x_tube_id(station: u8, n: u16) -> DetId {
    make_det_id(station, TubeView::X, 0, 0, n)
}

/// Two-station test detector: 8 tubes per station, 4.0 cm pitch along x,
/// stations at z = 0 and z = 200.
pub fn demo_detector() -> ModuleMap {
    let mut modules = ModuleMap::new();
    for (station, z) in [(1u8, 0.0f64), (2u8, 200.0)] {
        let key = format!("T{station}X");
        let tubes = (1u16..=8)
            .map(|n| {
                let x = -14.0 + 4.0 * f64::from(n - 1);
                DriftTube::new(x_tube_id(station, n), Vector3::new(x, 0.0, z))
            })
            .collect();
        modules.insert(key.clone(), DtModule::new(key, tubes).unwrap());
    }
    modules
}

/// A track crossing both stations: one hit per station plus three fitted
/// states along a straight line.
pub fn demo_track() -> FittedTrack {
    FittedTrack::new(
        vec![
            Measurement::new(x_tube_id(1, 4), 0.6),
            Measurement::new(x_tube_id(2, 6), 1.3),
        ],
        vec![
            FitState::new(Vector3::new(-2.5, 0.0, -20.0)),
            FitState::new(Vector3::new(1.0, 0.0, 100.0)),
            FitState::new(Vector3::new(4.5, 0.0, 220.0)),
        ],
    )
}

/// Per-test output path inside the system temp directory.
pub fn temp_output(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}
