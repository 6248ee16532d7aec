//! # Read-only track interfaces
//!
//! The event display consumes reconstructed tracks through **narrow
//! capability traits** instead of a concrete reconstruction-library type, so
//! the display logic stays testable against in-memory fixtures and any fitter
//! backend can plug in.
//!
//! A track exposes two ordered sequences:
//! - **measurement points** ([`TrackPoint`]): the raw hits used by the fit,
//!   each carrying a packed detector id and the raw-hit coordinate vector
//!   whose component [`DRIFT_RADIUS_INDEX`] is the drift radius,
//! - **fitted states** ([`TrackState`]): the fitted positions along the
//!   trajectory, in propagation order.
//!
//! [`FittedTrack`] is the crate's own minimal implementation, used by tests,
//! benches and the demo, and available to callers that already own their data.

use nalgebra::{SVector, Vector3};

use crate::constants::{Centimeter, DRIFT_RADIUS_INDEX};
use crate::det_id::DetId;

/// Raw-hit coordinate vector of a measurement (7 components).
pub type RawHitCoords = SVector<f64, 7>;

/// One raw measurement used by the track fit.
pub trait TrackPoint {
    /// Packed detector id of the hit tube.
    fn det_id(&self) -> DetId;

    /// Raw-hit coordinates as stored by the reconstruction.
    fn raw_hit_coords(&self) -> &RawHitCoords;

    /// Drift radius of the hit in centimeters.
    fn drift_radius(&self) -> Centimeter {
        self.raw_hit_coords()[DRIFT_RADIUS_INDEX]
    }
}

/// One fitted state along the trajectory.
pub trait TrackState {
    /// Fitted position in detector coordinates, centimeters.
    fn position(&self) -> Vector3<Centimeter>;
}

/// Read-only view of a reconstructed track.
pub trait TrackView {
    type Point: TrackPoint;
    type State: TrackState;

    /// Measurement points in fit order.
    fn points_with_measurement(&self) -> &[Self::Point];

    /// Fitted states in propagation order.
    fn fitted_states(&self) -> &[Self::State];
}

/// Concrete measurement point held by [`FittedTrack`].
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    det_id: DetId,
    raw_coords: RawHitCoords,
}

impl Measurement {
    /// Measurement from a detector id and drift radius only.
    ///
    /// The remaining raw coordinates are zeroed; the display path reads the
    /// drift radius alone.
    pub fn new(det_id: impl Into<DetId>, drift_radius: Centimeter) -> Self {
        let mut raw_coords = RawHitCoords::zeros();
        raw_coords[DRIFT_RADIUS_INDEX] = drift_radius;
        Measurement {
            det_id: det_id.into(),
            raw_coords,
        }
    }

    /// Measurement from the full raw coordinate vector.
    pub fn from_raw_coords(det_id: impl Into<DetId>, raw_coords: RawHitCoords) -> Self {
        Measurement {
            det_id: det_id.into(),
            raw_coords,
        }
    }
}

impl TrackPoint for Measurement {
    fn det_id(&self) -> DetId {
        self.det_id
    }

    fn raw_hit_coords(&self) -> &RawHitCoords {
        &self.raw_coords
    }
}

/// Concrete fitted state held by [`FittedTrack`].
#[derive(Debug, Clone, PartialEq)]
pub struct FitState {
    position: Vector3<Centimeter>,
}

impl FitState {
    pub fn new(position: Vector3<Centimeter>) -> Self {
        FitState { position }
    }
}

impl TrackState for FitState {
    fn position(&self) -> Vector3<Centimeter> {
        self.position
    }
}

/// Minimal owned track: measurement points plus fitted states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FittedTrack {
    points: Vec<Measurement>,
    states: Vec<FitState>,
}

impl FittedTrack {
    pub fn new(points: Vec<Measurement>, states: Vec<FitState>) -> Self {
        FittedTrack { points, states }
    }

    /// Track with no measurements and no fitted states.
    pub fn empty() -> Self {
        FittedTrack::default()
    }

    pub fn add_point(&mut self, point: Measurement) {
        self.points.push(point);
    }

    pub fn add_state(&mut self, state: FitState) {
        self.states.push(state);
    }
}

impl TrackView for FittedTrack {
    type Point = Measurement;
    type State = FitState;

    fn points_with_measurement(&self) -> &[Measurement] {
        &self.points
    }

    fn fitted_states(&self) -> &[FitState] {
        &self.states
    }
}
