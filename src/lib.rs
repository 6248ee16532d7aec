//! # Driftview: event display for a drift-tube tracking detector
//!
//! Draws a single reconstructed event in the **x–z projection**: the
//! positions of all drift tubes, the drift circle of every measured hit, and
//! the fitted track trajectory, persisted as one image file per call.
//!
//! Modules
//! -----------------
//! * [`det_id`] – Packed detector-id decoding (station/view/plane/layer/tube)
//!   and module-key derivation.
//! * [`detector`] – Drift tubes, modules with indexed tube lookup, and CSV
//!   geometry ingestion.
//! * [`track`] – Narrow read-only track interfaces plus the owned
//!   [`FittedTrack`] implementation.
//! * [`display`] – Scene builders, configuration, and the rendering driver.
//! * [`constants`] – Tube dimensions, raw-measurement layout, output default.
//! * [`driftview_errors`] – Crate-level error type.
//!
//! The track-reconstruction library and the detector-geometry model stay
//! external: tracks enter through the [`track::TrackView`] capability trait,
//! geometry through a caller-owned [`detector::ModuleMap`].

pub mod constants;
pub mod det_id;
pub mod detector;
pub mod display;
pub mod driftview_errors;
pub mod track;

pub use det_id::DetId;
pub use detector::{DriftTube, DtModule, ModuleMap};
pub use display::{display_event, EventDisplay};
pub use driftview_errors::DriftviewError;
pub use track::FittedTrack;
