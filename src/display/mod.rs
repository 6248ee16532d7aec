//! # Event display: detector projection, drift circles, trajectory
//!
//! High-level driver drawing one reconstructed event in the x–z projection:
//! the positions of all drift tubes in the detector, the drift circle of
//! every measured hit, and the fitted track, persisted as a single image
//! file.
//!
//! Modules
//! -----------------
//! * [`config`](crate::display::config) – Explicit display configuration
//!   (output path, canvas bounds, styling, missing-hit policy).
//! * [`primitives`](crate::display::primitives) – Backend-free drawable
//!   values ([`Scene`], circles, polyline).
//! * [`builders`](crate::display::builders) – Geometry/track →
//!   [`Scene`] construction.
//! * *(crate-private)* `render` – `plotters` backend drawing and file output.
//!
//! Pipeline
//! -----------------
//! [`EventDisplay::display_event`] runs the fixed linear sequence: build tube
//! circles → build drift circles → build trajectory → render all three layers
//! onto the canvas → save. There is no branching beyond error propagation and
//! no state kept between invocations; the output file is overwritten on every
//! call (last writer wins).
//!
//! Quick-Start
//! -----------------
//! ```rust,no_run
//! use driftview::detector::{geometry_file::GeometryFile, ModuleMap};
//! use driftview::display::{display_event, EventDisplay};
//! use driftview::display::config::DisplayConfig;
//! use driftview::track::FittedTrack;
//!
//! # fn run() -> Result<(), driftview::driftview_errors::DriftviewError> {
//! let modules = ModuleMap::new_from_csv("geometry.csv")?;
//! let track = FittedTrack::empty();
//!
//! // Stock configuration writes Test_disp.svg
//! display_event(&track, &modules)?;
//!
//! // Or configure explicitly
//! let display = EventDisplay::new(DisplayConfig::with_output("event_042.svg"));
//! display.display_event(&track, &modules)?;
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod config;
pub mod primitives;
mod render;

use crate::detector::ModuleMap;
use crate::display::builders::build_scene;
use crate::display::config::DisplayConfig;
use crate::display::primitives::Scene;
use crate::driftview_errors::DriftviewError;
use crate::track::TrackView;

/// Display driver bound to one [`DisplayConfig`].
#[derive(Debug, Clone, Default)]
pub struct EventDisplay {
    config: DisplayConfig,
}

impl EventDisplay {
    /// Driver with an explicit configuration.
    pub fn new(config: DisplayConfig) -> Self {
        EventDisplay { config }
    }

    /// Configuration this driver renders with.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Build the drawable primitives of one event without rendering them.
    ///
    /// Exposed so callers and tests can compare the produced primitive sets
    /// independently of the drawing backend.
    pub fn build_scene<T: TrackView>(
        &self,
        track: &T,
        modules: &ModuleMap,
    ) -> Result<Scene, DriftviewError> {
        build_scene(track, modules, &self.config)
    }

    /// Draw one event and persist it to the configured output file.
    ///
    /// Arguments
    /// -----------------
    /// * `track`: the reconstructed track to display.
    /// * `modules`: the detector geometry, keyed by module.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` once the file is written; any lookup, canvas, or I/O
    ///   failure as [`DriftviewError`].
    pub fn display_event<T: TrackView>(
        &self,
        track: &T,
        modules: &ModuleMap,
    ) -> Result<(), DriftviewError> {
        let scene = self.build_scene(track, modules)?;
        log::debug!(
            "event scene: {} tubes, {} hits, {} trajectory vertices -> {}",
            scene.detector.len(),
            scene.hits.len(),
            scene.trajectory.vertices.len(),
            self.config.output_path.display()
        );
        render::render_scene(&scene, &self.config)
    }
}

/// Draw one event with the stock configuration (writes
/// [`DEFAULT_OUTPUT_FILE`](crate::constants::DEFAULT_OUTPUT_FILE)).
pub fn display_event<T: TrackView>(
    track: &T,
    modules: &ModuleMap,
) -> Result<(), DriftviewError> {
    EventDisplay::default().display_event(track, modules)
}
