//! # Display configuration
//!
//! Explicit configuration of the event display: output location, canvas
//! bounds and pixel size, primitive styling, and the policy applied when a
//! hit cannot be matched to a tube. Every field the original display kept as
//! an embedded literal is an overridable parameter here;
//! [`DisplayConfig::default`] reproduces the stock appearance.

use std::path::PathBuf;

use itertools::{Itertools, MinMaxResult};

use crate::constants::{Centimeter, DEFAULT_OUTPUT_FILE, EPS, TUBE_RADIUS};
use crate::detector::ModuleMap;
use crate::display::primitives::Rgb;
use crate::driftview_errors::DriftviewError;

/// Behavior when a measurement point's id resolves to no tube in its module.
///
/// The module key itself missing from the [`ModuleMap`] is always an error,
/// independent of this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingHitPolicy {
    /// Abort the display with [`DriftviewError::TubeNotFound`].
    #[default]
    Fail,
    /// Drop the hit and emit a `log::warn!` record.
    SkipWithWarning,
}

/// Coordinate range of the canvas, centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub z_min: Centimeter,
    pub z_max: Centimeter,
    pub x_min: Centimeter,
    pub x_max: Centimeter,
}

impl Default for CanvasBounds {
    /// Stock range covering the four drift-tube stations.
    fn default() -> Self {
        CanvasBounds {
            z_min: -100.0,
            z_max: 700.0,
            x_min: -150.0,
            x_max: 150.0,
        }
    }
}

impl CanvasBounds {
    /// Smallest range containing every tube of `modules`, grown by `margin`
    /// on each side.
    ///
    /// Return
    /// ----------
    /// * `None` when the module map holds no tubes.
    pub fn enclosing(modules: &ModuleMap, margin: Centimeter) -> Option<Self> {
        let (z_min, z_max) = minmax_of(modules, |p| p.0)?;
        let (x_min, x_max) = minmax_of(modules, |p| p.1)?;
        Some(CanvasBounds {
            z_min: z_min - margin,
            z_max: z_max + margin,
            x_min: x_min - margin,
            x_max: x_max + margin,
        })
    }

    /// Check that both ranges are non-empty and finite.
    pub(crate) fn validate(&self) -> Result<(), DriftviewError> {
        let finite = [self.z_min, self.z_max, self.x_min, self.x_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.z_max - self.z_min < EPS || self.x_max - self.x_min < EPS {
            return Err(DriftviewError::InvalidCanvas(format!(
                "z [{}, {}] x [{}, {}]",
                self.z_min, self.z_max, self.x_min, self.x_max
            )));
        }
        Ok(())
    }
}

fn minmax_of(
    modules: &ModuleMap,
    component: impl Fn((Centimeter, Centimeter)) -> Centimeter,
) -> Option<(Centimeter, Centimeter)> {
    let values = modules
        .values()
        .flat_map(|module| module.tubes())
        .map(|tube| component((tube.position.z, tube.position.x)));
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Full configuration of one event display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Output file; the extension selects the backend (`.svg` vector,
    /// anything else bitmap). Overwritten unconditionally.
    pub output_path: PathBuf,
    pub canvas: CanvasBounds,
    /// Canvas size in pixels (width, height).
    pub canvas_size: (u32, u32),
    /// Radius of the detector-tube circles, centimeters.
    pub tube_radius: Centimeter,
    pub tube_color: Rgb,
    pub hit_color: Rgb,
    /// Outline stroke width of drift circles, pixels.
    pub hit_outline_width: u32,
    pub track_color: Rgb,
    /// Trajectory line width, pixels.
    pub track_width: u32,
    pub missing_hit_policy: MissingHitPolicy,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            canvas: CanvasBounds::default(),
            canvas_size: (1024, 768),
            tube_radius: TUBE_RADIUS,
            tube_color: Rgb::BLACK,
            hit_color: Rgb::RED,
            hit_outline_width: 2,
            track_color: Rgb::BLUE,
            track_width: 2,
            missing_hit_policy: MissingHitPolicy::default(),
        }
    }
}

impl DisplayConfig {
    /// Default configuration writing to `path`.
    pub fn with_output(path: impl Into<PathBuf>) -> Self {
        DisplayConfig {
            output_path: path.into(),
            ..Default::default()
        }
    }
}
