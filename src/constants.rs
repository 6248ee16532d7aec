//! # Constants and type definitions for driftview
//!
//! This module centralizes the **physical constants** and **common type
//! definitions** used throughout the `driftview` library: tube dimensions,
//! the raw-measurement layout, and the default output location of the event
//! display.

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// Outer radius of a drift tube in centimeters.
///
/// Detector tubes are drawn as circles with this fixed radius; drift circles
/// use the measured drift radius instead.
pub const TUBE_RADIUS: Centimeter = 1.85;

/// Index of the drift radius inside a raw-hit coordinate vector.
///
/// Raw measurements carry seven coordinates; the seventh entry holds the
/// drift radius in centimeters.
pub const DRIFT_RADIUS_INDEX: usize = 6;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-9;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in centimeters (detector length unit)
pub type Centimeter = f64;

/// Key identifying a detector module (station + view), e.g. `"T1X"` or `"T2V"`
pub type ModuleKey = String;

// -------------------------------------------------------------------------------------------------
// Output defaults
// -------------------------------------------------------------------------------------------------

/// File the display driver writes when no output path is configured.
///
/// The extension selects the drawing backend, see
/// [`DisplayConfig`](crate::display::config::DisplayConfig).
pub const DEFAULT_OUTPUT_FILE: &str = "Test_disp.svg";
