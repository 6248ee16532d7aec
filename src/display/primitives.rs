//! Drawable primitives of the event display.
//!
//! Builders produce plain values ([`CircleSpec`], [`TrackLine`], grouped into
//! a [`Scene`]) that are only later handed to the drawing backend. The split
//! keeps the geometry logic comparable for equality in tests, without any
//! plotting toolkit in the loop.

use nalgebra::Vector3;

use crate::constants::Centimeter;

/// RGB color of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Highlight color used for drift circles.
    pub const RED: Rgb = Rgb(220, 50, 47);
    /// Secondary highlight used for the trajectory.
    pub const BLUE: Rgb = Rgb(38, 139, 210);
}

/// Project a detector position onto the display plane.
///
/// The display's horizontal axis is detector **z**, the vertical axis is
/// detector **x**; the y component is dropped.
pub fn project_zx(position: &Vector3<Centimeter>) -> (Centimeter, Centimeter) {
    (position.z, position.x)
}

/// One circle to draw: a tube outline or a filled drift circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSpec {
    /// Center in display coordinates `(z, x)`, centimeters.
    pub center: (Centimeter, Centimeter),
    pub radius: Centimeter,
    pub filled: bool,
    pub color: Rgb,
    /// Outline stroke width in pixels.
    pub stroke_width: u32,
}

/// The trajectory polyline: fitted-state positions joined by straight
/// segments, in propagation order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLine {
    /// Vertices in display coordinates `(z, x)`, centimeters.
    pub vertices: Vec<(Centimeter, Centimeter)>,
    pub color: Rgb,
    /// Line width in pixels.
    pub width: u32,
}

impl TrackLine {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// All primitives produced for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// One unfilled circle per detector tube.
    pub detector: Vec<CircleSpec>,
    /// One filled circle per measurement point, in point order.
    pub hits: Vec<CircleSpec>,
    pub trajectory: TrackLine,
}
