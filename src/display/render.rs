//! Backend rendering of a [`Scene`].
//!
//! Circles are drawn in data coordinates as sampled polygons so their radii
//! live in detector centimeters, not pixels. The output backend is selected
//! from the configured file extension: `.svg` renders through the vector
//! backend, anything else through the bitmap backend.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::display::config::DisplayConfig;
use crate::display::primitives::{CircleSpec, Rgb, Scene};
use crate::driftview_errors::DriftviewError;

/// Vertices per sampled circle outline.
const CIRCLE_SEGMENTS: usize = 64;

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn backend_err<E: std::error::Error + Send + Sync>(
    err: DrawingAreaErrorKind<E>,
) -> DriftviewError {
    DriftviewError::Rendering(err.to_string())
}

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn circle_vertices(center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (CIRCLE_SEGMENTS as f64);
            (
                center.0 + radius * theta.cos(),
                center.1 + radius * theta.sin(),
            )
        })
        .collect()
}

fn draw_circle<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    circle: &CircleSpec,
) -> Result<(), DriftviewError> {
    let vertices = circle_vertices(circle.center, circle.radius);
    let color = to_rgb(circle.color);

    if circle.filled {
        chart
            .draw_series(std::iter::once(Polygon::new(vertices.clone(), color.filled())))
            .map_err(backend_err)?;
    }
    chart
        .draw_series(std::iter::once(PathElement::new(
            vertices,
            color.stroke_width(circle.stroke_width),
        )))
        .map_err(backend_err)?;
    Ok(())
}

fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    config: &DisplayConfig,
) -> Result<(), DriftviewError> {
    root.fill(&WHITE).map_err(backend_err)?;

    // Bare canvas, no axes: the projection is a picture, not a plot.
    let bounds = config.canvas;
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .build_cartesian_2d(bounds.z_min..bounds.z_max, bounds.x_min..bounds.x_max)
        .map_err(backend_err)?;

    for circle in scene.detector.iter().chain(scene.hits.iter()) {
        draw_circle(&mut chart, circle)?;
    }

    if !scene.trajectory.is_empty() {
        let style = to_rgb(scene.trajectory.color).stroke_width(scene.trajectory.width);
        chart
            .draw_series(LineSeries::new(
                scene.trajectory.vertices.iter().copied(),
                style,
            ))
            .map_err(backend_err)?;
    }

    Ok(())
}

/// Render `scene` to the configured output file, overwriting it.
pub(crate) fn render_scene(scene: &Scene, config: &DisplayConfig) -> Result<(), DriftviewError> {
    config.canvas.validate()?;

    let path = &config.output_path;
    let is_svg = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if is_svg {
        let root = SVGBackend::new(path, config.canvas_size).into_drawing_area();
        draw_scene(&root, scene, config)?;
        root.present().map_err(backend_err)?;
    } else {
        let root = BitMapBackend::new(path, config.canvas_size).into_drawing_area();
        draw_scene(&root, scene, config)?;
        root.present().map_err(backend_err)?;
    }
    Ok(())
}
