//! # Scene builders
//!
//! Turn detector geometry and a reconstructed track into the drawable
//! [`Scene`] of one event:
//!
//! - [`detector_circles`] – one unfilled circle per tube, fixed radius.
//! - [`drift_circles`] – one filled circle per measurement point, radius
//!   equal to the measured drift radius.
//! - [`track_line`] – the trajectory polyline through the fitted states.
//!
//! All centers and vertices are in display coordinates `(z, x)` (see
//! [`project_zx`]). Modules are visited in sorted-key order so the produced
//! scene, and with it the rendered file, is identical across calls and runs.

use itertools::Itertools;

use crate::detector::ModuleMap;
use crate::display::config::{DisplayConfig, MissingHitPolicy};
use crate::display::primitives::{project_zx, CircleSpec, Scene, TrackLine};
use crate::driftview_errors::DriftviewError;
use crate::track::{TrackPoint, TrackState, TrackView};

/// Build the unfilled tube circles of the whole detector.
pub fn detector_circles(modules: &ModuleMap, config: &DisplayConfig) -> Vec<CircleSpec> {
    modules
        .keys()
        .sorted()
        .flat_map(|key| modules[key].tubes())
        .map(|tube| CircleSpec {
            center: project_zx(&tube.position),
            radius: config.tube_radius,
            filled: false,
            color: config.tube_color,
            stroke_width: 1,
        })
        .collect()
}

/// Build the filled drift circles of a track, one per measurement point.
///
/// Each point's detector id is decoded to its module key, the module is
/// resolved in `modules`, and the tube is looked up through the module's id
/// index. The circle is centered on the tube and has the point's drift radius.
///
/// Return
/// ----------
/// * The circles in point order. An id whose module key is absent from
///   `modules` is always an error; a missing tube inside a resolved module is
///   governed by [`MissingHitPolicy`].
pub fn drift_circles<T: TrackView>(
    track: &T,
    modules: &ModuleMap,
    config: &DisplayConfig,
) -> Result<Vec<CircleSpec>, DriftviewError> {
    let points = track.points_with_measurement();
    let mut circles = Vec::with_capacity(points.len());

    for point in points {
        let det_id = point.det_id();
        let module_key = det_id.module_key()?;
        let module = modules
            .get(&module_key)
            .ok_or_else(|| DriftviewError::ModuleNotFound {
                det_id,
                module: module_key.clone(),
            })?;

        let tube = match module.tube_by_id(det_id) {
            Some(tube) => tube,
            None => match config.missing_hit_policy {
                MissingHitPolicy::Fail => {
                    return Err(DriftviewError::TubeNotFound {
                        det_id,
                        module: module_key,
                    })
                }
                MissingHitPolicy::SkipWithWarning => {
                    log::warn!(
                        "no tube with detector id {det_id} in module {module_key}, hit skipped"
                    );
                    continue;
                }
            },
        };

        circles.push(CircleSpec {
            center: project_zx(&tube.position),
            radius: point.drift_radius(),
            filled: true,
            color: config.hit_color,
            stroke_width: config.hit_outline_width,
        });
    }

    Ok(circles)
}

/// Build the trajectory polyline through the fitted states, in order.
pub fn track_line<T: TrackView>(track: &T, config: &DisplayConfig) -> TrackLine {
    TrackLine {
        vertices: track
            .fitted_states()
            .iter()
            .map(|state| project_zx(&state.position()))
            .collect(),
        color: config.track_color,
        width: config.track_width,
    }
}

/// Build the complete [`Scene`] of one event.
pub fn build_scene<T: TrackView>(
    track: &T,
    modules: &ModuleMap,
    config: &DisplayConfig,
) -> Result<Scene, DriftviewError> {
    Ok(Scene {
        detector: detector_circles(modules, config),
        hits: drift_circles(track, modules, config)?,
        trajectory: track_line(track, config),
    })
}

#[cfg(test)]
mod builders_tests {
    use super::*;
    use crate::det_id::{make_det_id, TubeView};
    use crate::detector::{total_tubes, DriftTube, DtModule};
    use crate::track::{FitState, FittedTrack, Measurement};
    use nalgebra::Vector3;

    /// One module, tubes at (0,0,0) and (5,0,10).
    fn two_tube_detector() -> ModuleMap {
        let mut modules = ModuleMap::new();
        modules.insert(
            "T1X".into(),
            DtModule::new(
                "T1X",
                vec![
                    DriftTube::new(
                        make_det_id(1, TubeView::X, 0, 0, 1),
                        Vector3::new(0.0, 0.0, 0.0),
                    ),
                    DriftTube::new(
                        make_det_id(1, TubeView::X, 0, 0, 2),
                        Vector3::new(5.0, 0.0, 10.0),
                    ),
                ],
            )
            .unwrap(),
        );
        modules
    }

    #[test]
    fn test_one_circle_per_tube() {
        let modules = two_tube_detector();
        let circles = detector_circles(&modules, &DisplayConfig::default());

        assert_eq!(circles.len(), total_tubes(&modules));
        for circle in &circles {
            assert!(!circle.filled);
            assert_eq!(circle.radius, 1.85);
        }
        // coordinate swap: tube at (x, y, z) is drawn at (z, x)
        assert_eq!(circles[0].center, (0.0, 0.0));
        assert_eq!(circles[1].center, (10.0, 5.0));
    }

    #[test]
    fn test_hit_circle_on_matched_tube() {
        let modules = two_tube_detector();
        let track = FittedTrack::new(
            vec![Measurement::new(make_det_id(1, TubeView::X, 0, 0, 2), 1.2)],
            vec![],
        );

        let circles = drift_circles(&track, &modules, &DisplayConfig::default()).unwrap();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].center, (10.0, 5.0));
        assert_eq!(circles[0].radius, 1.2);
        assert!(circles[0].filled);
    }

    #[test]
    fn test_hit_circles_keep_point_order() {
        let modules = two_tube_detector();
        let track = FittedTrack::new(
            vec![
                Measurement::new(make_det_id(1, TubeView::X, 0, 0, 2), 0.3),
                Measurement::new(make_det_id(1, TubeView::X, 0, 0, 1), 0.7),
            ],
            vec![],
        );

        let circles = drift_circles(&track, &modules, &DisplayConfig::default()).unwrap();
        let radii: Vec<f64> = circles.iter().map(|c| c.radius).collect();
        assert_eq!(radii, vec![0.3, 0.7]);
        assert_eq!(circles[0].center, (10.0, 5.0));
        assert_eq!(circles[1].center, (0.0, 0.0));
    }

    #[test]
    fn test_missing_tube_fails_by_default() {
        let modules = two_tube_detector();
        let track = FittedTrack::new(
            vec![Measurement::new(make_det_id(1, TubeView::X, 0, 0, 99), 0.5)],
            vec![],
        );

        let err = drift_circles(&track, &modules, &DisplayConfig::default()).unwrap_err();
        assert_eq!(
            err,
            DriftviewError::TubeNotFound {
                det_id: make_det_id(1, TubeView::X, 0, 0, 99),
                module: "T1X".into(),
            }
        );
    }

    #[test]
    fn test_missing_tube_skipped_under_lenient_policy() {
        let modules = two_tube_detector();
        let track = FittedTrack::new(
            vec![
                Measurement::new(make_det_id(1, TubeView::X, 0, 0, 99), 0.5),
                Measurement::new(make_det_id(1, TubeView::X, 0, 0, 1), 0.9),
            ],
            vec![],
        );
        let config = DisplayConfig {
            missing_hit_policy: MissingHitPolicy::SkipWithWarning,
            ..Default::default()
        };

        let circles = drift_circles(&track, &modules, &config).unwrap();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].radius, 0.9);
    }

    #[test]
    fn test_unknown_module_is_always_an_error() {
        let modules = two_tube_detector();
        let track = FittedTrack::new(
            vec![Measurement::new(make_det_id(2, TubeView::V, 0, 0, 1), 0.5)],
            vec![],
        );
        let config = DisplayConfig {
            missing_hit_policy: MissingHitPolicy::SkipWithWarning,
            ..Default::default()
        };

        let err = drift_circles(&track, &modules, &config).unwrap_err();
        assert!(matches!(err, DriftviewError::ModuleNotFound { .. }));
    }

    #[test]
    fn test_track_line_vertices_follow_states() {
        let track = FittedTrack::new(
            vec![],
            vec![
                FitState::new(Vector3::new(1.0, 9.0, -20.0)),
                FitState::new(Vector3::new(2.0, 9.0, 0.0)),
                FitState::new(Vector3::new(3.0, 9.0, 20.0)),
            ],
        );

        let line = track_line(&track, &DisplayConfig::default());
        assert_eq!(line.vertices, vec![(-20.0, 1.0), (0.0, 2.0), (20.0, 3.0)]);
    }

    #[test]
    fn test_empty_track_degrades_gracefully() {
        let modules = two_tube_detector();
        let scene = build_scene(&FittedTrack::empty(), &modules, &DisplayConfig::default()).unwrap();

        assert_eq!(scene.detector.len(), total_tubes(&modules));
        assert!(scene.hits.is_empty());
        assert!(scene.trajectory.is_empty());
    }

    #[test]
    fn test_scene_is_reproducible() {
        let modules = two_tube_detector();
        let track = FittedTrack::new(
            vec![Measurement::new(make_det_id(1, TubeView::X, 0, 0, 1), 0.4)],
            vec![
                FitState::new(Vector3::new(0.0, 0.0, -5.0)),
                FitState::new(Vector3::new(5.0, 0.0, 15.0)),
            ],
        );
        let config = DisplayConfig::default();

        let first = build_scene(&track, &modules, &config).unwrap();
        let second = build_scene(&track, &modules, &config).unwrap();
        assert_eq!(first, second);
    }
}
