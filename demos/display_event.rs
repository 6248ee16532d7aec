//! Minimal driver: ingest a small survey geometry, build a straight track
//! through it, and write the event display.
//!
//! Usage:
//!   display_event [OUTPUT]
//!
//! OUTPUT defaults to `Test_disp.svg`; a `.png` extension switches to the
//! bitmap backend. Set `RUST_LOG=debug` to see the scene statistics.

use nalgebra::Vector3;

use driftview::detector::geometry_file::GeometryFile;
use driftview::detector::{total_tubes, ModuleMap};
use driftview::display::config::{CanvasBounds, DisplayConfig};
use driftview::display::EventDisplay;
use driftview::driftview_errors::DriftviewError;
use driftview::track::{FitState, FittedTrack, Measurement};

/// Two X-view stations, eight tubes each, as they would come out of a survey
/// file.
const GEOMETRY_CSV: &str = "\
module,det_id,x,y,z
T1X,10000001,-14.0,0.0,0.0
T1X,10000002,-10.0,0.0,0.0
T1X,10000003,-6.0,0.0,0.0
T1X,10000004,-2.0,0.0,0.0
T1X,10000005,2.0,0.0,0.0
T1X,10000006,6.0,0.0,0.0
T1X,10000007,10.0,0.0,0.0
T1X,10000008,14.0,0.0,0.0
T2X,20000001,-14.0,0.0,200.0
T2X,20000002,-10.0,0.0,200.0
T2X,20000003,-6.0,0.0,200.0
T2X,20000004,-2.0,0.0,200.0
T2X,20000005,2.0,0.0,200.0
T2X,20000006,6.0,0.0,200.0
T2X,20000007,10.0,0.0,200.0
T2X,20000008,14.0,0.0,200.0
";

/// A track that crosses both stations: two measured drift radii plus three
/// fitted states on a straight line.
fn demo_track() -> FittedTrack {
    FittedTrack::new(
        vec![
            Measurement::new(10000004u32, 0.6),
            Measurement::new(20000006u32, 1.3),
        ],
        vec![
            FitState::new(Vector3::new(-3.0, 0.0, -30.0)),
            FitState::new(Vector3::new(1.0, 0.0, 105.0)),
            FitState::new(Vector3::new(5.0, 0.0, 230.0)),
        ],
    )
}

fn main() -> Result<(), DriftviewError> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Test_disp.svg".to_string());

    let mut modules = ModuleMap::new();
    modules.add_from_reader(GEOMETRY_CSV.as_bytes())?;
    println!(
        "geometry: {} modules, {} tubes",
        modules.len(),
        total_tubes(&modules)
    );

    let mut config = DisplayConfig::with_output(&output);
    if let Some(bounds) = CanvasBounds::enclosing(&modules, 30.0) {
        config.canvas = bounds;
    }

    EventDisplay::new(config).display_event(&demo_track(), &modules)?;
    println!("event display written to {output}");
    Ok(())
}
