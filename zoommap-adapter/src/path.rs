use alloc::vec::Vec;

use zoommap::{MapGeometry, Point};

/// Converts a polyline from virtual map space into drawn-map space.
///
/// Uses the same centering offset the transformer applies to entry positions, so a path drawn
/// through marker positions passes under the markers.
pub fn to_map_path(geometry: &MapGeometry, points: &[Point]) -> Vec<Point> {
    points.iter().map(|&p| geometry.to_map(p)).collect()
}

/// Clamps a reveal progress into `[0, 1]`; NaN maps to `0`.
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}
