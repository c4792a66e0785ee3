use zoommap::{Point, Size, SurfaceTransform};

/// Packed ARGB color.
pub type Color = u32;

pub const DEFAULT_PATH_COLOR: Color = 0xFF00_0000;

/// The background layer the markers float over: the map image plus its path overlay.
///
/// Stroke rendering and progressive reveal are the surface's business; the controller only
/// positions it and hands over paths already converted to map space.
pub trait MapSurface {
    /// Applies the pan/zoom transform (pivot at the surface origin).
    fn set_transform(&mut self, transform: SurfaceTransform);

    /// Unscaled measured size of the map content.
    fn measured_size(&self) -> Size;

    /// Whether the surface has completed at least one layout.
    fn is_laid_out(&self) -> bool {
        true
    }

    /// Adds a polyline in map space.
    fn add_path(&mut self, points: &[Point], color: Color);

    fn reset_paths(&mut self);

    /// Fraction of every path revealed, in `[0, 1]`.
    fn set_path_progress(&mut self, progress: f32);
}
