use crate::{DepthRange, Insets, MapGeometry, Point, RecyclerOptions, SurfaceTransform, Viewport};

/// Remaps `zoom` linearly from `[zoom_min, zoom_max]` into `range`.
///
/// The result is not clamped: a zoom outside its bounds (e.g. over-pinch) extrapolates. When the
/// bounds are degenerate or the result is not finite, `range.min` is returned.
pub fn depth_rate(zoom: f32, zoom_min: f32, zoom_max: f32, range: DepthRange) -> f32 {
    let span = zoom_max - zoom_min;
    if !span.is_finite() || span == 0.0 {
        return range.min;
    }
    let normalized = (zoom - zoom_min) / span;
    let rate = normalized * (range.max - range.min) + range.min;
    if rate.is_finite() { rate } else { range.min }
}

/// Projects one axis of a map position onto the screen.
fn project_axis(
    pan: f32,
    pivot: f32,
    position: f32,
    map_extent: f32,
    content_extent: f32,
    scale: f32,
) -> f32 {
    let fraction = if map_extent.is_finite() && map_extent > 0.0 {
        position / map_extent
    } else {
        0.0
    };
    let placed = fraction * content_extent * scale;
    pan - pivot + if placed.is_finite() { placed } else { 0.0 }
}

/// Maps logical map positions to on-screen transforms for a viewport snapshot.
///
/// Stateless apart from the geometry it was built with; every method is a pure function of its
/// inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransformer {
    geometry: MapGeometry,
    insets: Insets,
    depth: DepthRange,
}

impl ViewportTransformer {
    pub fn new(geometry: MapGeometry, insets: Insets, depth: DepthRange) -> Self {
        Self {
            geometry,
            insets,
            depth,
        }
    }

    pub fn from_options(options: &RecyclerOptions) -> Self {
        Self::new(options.geometry, options.content_insets, options.depth_range)
    }

    pub fn geometry(&self) -> MapGeometry {
        self.geometry
    }

    /// On-screen translation for a handle at `position` (virtual map space) with `pivot`.
    ///
    /// `translation = pan - pivot + (position / map) * content * real_zoom`, per axis, where
    /// `content` excludes the insets.
    pub fn translation(&self, viewport: &Viewport, position: Point, pivot: Point) -> Point {
        let position = self.geometry.to_map(position);
        let map = self.geometry.map;
        let content_width = viewport.content.width - self.insets.horizontal();
        let content_height = viewport.content.height - self.insets.vertical();
        Point::new(
            project_axis(
                viewport.pan.x,
                pivot.x,
                position.x,
                map.width,
                content_width,
                viewport.real_zoom,
            ),
            project_axis(
                viewport.pan.y,
                pivot.y,
                position.y,
                map.height,
                content_height,
                viewport.real_zoom,
            ),
        )
    }

    pub fn depth_rate(&self, viewport: &Viewport) -> f32 {
        depth_rate(
            viewport.zoom,
            viewport.zoom_min,
            viewport.zoom_max,
            self.depth,
        )
    }

    /// Transform for the background surface (pivot at its origin).
    pub fn background(&self, viewport: &Viewport) -> SurfaceTransform {
        SurfaceTransform {
            translation: viewport.pan,
            scale: viewport.real_zoom,
        }
    }
}
