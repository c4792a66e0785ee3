use zoommap::{Point, Size, Viewport};

/// The state a map widget reads from its pan/zoom engine.
///
/// Gesture handling (fling, pinch, over-scroll) lives entirely in the engine; the controller
/// only reads a snapshot after each engine update and reports the measured content size back.
pub trait PanZoomEngine {
    /// Current pan offset in screen space.
    fn pan(&self) -> Point;

    /// User-facing zoom, comparable to `zoom_bounds`.
    fn zoom(&self) -> f32;

    /// Scale applied on screen. Defaults to `zoom()` for engines without a base scale.
    fn real_zoom(&self) -> f32 {
        self.zoom()
    }

    /// `(min, max)` zoom.
    fn zoom_bounds(&self) -> (f32, f32);

    fn content_size(&self) -> Size;

    fn set_content_size(&mut self, size: Size);

    fn viewport(&self) -> Viewport {
        let (zoom_min, zoom_max) = self.zoom_bounds();
        Viewport::new(
            self.pan(),
            self.zoom(),
            zoom_min,
            zoom_max,
            self.content_size(),
        )
        .with_real_zoom(self.real_zoom())
    }
}

/// A plain-data engine for hosts that push pan/zoom state in from elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub pan: Point,
    pub zoom: f32,
    pub real_zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub content: Size,
}

impl EngineState {
    pub fn new(zoom_min: f32, zoom_max: f32) -> Self {
        Self {
            pan: Point::ZERO,
            zoom: zoom_min,
            real_zoom: zoom_min,
            zoom_min,
            zoom_max,
            content: Size::default(),
        }
    }

    /// Sets pan and zoom together; `real_zoom` follows `zoom`.
    pub fn set_transform(&mut self, pan: Point, zoom: f32) {
        self.pan = pan;
        self.zoom = zoom;
        self.real_zoom = zoom;
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(1.0, 2.5)
    }
}

impl PanZoomEngine for EngineState {
    fn pan(&self) -> Point {
        self.pan
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn real_zoom(&self) -> f32 {
        self.real_zoom
    }

    fn zoom_bounds(&self) -> (f32, f32) {
        (self.zoom_min, self.zoom_max)
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }
}
