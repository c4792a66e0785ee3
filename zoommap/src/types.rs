use core::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Padding between the host's measured content box and the drawn map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// The output range of the zoom → depth rate remap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthRange {
    /// Rate reported at `zoom_min` (and whenever the rate cannot be computed).
    pub min: f32,
    /// Rate reported at `zoom_max`.
    pub max: f32,
}

impl DepthRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            min: 0.15,
            max: 0.8,
        }
    }
}

/// Logical dimensions of the background map.
///
/// Entry positions are expressed in *virtual* map space. When `virtual_size` is larger than
/// `map`, the drawn map sits centered inside the virtual space, so positions are shifted by
/// `(virtual_size - map) / 2` before being projected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapGeometry {
    pub map: Size,
    pub virtual_size: Option<Size>,
}

impl MapGeometry {
    pub const fn new(map: Size) -> Self {
        Self {
            map,
            virtual_size: None,
        }
    }

    pub fn with_virtual_size(mut self, virtual_size: Option<Size>) -> Self {
        self.virtual_size = virtual_size;
        self
    }

    /// Offset of the drawn map's origin inside the virtual map space.
    pub fn virtual_offset(&self) -> Point {
        match self.virtual_size {
            Some(v) => Point::new(
                (v.width - self.map.width) / 2.0,
                (v.height - self.map.height) / 2.0,
            ),
            None => Point::ZERO,
        }
    }

    /// Converts a virtual-space position into drawn-map space.
    pub fn to_map(&self, position: Point) -> Point {
        let offset = self.virtual_offset();
        Point::new(position.x - offset.x, position.y - offset.y)
    }

    pub fn misconfiguration(&self) -> Option<Misconfiguration> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.map.width) && ok(self.map.height) {
            None
        } else {
            Some(Misconfiguration::NonPositiveMapSize {
                width: self.map.width,
                height: self.map.height,
            })
        }
    }
}

/// A read-only snapshot of the external pan/zoom engine's state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Pan offset in screen space.
    pub pan: Point,
    /// User-facing zoom, in the same units as `zoom_min`/`zoom_max`.
    pub zoom: f32,
    /// Scale actually applied on screen. Equals `zoom` unless the engine applies a base scale.
    pub real_zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Measured on-screen size of the content before scaling (insets included).
    pub content: Size,
}

impl Viewport {
    pub fn new(pan: Point, zoom: f32, zoom_min: f32, zoom_max: f32, content: Size) -> Self {
        Self {
            pan,
            zoom,
            real_zoom: zoom,
            zoom_min,
            zoom_max,
            content,
        }
    }

    pub fn with_real_zoom(mut self, real_zoom: f32) -> Self {
        self.real_zoom = real_zoom;
        self
    }

    pub fn misconfiguration(&self) -> Option<Misconfiguration> {
        let span = self.zoom_max - self.zoom_min;
        if span.is_finite() && span != 0.0 {
            None
        } else {
            Some(Misconfiguration::DegenerateZoomBounds {
                min: self.zoom_min,
                max: self.zoom_max,
            })
        }
    }
}

/// Transform applied to the background surface: pivot at the origin, uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceTransform {
    pub translation: Point,
    pub scale: f32,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self {
            translation: Point::ZERO,
            scale: 1.0,
        }
    }
}

/// Summary of one completed update pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPass {
    pub depth_rate: f32,
    /// Number of visible entries repositioned.
    pub entries: usize,
    pub background: SurfaceTransform,
}

/// Configuration that makes a transform undefined. The engine substitutes a neutral value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Misconfiguration {
    /// `zoom_max == zoom_min` (or non-finite): depth rate falls back to `DepthRange::min`.
    DegenerateZoomBounds { min: f32, max: f32 },
    /// Map width or height is not positive: positions contribute nothing to the translation.
    NonPositiveMapSize { width: f32, height: f32 },
}

impl fmt::Display for Misconfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateZoomBounds { min, max } => {
                write!(f, "degenerate zoom bounds (min={min}, max={max})")
            }
            Self::NonPositiveMapSize { width, height } => {
                write!(f, "non-positive map size ({width}x{height})")
            }
        }
    }
}
