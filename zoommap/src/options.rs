use alloc::sync::Arc;

use crate::{DepthRange, Insets, LayoutPass, MapGeometry, Misconfiguration, Size};

/// A callback fired after every completed update pass.
///
/// Hosts typically use it to reposition the background surface or to invalidate scroll bars.
pub type OnLayoutCallback = Arc<dyn Fn(&LayoutPass) + Send + Sync>;

/// Configuration for [`crate::Recycler`].
///
/// Cheap to clone: the only heavy field is stored in an `Arc`.
pub struct RecyclerOptions {
    /// Logical map dimensions (and optional virtual map space around it).
    pub geometry: MapGeometry,

    /// Padding included in the measured content size that the map does not cover.
    pub content_insets: Insets,

    /// Output range of the zoom → depth rate remap.
    pub depth_range: DepthRange,

    /// Upper bound on retired handles kept per type tag. `None` keeps every retired handle.
    pub max_pooled_per_tag: Option<usize>,

    /// Optional callback fired after each update pass.
    pub on_layout: Option<OnLayoutCallback>,
}

impl Clone for RecyclerOptions {
    fn clone(&self) -> Self {
        Self {
            geometry: self.geometry,
            content_insets: self.content_insets,
            depth_range: self.depth_range,
            max_pooled_per_tag: self.max_pooled_per_tag,
            on_layout: self.on_layout.clone(),
        }
    }
}

impl Default for RecyclerOptions {
    fn default() -> Self {
        Self {
            geometry: MapGeometry::default(),
            content_insets: Insets::default(),
            depth_range: DepthRange::default(),
            max_pooled_per_tag: None,
            on_layout: None,
        }
    }
}

impl RecyclerOptions {
    /// Creates options for a map of the given logical size.
    pub fn new(map_size: Size) -> Self {
        Self {
            geometry: MapGeometry::new(map_size),
            ..Self::default()
        }
    }

    pub fn with_geometry(mut self, geometry: MapGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the virtual map space that entry positions are expressed in.
    pub fn with_virtual_size(mut self, virtual_size: Option<Size>) -> Self {
        self.geometry.virtual_size = virtual_size;
        self
    }

    pub fn with_content_insets(mut self, content_insets: Insets) -> Self {
        self.content_insets = content_insets;
        self
    }

    pub fn with_depth_range(mut self, depth_range: DepthRange) -> Self {
        self.depth_range = depth_range;
        self
    }

    pub fn with_max_pooled_per_tag(mut self, max: Option<usize>) -> Self {
        self.max_pooled_per_tag = max;
        self
    }

    pub fn with_on_layout(
        mut self,
        on_layout: Option<impl Fn(&LayoutPass) + Send + Sync + 'static>,
    ) -> Self {
        self.on_layout = on_layout.map(|f| Arc::new(f) as _);
        self
    }

    /// Reports configuration that makes the translation undefined.
    pub fn misconfiguration(&self) -> Option<Misconfiguration> {
        self.geometry.misconfiguration()
    }
}

impl core::fmt::Debug for RecyclerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("geometry", &self.geometry)
            .field("content_insets", &self.content_insets)
            .field("depth_range", &self.depth_range)
            .field("max_pooled_per_tag", &self.max_pooled_per_tag)
            .finish_non_exhaustive()
    }
}
