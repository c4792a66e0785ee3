use zoommap::{EntryAdapter, Point, Recycler, RecyclerOptions, Size, ViewportTransformer};

use crate::{Color, DEFAULT_PATH_COLOR, MapSurface, PanZoomEngine, clamp_progress, to_map_path};

/// A framework-neutral map widget core: a [`Recycler`] wired to a pan/zoom engine and a
/// background surface.
///
/// This type does not hold any toolkit objects. Hosts drive it by calling:
/// - `notify_*` when the marker dataset changes
/// - `on_engine_update` whenever the engine reports a new pan/zoom
/// - `on_global_layout` after the host finishes a layout pass
///
/// Dataset changes made before the surface is laid out are positioned by the first
/// `on_global_layout` that finds the surface laid out and the engine zoom finite.
#[derive(Debug)]
pub struct MapController<A: EntryAdapter, E, S> {
    recycler: Recycler<A>,
    engine: E,
    surface: S,
    default_path_color: Color,
    update_after_layout: bool,
}

impl<A: EntryAdapter, E: PanZoomEngine, S: MapSurface> MapController<A, E, S> {
    pub fn new(options: RecyclerOptions, engine: E, surface: S) -> Self {
        Self {
            recycler: Recycler::new(options),
            engine,
            surface,
            default_path_color: DEFAULT_PATH_COLOR,
            update_after_layout: true,
        }
    }

    pub fn with_default_path_color(mut self, color: Color) -> Self {
        self.default_path_color = color;
        self
    }

    pub fn recycler(&self) -> &Recycler<A> {
        &self.recycler
    }

    pub fn recycler_mut(&mut self) -> &mut Recycler<A> {
        &mut self.recycler
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (Recycler<A>, E, S) {
        (self.recycler, self.engine, self.surface)
    }

    /// Whether the next eligible `on_global_layout` will run an update.
    pub fn update_after_layout(&self) -> bool {
        self.update_after_layout
    }

    /// Attaches a dataset (full reset) and returns the previous one.
    pub fn set_adapter(&mut self, adapter: Option<A>) -> Option<A> {
        let prev = self.recycler.set_adapter(adapter);
        self.update_after_layout = true;
        prev
    }

    pub fn notify_reset(&mut self) {
        self.recycler.notify_reset();
        self.update_after_layout = true;
    }

    pub fn notify_inserted(&mut self, position: usize, count: usize) {
        self.recycler.notify_inserted(position, count);
        self.update_after_layout = true;
    }

    pub fn notify_removed(&mut self, position: usize, count: usize) {
        self.recycler.notify_removed(position, count);
        self.update_after_layout = true;
    }

    pub fn notify_moved(&mut self, from: usize, to: usize) {
        self.recycler.notify_moved(from, to);
        self.update_after_layout = true;
    }

    pub fn notify_changed(&mut self, position: usize, count: usize) {
        self.recycler.notify_changed(position, count);
        self.update_after_layout = true;
    }

    /// Reports the measured content size to the engine and runs a deferred update if one is
    /// due.
    pub fn on_global_layout(&mut self) {
        let measured = self.surface.measured_size();
        let insets = self.recycler.options().content_insets;
        self.engine.set_content_size(Size::new(
            measured.width + insets.horizontal(),
            measured.height + insets.vertical(),
        ));

        if self.surface.is_laid_out()
            && self.update_after_layout
            && self.engine.zoom().is_finite()
        {
            self.update_after_layout = false;
            self.update();
        } else {
            atrace!(
                laid_out = self.surface.is_laid_out(),
                pending = self.update_after_layout,
                "on_global_layout: update skipped"
            );
        }
    }

    /// Call this from the engine's update listener.
    pub fn on_engine_update(&mut self) {
        self.update();
    }

    fn update(&mut self) {
        let viewport = self.engine.viewport();
        self.recycler.on_viewport_changed(viewport);
        let background = match self.recycler.last_layout() {
            Some(pass) => pass.background,
            None => ViewportTransformer::from_options(self.recycler.options()).background(&viewport),
        };
        self.surface.set_transform(background);
    }

    /// Adds a path given in virtual map space, with the default color when `color` is `None`.
    pub fn add_path(&mut self, points: &[Point], color: Option<Color>) {
        let geometry = self.recycler.options().geometry;
        let converted = to_map_path(&geometry, points);
        adebug!(points = converted.len(), "add_path");
        self.surface
            .add_path(&converted, color.unwrap_or(self.default_path_color));
    }

    pub fn reset_paths(&mut self) {
        self.surface.reset_paths();
    }

    pub fn set_path_progress(&mut self, progress: f32) {
        self.surface.set_path_progress(clamp_progress(progress));
    }

    /// Releases every handle and detaches the dataset.
    pub fn teardown(&mut self) -> Option<A> {
        self.update_after_layout = true;
        self.recycler.teardown()
    }
}
