use crate::*;

use alloc::vec::Vec;
use zoommap::{
    EntryAdapter, EntryHandle, Insets, MapGeometry, Point, RecyclerOptions, Size,
    SurfaceTransform,
};

#[derive(Debug)]
struct Pin {
    position: Point,
    translation: Option<Point>,
    rate: Option<f32>,
}

impl EntryHandle for Pin {
    fn map_position(&self) -> Point {
        self.position
    }

    fn pivot(&self) -> Point {
        Point::new(4.0, 8.0)
    }

    fn set_translation(&mut self, translation: Point) {
        self.translation = Some(translation);
    }

    fn on_depth_rate_changed(&mut self, rate: f32) {
        self.rate = Some(rate);
    }
}

#[derive(Debug, Default)]
struct Pins {
    positions: Vec<Point>,
}

impl EntryAdapter for Pins {
    type Tag = ();
    type Handle = Pin;

    fn count(&self) -> usize {
        self.positions.len()
    }

    fn type_of(&self, _index: usize) {}

    fn create_handle(&mut self, _tag: ()) -> Pin {
        Pin {
            position: Point::ZERO,
            translation: None,
            rate: None,
        }
    }

    fn bind(&mut self, handle: &mut Pin, index: usize, _tag: ()) {
        handle.position = self.positions[index];
    }
}

#[derive(Debug, Default)]
struct Background {
    laid_out: bool,
    size: Size,
    transforms: Vec<SurfaceTransform>,
    paths: Vec<(Vec<Point>, Color)>,
    progress: Option<f32>,
}

impl MapSurface for Background {
    fn set_transform(&mut self, transform: SurfaceTransform) {
        self.transforms.push(transform);
    }

    fn measured_size(&self) -> Size {
        self.size
    }

    fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    fn add_path(&mut self, points: &[Point], color: Color) {
        self.paths.push((points.to_vec(), color));
    }

    fn reset_paths(&mut self) {
        self.paths.clear();
    }

    fn set_path_progress(&mut self, progress: f32) {
        self.progress = Some(progress);
    }
}

fn controller() -> MapController<Pins, EngineState, Background> {
    let options = RecyclerOptions::new(Size::new(100.0, 100.0));
    let surface = Background {
        size: Size::new(200.0, 200.0),
        ..Background::default()
    };
    MapController::new(options, EngineState::new(1.0, 3.0), surface)
}

#[test]
fn first_update_waits_for_global_layout() {
    let mut c = controller();
    c.set_adapter(Some(Pins {
        positions: alloc::vec![Point::new(50.0, 25.0)],
    }));
    assert!(c.update_after_layout());

    // Not laid out yet: content size is recorded, but nothing is positioned.
    c.on_global_layout();
    assert_eq!(c.engine().content, Size::new(200.0, 200.0));
    assert!(c.recycler().handle(0).unwrap().translation.is_none());
    assert!(c.surface().transforms.is_empty());

    c.surface_mut().laid_out = true;
    c.engine_mut().set_transform(Point::new(10.0, 0.0), 2.0);
    c.on_global_layout();
    assert!(!c.update_after_layout());

    let pin = c.recycler().handle(0).unwrap();
    // 10 - 4 + 0.5 * 200 * 2, 0 - 8 + 0.25 * 200 * 2
    assert_eq!(pin.translation, Some(Point::new(206.0, 92.0)));
    assert!((pin.rate.unwrap() - 0.475).abs() < 1e-4);
    assert_eq!(
        c.surface().transforms.last().copied(),
        Some(SurfaceTransform {
            translation: Point::new(10.0, 0.0),
            scale: 2.0,
        })
    );

    // Later layouts do not update again until the dataset changes.
    c.on_global_layout();
    assert_eq!(c.surface().transforms.len(), 1);
}

#[test]
fn infinite_zoom_defers_the_update() {
    let mut c = controller();
    c.surface_mut().laid_out = true;
    c.engine_mut().zoom = f32::INFINITY;
    c.set_adapter(Some(Pins::default()));
    c.on_global_layout();
    assert!(c.update_after_layout());
    assert!(c.surface().transforms.is_empty());
}

#[test]
fn engine_updates_reposition_markers_and_background() {
    let mut c = controller();
    c.surface_mut().laid_out = true;
    c.set_adapter(Some(Pins {
        positions: alloc::vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
    }));
    c.on_global_layout();

    c.engine_mut().set_transform(Point::new(-30.0, -40.0), 3.0);
    c.on_engine_update();

    let far = c.recycler().handle(1).unwrap();
    assert_eq!(far.translation, Some(Point::new(-30.0 - 4.0 + 600.0, -40.0 - 8.0 + 600.0)));
    assert!((far.rate.unwrap() - 0.8).abs() < 1e-4);
    assert_eq!(c.surface().transforms.last().unwrap().scale, 3.0);

    // Content insets are reported to the engine and excluded from the projection.
    c.recycler_mut()
        .update_options(|o| o.content_insets = Insets::new(10.0, 0.0, 10.0, 0.0));
    c.notify_changed(0, 2);
    c.on_global_layout();
    assert_eq!(c.engine().content, Size::new(220.0, 200.0));
    let far = c.recycler().handle(1).unwrap();
    assert_eq!(far.translation.unwrap().x, -30.0 - 4.0 + 600.0);
}

#[test]
fn mutations_flag_a_follow_up_update() {
    let mut c = controller();
    c.surface_mut().laid_out = true;
    c.set_adapter(Some(Pins {
        positions: alloc::vec![Point::ZERO; 3],
    }));
    c.on_global_layout();
    assert!(!c.update_after_layout());

    c.recycler_mut().adapter_mut().unwrap().positions.pop();
    c.notify_removed(2, 1);
    assert!(c.update_after_layout());
    assert_eq!(c.recycler().len(), 2);
    assert_eq!(c.recycler().pool().len(), 1);
}

#[test]
fn paths_are_converted_from_virtual_space() {
    let options = RecyclerOptions::new(Size::new(100.0, 50.0))
        .with_virtual_size(Some(Size::new(300.0, 150.0)));
    let mut c: MapController<Pins, _, _> =
        MapController::new(options, EngineState::default(), Background::default())
            .with_default_path_color(0xFF12_3456);

    c.add_path(&[Point::new(100.0, 50.0), Point::new(200.0, 100.0)], None);
    c.add_path(&[Point::new(150.0, 75.0)], Some(0xFFFF_0000));

    let paths = &c.surface().paths;
    assert_eq!(paths[0].0, [Point::new(0.0, 0.0), Point::new(100.0, 50.0)]);
    assert_eq!(paths[0].1, 0xFF12_3456);
    assert_eq!(paths[1].0, [Point::new(50.0, 25.0)]);
    assert_eq!(paths[1].1, 0xFFFF_0000);

    c.set_path_progress(1.7);
    assert_eq!(c.surface().progress, Some(1.0));
    c.set_path_progress(f32::NAN);
    assert_eq!(c.surface().progress, Some(0.0));

    c.reset_paths();
    assert!(c.surface().paths.is_empty());
}

#[test]
fn to_map_path_without_virtual_space_is_identity() {
    let geometry = MapGeometry::new(Size::new(10.0, 10.0));
    let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    assert_eq!(to_map_path(&geometry, &points), points);
}

#[test]
fn teardown_detaches_and_rearms_layout() {
    let mut c = controller();
    c.surface_mut().laid_out = true;
    c.set_adapter(Some(Pins {
        positions: alloc::vec![Point::ZERO; 2],
    }));
    c.on_global_layout();

    let pins = c.teardown();
    assert_eq!(pins.map(|p| p.positions.len()), Some(2));
    assert!(c.recycler().is_empty());
    assert!(c.update_after_layout());
}
