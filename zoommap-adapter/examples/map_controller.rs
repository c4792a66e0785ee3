// Example: a host surface wired through MapController.
use zoommap::{EntryAdapter, EntryHandle, Point, RecyclerOptions, Size, SurfaceTransform};
use zoommap_adapter::{Color, EngineState, MapController, MapSurface};

struct Dot {
    position: Point,
    screen: Point,
}

impl EntryHandle for Dot {
    fn map_position(&self) -> Point {
        self.position
    }

    fn pivot(&self) -> Point {
        Point::new(2.0, 2.0)
    }

    fn set_translation(&mut self, translation: Point) {
        self.screen = translation;
    }
}

struct Dots(Vec<Point>);

impl EntryAdapter for Dots {
    type Tag = u8;
    type Handle = Dot;

    fn count(&self) -> usize {
        self.0.len()
    }

    fn type_of(&self, _index: usize) -> u8 {
        0
    }

    fn create_handle(&mut self, _tag: u8) -> Dot {
        Dot {
            position: Point::ZERO,
            screen: Point::ZERO,
        }
    }

    fn bind(&mut self, handle: &mut Dot, index: usize, _tag: u8) {
        handle.position = self.0[index];
    }
}

struct PrintSurface;

impl MapSurface for PrintSurface {
    fn set_transform(&mut self, transform: SurfaceTransform) {
        println!("background: {transform:?}");
    }

    fn measured_size(&self) -> Size {
        Size::new(640.0, 480.0)
    }

    fn add_path(&mut self, points: &[Point], color: Color) {
        println!("path #{color:08x}: {points:?}");
    }

    fn reset_paths(&mut self) {}

    fn set_path_progress(&mut self, progress: f32) {
        println!("path progress {progress}");
    }
}

fn main() {
    let options = RecyclerOptions::new(Size::new(4000.0, 3000.0))
        .with_virtual_size(Some(Size::new(10_000.0, 10_000.0)));
    let mut c = MapController::new(options, EngineState::new(1.0, 8.0), PrintSurface);

    c.set_adapter(Some(Dots(vec![
        Point::new(5000.0, 5000.0),
        Point::new(3000.0, 3500.0),
    ])));
    c.add_path(
        &[Point::new(3000.0, 3500.0), Point::new(5000.0, 5000.0)],
        None,
    );
    c.on_global_layout();

    c.engine_mut().set_transform(Point::new(-100.0, -50.0), 2.0);
    c.on_engine_update();
    for (i, d) in c.recycler().iter().enumerate() {
        println!("dot {i}: {:?}", d.screen);
    }
    c.set_path_progress(0.5);
}
