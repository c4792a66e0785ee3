// Example: recycle markers through mutations and position them for a viewport.
use zoommap::{EntryAdapter, EntryHandle, Point, Recycler, RecyclerOptions, Size, Viewport};

#[derive(Debug)]
struct Marker {
    kind: Kind,
    position: Point,
    screen: Point,
    opacity: f32,
}

impl EntryHandle for Marker {
    fn map_position(&self) -> Point {
        self.position
    }

    fn pivot(&self) -> Point {
        // Anchor at the bottom-center of a 16x24 pin.
        Point::new(8.0, 24.0)
    }

    fn set_translation(&mut self, translation: Point) {
        self.screen = translation;
    }

    fn on_depth_rate_changed(&mut self, rate: f32) {
        self.opacity = rate;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Kind {
    Shop,
    Station,
}

struct Places {
    places: Vec<(Kind, Point)>,
    created: usize,
}

impl EntryAdapter for Places {
    type Tag = Kind;
    type Handle = Marker;

    fn count(&self) -> usize {
        self.places.len()
    }

    fn type_of(&self, index: usize) -> Kind {
        self.places[index].0
    }

    fn create_handle(&mut self, kind: Kind) -> Marker {
        self.created += 1;
        Marker {
            kind,
            position: Point::ZERO,
            screen: Point::ZERO,
            opacity: 0.0,
        }
    }

    fn bind(&mut self, handle: &mut Marker, index: usize, _kind: Kind) {
        handle.position = self.places[index].1;
    }
}

fn main() {
    let places = Places {
        places: vec![
            (Kind::Shop, Point::new(100.0, 200.0)),
            (Kind::Station, Point::new(500.0, 500.0)),
            (Kind::Shop, Point::new(900.0, 50.0)),
        ],
        created: 0,
    };
    let options = RecyclerOptions::new(Size::new(1000.0, 1000.0)).with_on_layout(Some(
        |pass: &zoommap::LayoutPass| println!("layout: {pass:?}"),
    ));
    let mut r = Recycler::with_adapter(options, places);

    r.on_viewport_changed(Viewport::new(
        Point::new(-20.0, -40.0),
        2.0,
        1.0,
        4.0,
        Size::new(800.0, 800.0),
    ));
    for m in r.iter() {
        println!("{:?} at {:?} (opacity {:.2})", m.kind, m.screen, m.opacity);
    }

    // Drop the station, then add another one: the retired station handle is reused.
    r.adapter_mut().unwrap().places.remove(1);
    r.notify_removed(1, 1);
    r.adapter_mut()
        .unwrap()
        .places
        .push((Kind::Station, Point::new(10.0, 10.0)));
    r.notify_inserted(2, 1);

    println!(
        "live={}, pooled={}, created={}",
        r.len(),
        r.pool().len(),
        r.adapter().unwrap().created
    );
}
