use alloc::boxed::Box;

use crate::Point;
use crate::key::TypeTag;

/// A reusable rendering resource placed on the map.
///
/// Handles are created by an [`EntryAdapter`], bound to a logical index while live, and parked
/// in a pool while retired. The engine only reads positions and pushes transforms; everything
/// else about the underlying view/node is up to the host.
pub trait EntryHandle {
    /// Logical position in (virtual) map space.
    fn map_position(&self) -> Point;

    /// Anchor offset in screen units, subtracted so the anchor lands on the map position.
    fn pivot(&self) -> Point;

    /// Receives the on-screen translation computed by the update pass.
    fn set_translation(&mut self, translation: Point);

    /// Level-of-detail signal derived from the current zoom.
    fn on_depth_rate_changed(&mut self, _rate: f32) {}
}

/// The dataset collaborator that supplies entries to a [`crate::Recycler`].
///
/// Contract:
/// - `count()` and `type_of(i)` describe the dataset *after* the change being notified.
/// - `bind` fully overwrites handle content; any pooled handle of the right tag may be passed.
/// - `on_detached` is called exactly once per live → retired transition, before the handle
///   enters the pool.
pub trait EntryAdapter {
    type Tag: TypeTag;
    type Handle: EntryHandle;

    fn count(&self) -> usize;

    fn type_of(&self, index: usize) -> Self::Tag;

    fn create_handle(&mut self, tag: Self::Tag) -> Self::Handle;

    fn bind(&mut self, handle: &mut Self::Handle, index: usize, tag: Self::Tag);

    fn on_detached(&mut self, _handle: &mut Self::Handle) {}
}

impl<H: EntryHandle + ?Sized> EntryHandle for Box<H> {
    fn map_position(&self) -> Point {
        (**self).map_position()
    }

    fn pivot(&self) -> Point {
        (**self).pivot()
    }

    fn set_translation(&mut self, translation: Point) {
        (**self).set_translation(translation);
    }

    fn on_depth_rate_changed(&mut self, rate: f32) {
        (**self).on_depth_rate_changed(rate);
    }
}

impl<A: EntryAdapter + ?Sized> EntryAdapter for Box<A> {
    type Tag = A::Tag;
    type Handle = A::Handle;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn type_of(&self, index: usize) -> Self::Tag {
        (**self).type_of(index)
    }

    fn create_handle(&mut self, tag: Self::Tag) -> Self::Handle {
        (**self).create_handle(tag)
    }

    fn bind(&mut self, handle: &mut Self::Handle, index: usize, tag: Self::Tag) {
        (**self).bind(handle, index, tag);
    }

    fn on_detached(&mut self, handle: &mut Self::Handle) {
        (**self).on_detached(handle);
    }
}
