//! A headless entry-recycling and viewport-transform engine for markers on a map.
//!
//! For host integration (pan/zoom engine wiring, background surface, path overlays), see the
//! `zoommap-adapter` crate.
//!
//! This crate focuses on the two pieces of work a map with many markers needs on every frame:
//! keeping the number of live rendering handles bounded by recycling them through per-type
//! pools, and mapping each marker's logical map position onto the screen for the current pan
//! and zoom.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - an [`EntryAdapter`] that creates and binds handles
//! - dataset change notifications (`notify_*`)
//! - a [`Viewport`] snapshot whenever pan/zoom/content size changes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod key;
mod options;
mod pool;
mod recycler;
mod transform;
mod types;
mod visible;


pub use adapter::{EntryAdapter, EntryHandle};
pub use options::{OnLayoutCallback, RecyclerOptions};
pub use pool::TypedPool;
pub use recycler::Recycler;
pub use transform::{ViewportTransformer, depth_rate};
pub use types::{
    DepthRange, Insets, LayoutPass, MapGeometry, Misconfiguration, Point, Size,
    SurfaceTransform, Viewport,
};
pub use visible::{VisibleEntry, VisibleSet};

#[doc(hidden)]
pub use key::TypeTag;
