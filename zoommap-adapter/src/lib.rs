//! Host integration utilities for the `zoommap` crate.
//!
//! The `zoommap` crate is UI-agnostic and focuses on recycling and transform math. This crate
//! provides the framework-neutral glue a map widget needs around it:
//!
//! - A narrow interface to an external pan/zoom engine ([`PanZoomEngine`])
//! - A background surface interface with path overlays ([`MapSurface`])
//! - A [`MapController`] that wires both to a [`zoommap::Recycler`]
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod engine;
mod path;
mod surface;

#[cfg(test)]
mod tests;

pub use controller::MapController;
pub use engine::{EngineState, PanZoomEngine};
pub use path::{clamp_progress, to_map_path};
pub use surface::{Color, DEFAULT_PATH_COLOR, MapSurface};
