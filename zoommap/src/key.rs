//! Pool bucket storage: retired handles are grouped by their entry type tag.
//!
//! With `std` the buckets live in a `HashMap`; `no_std` builds fall back to a `BTreeMap`, which
//! is why the tag bound switches from `Hash + Eq` to `Ord`.

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
/// One bucket of retired handles per type tag.
pub(crate) type TagMap<T, V> = HashMap<T, V>;
#[cfg(not(feature = "std"))]
pub(crate) type TagMap<T, V> = BTreeMap<T, V>;

/// Bound for entry type tags (pool bucket keys).
#[cfg(feature = "std")]
#[doc(hidden)]
pub trait TypeTag: Copy + core::fmt::Debug + core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: Copy + core::fmt::Debug + core::hash::Hash + Eq> TypeTag for T {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait TypeTag: Copy + core::fmt::Debug + Ord {}
#[cfg(not(feature = "std"))]
impl<T: Copy + core::fmt::Debug + Ord> TypeTag for T {}
