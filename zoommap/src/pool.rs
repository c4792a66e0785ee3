use alloc::vec::Vec;

use crate::key::{TagMap, TypeTag};

/// Retired rendering handles, bucketed by entry type tag.
///
/// A handle released under tag `T` is only ever handed back for a request of tag `T`. Buckets
/// are unordered: any retired handle of the right type is equally valid since binding fully
/// overwrites it.
///
/// The pool owns what it holds. Callers must not keep a handle in another structure after
/// releasing it.
pub struct TypedPool<T, H> {
    buckets: TagMap<T, Vec<H>>,
    len: usize,
    max_per_tag: Option<usize>,
}

impl<T: TypeTag, H> TypedPool<T, H> {
    pub fn new() -> Self {
        Self {
            buckets: TagMap::new(),
            len: 0,
            max_per_tag: None,
        }
    }

    /// Caps every bucket at `max` handles; surplus releases are dropped.
    pub fn with_max_per_tag(mut self, max: Option<usize>) -> Self {
        self.set_max_per_tag(max);
        self
    }

    pub fn max_per_tag(&self) -> Option<usize> {
        self.max_per_tag
    }

    /// Updates the per-bucket cap, dropping handles above the new limit.
    pub fn set_max_per_tag(&mut self, max: Option<usize>) {
        self.max_per_tag = max;
        let Some(max) = max else {
            return;
        };
        for bucket in self.buckets.values_mut() {
            if bucket.len() > max {
                self.len -= bucket.len() - max;
                bucket.truncate(max);
            }
        }
    }

    /// Takes any retired handle of type `tag`, or `None` if that bucket is empty or absent.
    pub fn acquire(&mut self, tag: T) -> Option<H> {
        let handle = self.buckets.get_mut(&tag).and_then(|bucket| bucket.pop())?;
        self.len -= 1;
        Some(handle)
    }

    /// Returns a retired handle to the bucket for `tag`, creating the bucket if needed.
    pub fn release(&mut self, tag: T, handle: H) {
        let bucket = self.buckets.entry(tag).or_default();
        if let Some(max) = self.max_per_tag {
            if bucket.len() >= max {
                ztrace!(?tag, max, "TypedPool: bucket full, dropping handle");
                return;
            }
        }
        bucket.push(handle);
        self.len += 1;
    }

    /// Total number of retired handles across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of retired handles of type `tag`.
    pub fn len_of(&self, tag: T) -> usize {
        self.buckets.get(&tag).map_or(0, Vec::len)
    }

    /// Iterates over every retired handle together with its bucket tag.
    pub fn iter(&self) -> impl Iterator<Item = (T, &H)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(tag, bucket)| bucket.iter().map(move |h| (*tag, h)))
    }

    /// Drops every retired handle.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}

impl<T: TypeTag, H> Default for TypedPool<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TypeTag, H> core::fmt::Debug for TypedPool<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypedPool")
            .field("len", &self.len)
            .field("buckets", &self.buckets.len())
            .field("max_per_tag", &self.max_per_tag)
            .finish()
    }
}
