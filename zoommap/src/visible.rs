use alloc::vec::Vec;
use core::ops::Range;

/// A live handle together with the type tag it was bound with.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleEntry<H, T> {
    pub handle: H,
    pub tag: T,
}

/// The materialized handles, index-aligned with the adapter's logical sequence.
///
/// Structural operations are plain splices at explicit positions; entries carry no stable key
/// and are identified by position only.
#[derive(Clone, Debug)]
pub struct VisibleSet<H, T> {
    entries: Vec<VisibleEntry<H, T>>,
}

impl<H, T> VisibleSet<H, T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VisibleEntry<H, T>> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut VisibleEntry<H, T>> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, VisibleEntry<H, T>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, VisibleEntry<H, T>> {
        self.entries.iter_mut()
    }

    pub fn as_slice(&self) -> &[VisibleEntry<H, T>] {
        &self.entries
    }

    /// Splices `block` in at `position`, keeping the relative order of both the block and the
    /// existing entries.
    pub(crate) fn insert_block(&mut self, position: usize, block: Vec<VisibleEntry<H, T>>) {
        debug_assert!(position <= self.entries.len());
        self.entries.splice(position..position, block);
    }

    /// Removes a contiguous range; the returned iterator yields the removed entries.
    pub(crate) fn remove_range(
        &mut self,
        range: Range<usize>,
    ) -> alloc::vec::Drain<'_, VisibleEntry<H, T>> {
        self.entries.drain(range)
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
    }

    /// Installs a fully built sequence in one step.
    pub(crate) fn set_entries(&mut self, entries: Vec<VisibleEntry<H, T>>) {
        self.entries = entries;
    }

    pub(crate) fn take(&mut self) -> Vec<VisibleEntry<H, T>> {
        core::mem::take(&mut self.entries)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<H, T> Default for VisibleSet<H, T> {
    fn default() -> Self {
        Self::new()
    }
}
