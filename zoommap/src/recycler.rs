use alloc::vec::Vec;

use crate::{
    EntryAdapter, EntryHandle, LayoutPass, Misconfiguration, RecyclerOptions, TypedPool,
    Viewport, ViewportTransformer, VisibleEntry, VisibleSet,
};

type Entry<A> = VisibleEntry<<A as EntryAdapter>::Handle, <A as EntryAdapter>::Tag>;
type Pool<A> = TypedPool<<A as EntryAdapter>::Tag, <A as EntryAdapter>::Handle>;

fn acquire_or_create<A: EntryAdapter>(pool: &mut Pool<A>, adapter: &mut A, tag: A::Tag) -> A::Handle {
    match pool.acquire(tag) {
        Some(handle) => handle,
        None => {
            ztrace!(?tag, "creating handle");
            adapter.create_handle(tag)
        }
    }
}

fn materialize<A: EntryAdapter>(pool: &mut Pool<A>, adapter: &mut A, index: usize) -> Entry<A> {
    let tag = adapter.type_of(index);
    let mut handle = acquire_or_create(pool, adapter, tag);
    adapter.bind(&mut handle, index, tag);
    VisibleEntry { handle, tag }
}

fn retire<A: EntryAdapter>(pool: &mut Pool<A>, adapter: &mut A, entry: Entry<A>) {
    let VisibleEntry { mut handle, tag } = entry;
    adapter.on_detached(&mut handle);
    pool.release(tag, handle);
}

/// The recycling controller: keeps a bounded set of live handles in sync with an adapter's
/// dataset and repositions them for the current viewport.
///
/// This type does not hold any UI objects beyond the handles the adapter creates. Hosts drive
/// it by calling:
/// - `notify_*` when the dataset changes (mirrors list-adapter change notifications)
/// - `on_viewport_changed` whenever pan, zoom or content size changes
///
/// Every mutation runs to completion before returning and is followed by an update pass, unless
/// it happens inside [`Recycler::batch_update`] (one pass at the end of the batch) or no
/// viewport has been reported yet (the pass stays pending until one is).
pub struct Recycler<A: EntryAdapter> {
    options: RecyclerOptions,
    adapter: Option<A>,
    visible: VisibleSet<A::Handle, A::Tag>,
    pool: TypedPool<A::Tag, A::Handle>,
    viewport: Option<Viewport>,
    last_layout: Option<LayoutPass>,
    layout_pending: bool,
    batch_depth: usize,
    reported: Option<Misconfiguration>,
}

impl<A: EntryAdapter> Recycler<A> {
    /// Creates a recycler with no adapter attached.
    pub fn new(options: RecyclerOptions) -> Self {
        zdebug!(options = ?options, "Recycler::new");
        let mut r = Self {
            pool: TypedPool::new().with_max_per_tag(options.max_pooled_per_tag),
            options,
            adapter: None,
            visible: VisibleSet::new(),
            viewport: None,
            last_layout: None,
            layout_pending: false,
            batch_depth: 0,
            reported: None,
        };
        r.report(r.options.misconfiguration());
        r
    }

    /// Creates a recycler and immediately materializes `adapter`'s dataset.
    pub fn with_adapter(options: RecyclerOptions, adapter: A) -> Self {
        let mut r = Self::new(options);
        r.set_adapter(Some(adapter));
        r
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RecyclerOptions) {
        self.pool.set_max_per_tag(options.max_pooled_per_tag);
        self.options = options;
        ztrace!(options = ?self.options, "Recycler::set_options");
        self.report(self.options.misconfiguration());
        self.request_layout();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RecyclerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    /// Attaches (or detaches, with `None`) the dataset and returns the previous adapter.
    ///
    /// Attaching performs a full reset against the new dataset. Detaching leaves the live and
    /// retired handles untouched; every `notify_*` call is a no-op until an adapter is attached
    /// again.
    pub fn set_adapter(&mut self, adapter: Option<A>) -> Option<A> {
        let prev = core::mem::replace(&mut self.adapter, adapter);
        zdebug!(
            attached = self.adapter.is_some(),
            had_adapter = prev.is_some(),
            "Recycler::set_adapter"
        );
        self.notify_reset();
        prev
    }

    /// Retires every live handle and rebuilds the visible set from the adapter's dataset.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn notify_reset(&mut self) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };

        // Retire first so the rebuild can reuse these handles, even under reassigned tags.
        let retired = self.visible.take();
        let retired_len = retired.len();
        for entry in retired {
            retire(&mut self.pool, adapter, entry);
        }

        let count = adapter.count();
        let mut next = Vec::with_capacity(count);
        for index in 0..count {
            next.push(materialize(&mut self.pool, adapter, index));
        }
        self.visible.set_entries(next);

        ztrace!(
            retired = retired_len,
            count,
            pooled = self.pool.len(),
            "notify_reset"
        );
        self.request_layout();
    }

    /// Materializes `count` new entries at `[position, position + count)`.
    pub fn notify_inserted(&mut self, position: usize, count: usize) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };

        let len = self.visible.len();
        debug_assert!(
            position <= len,
            "notify_inserted: position out of bounds (position={position}, len={len})"
        );
        let position = if position > len {
            zwarn!(position, len, "notify_inserted: position out of bounds");
            len
        } else {
            position
        };

        let mut block = Vec::with_capacity(count);
        for index in position..position.saturating_add(count) {
            block.push(materialize(&mut self.pool, adapter, index));
        }
        self.visible.insert_block(position, block);

        ztrace!(position, count, len = self.visible.len(), "notify_inserted");
        self.request_layout();
    }

    /// Retires the entries at `[position, position + count)`, highest index first.
    pub fn notify_removed(&mut self, position: usize, count: usize) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };

        let len = self.visible.len();
        let end = position.saturating_add(count);
        debug_assert!(
            end <= len,
            "notify_removed: range out of bounds (position={position}, count={count}, len={len})"
        );
        if end > len {
            zwarn!(position, count, len, "notify_removed: range out of bounds");
        }
        let start = position.min(len);
        let end = end.min(len);

        for entry in self.visible.remove_range(start..end).rev() {
            retire(&mut self.pool, adapter, entry);
        }

        ztrace!(
            position,
            count,
            len = self.visible.len(),
            pooled = self.pool.len(),
            "notify_removed"
        );
        self.request_layout();
    }

    /// Exchanges the entries at `from` and `to` without rebinding either.
    pub fn notify_moved(&mut self, from: usize, to: usize) {
        if self.adapter.is_none() {
            return;
        }

        let len = self.visible.len();
        debug_assert!(
            from < len && to < len,
            "notify_moved: index out of bounds (from={from}, to={to}, len={len})"
        );
        if from >= len || to >= len {
            zwarn!(from, to, len, "notify_moved: index out of bounds");
            return;
        }

        self.visible.swap(from, to);
        ztrace!(from, to, "notify_moved");
        self.request_layout();
    }

    /// Rebinds the live handles at `[position, position + count)` in place.
    pub fn notify_changed(&mut self, position: usize, count: usize) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };

        let len = self.visible.len();
        let end = position.saturating_add(count);
        debug_assert!(
            end <= len,
            "notify_changed: range out of bounds (position={position}, count={count}, len={len})"
        );
        if end > len {
            zwarn!(position, count, len, "notify_changed: range out of bounds");
        }

        for index in position..end.min(len) {
            if let Some(entry) = self.visible.get_mut(index) {
                adapter.bind(&mut entry.handle, index, entry.tag);
            }
        }

        ztrace!(position, count, "notify_changed");
        self.request_layout();
    }

    /// Stores a new viewport snapshot and runs the update pass.
    pub fn on_viewport_changed(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.request_layout();
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Re-runs the update pass against the last reported viewport.
    pub fn relayout(&mut self) {
        self.request_layout();
    }

    /// Coalesces the update passes requested by `f` into a single pass at the end.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);

        f(self);

        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);

        if self.batch_depth == 0 && self.layout_pending {
            self.run_layout();
        }
    }

    /// Whether an update pass was requested but has not run yet.
    pub fn layout_pending(&self) -> bool {
        self.layout_pending
    }

    pub fn last_layout(&self) -> Option<LayoutPass> {
        self.last_layout
    }

    /// Releases every live and retired handle and detaches the adapter.
    pub fn teardown(&mut self) -> Option<A> {
        zdebug!(
            live = self.visible.len(),
            pooled = self.pool.len(),
            "Recycler::teardown"
        );
        self.visible.clear();
        self.pool.clear();
        self.last_layout = None;
        self.layout_pending = false;
        self.adapter.take()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn visible(&self) -> &VisibleSet<A::Handle, A::Tag> {
        &self.visible
    }

    pub fn pool(&self) -> &TypedPool<A::Tag, A::Handle> {
        &self.pool
    }

    pub fn handle(&self, index: usize) -> Option<&A::Handle> {
        self.visible.get(index).map(|e| &e.handle)
    }

    pub fn handle_mut(&mut self, index: usize) -> Option<&mut A::Handle> {
        self.visible.get_mut(index).map(|e| &mut e.handle)
    }

    pub fn tag(&self, index: usize) -> Option<A::Tag> {
        self.visible.get(index).map(|e| e.tag)
    }

    /// Iterates over the live handles in logical index order.
    pub fn iter(&self) -> impl Iterator<Item = &A::Handle> + '_ {
        self.visible.iter().map(|e| &e.handle)
    }

    fn request_layout(&mut self) {
        self.layout_pending = true;
        if self.batch_depth > 0 {
            return;
        }
        self.run_layout();
    }

    fn run_layout(&mut self) {
        let Some(viewport) = self.viewport else {
            ztrace!("layout deferred until a viewport is reported");
            return;
        };
        let issue = viewport
            .misconfiguration()
            .or_else(|| self.options.misconfiguration());
        self.report(issue);

        let transformer = ViewportTransformer::from_options(&self.options);
        let depth_rate = transformer.depth_rate(&viewport);
        for entry in self.visible.iter_mut() {
            let handle = &mut entry.handle;
            let translation =
                transformer.translation(&viewport, handle.map_position(), handle.pivot());
            handle.set_translation(translation);
            handle.on_depth_rate_changed(depth_rate);
        }

        let pass = LayoutPass {
            depth_rate,
            entries: self.visible.len(),
            background: transformer.background(&viewport),
        };
        self.layout_pending = false;
        self.last_layout = Some(pass);
        ztrace!(depth_rate, entries = pass.entries, "layout pass");

        if let Some(cb) = &self.options.on_layout {
            cb(&pass);
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn report(&mut self, issue: Option<Misconfiguration>) {
        if issue == self.reported {
            return;
        }
        if let Some(issue) = &issue {
            zwarn!(%issue, "misconfiguration, substituting neutral values");
        }
        self.reported = issue;
    }
}

impl<A: EntryAdapter> core::fmt::Debug for Recycler<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recycler")
            .field("options", &self.options)
            .field("attached", &self.adapter.is_some())
            .field("live", &self.visible.len())
            .field("pool", &self.pool)
            .field("viewport", &self.viewport)
            .field("layout_pending", &self.layout_pending)
            .finish_non_exhaustive()
    }
}
