//! Stateful pager.
//!
//! A [`Pager`] owns an item collection and the descriptor for the page being
//! shown. It starts without a descriptor; the first successful page request
//! (normally the one issued by [`Pager::mount`]) installs one, and every
//! later request is checked against it.

use std::fmt;

use tracing::debug;

use pagewise_core::{PagerConfig, PagerError, PaginationDescriptor, compute_descriptor};

use crate::collection::{is_non_empty, length_changed};
use crate::controls::PagerControls;

/// Component name used in configuration violations.
pub const COMPONENT: &str = "Pager";

/// Pages through a collection and reports each page to a callback.
pub struct Pager<T, F>
where
    F: FnMut(&[T]),
{
    items: Vec<T>,
    config: PagerConfig,
    descriptor: Option<PaginationDescriptor>,
    on_change_page: F,
}

impl<T, F> Pager<T, F>
where
    F: FnMut(&[T]),
{
    /// Create a pager, validating `config` once.
    ///
    /// No page is selected until [`mount`](Self::mount) runs.
    pub fn new(items: Vec<T>, config: PagerConfig, on_change_page: F) -> Result<Self, PagerError> {
        config.validate(COMPONENT)?;

        Ok(Self {
            items,
            config,
            descriptor: None,
            on_change_page,
        })
    }

    /// Request `page`.
    ///
    /// Returns `false` without touching any state when `page` is 0, when no
    /// descriptor is held yet, or when `page` exceeds the held total pages.
    /// Otherwise installs a new descriptor, reports the page's items to the
    /// callback and returns `true`.
    pub fn set_page(&mut self, page: usize) -> bool {
        let Some(total_pages) = self.descriptor.as_ref().map(|d| d.total_pages) else {
            debug!(page, "page request rejected: no page selected yet");
            return false;
        };
        self.request(page, total_pages)
    }

    /// Select the initial page if there are items.
    ///
    /// Call once when the pager is first shown.
    pub fn mount(&mut self) -> bool {
        if !is_non_empty(&self.items) {
            debug!("mount skipped: no items");
            return false;
        }
        self.reset()
    }

    /// Select `page` instead of the initial page when first shown.
    ///
    /// Like [`mount`](Self::mount), the request is bounded by the current
    /// items while no page is selected, so it can seed the pager.
    pub fn mount_at(&mut self, page: usize) -> bool {
        if !is_non_empty(&self.items) {
            debug!("mount skipped: no items");
            return false;
        }
        self.seed(page)
    }

    /// Replace the collection.
    ///
    /// Returns to the initial page only when the number of items changed;
    /// a same-length replacement keeps the current page and descriptor.
    pub fn update_items(&mut self, items: Vec<T>) -> bool {
        let changed = length_changed(&items, &self.items);
        self.items = items;
        if !changed {
            return false;
        }
        debug!(len = self.items.len(), "item count changed, resetting page");
        self.reset()
    }

    /// Go to page 1.
    pub fn first(&mut self) -> bool {
        self.set_page(1)
    }

    /// Go to the page before the current one.
    pub fn previous(&mut self) -> bool {
        match self.current_page() {
            Some(current) => self.set_page(current.saturating_sub(1)),
            None => false,
        }
    }

    /// Go to the page after the current one.
    pub fn next(&mut self) -> bool {
        match self.current_page() {
            Some(current) => self.set_page(current + 1),
            None => false,
        }
    }

    /// Go to the last page.
    pub fn last(&mut self) -> bool {
        match self.total_pages() {
            Some(total) => self.set_page(total),
            None => false,
        }
    }

    /// Number of pages the current items fill, whether or not a page is selected.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.config.effective_page_size())
    }

    /// Descriptor for the page being shown, if any.
    pub fn descriptor(&self) -> Option<&PaginationDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn current_page(&self) -> Option<usize> {
        self.descriptor.as_ref().map(|d| d.current_page)
    }

    pub fn total_pages(&self) -> Option<usize> {
        self.descriptor.as_ref().map(|d| d.total_pages)
    }

    /// The whole collection.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items on the page being shown; empty before the first page is selected.
    pub fn current_items(&self) -> &[T] {
        match &self.descriptor {
            Some(descriptor) => descriptor.slice(&self.items),
            None => &[],
        }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Control strip for the page being shown.
    pub fn controls(&self) -> Option<PagerControls> {
        self.descriptor
            .as_ref()
            .and_then(PagerControls::from_descriptor)
    }

    /// Request the initial page.
    ///
    /// Bounded by the held descriptor, or by the current items when none is
    /// held, so the first request can seed the descriptor.
    fn reset(&mut self) -> bool {
        self.seed(self.config.effective_initial_page())
    }

    fn seed(&mut self, page: usize) -> bool {
        let total_pages = match &self.descriptor {
            Some(descriptor) => descriptor.total_pages,
            None => self.page_count(),
        };
        self.request(page, total_pages)
    }

    fn request(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages {
            debug!(page, total_pages, "page request rejected: out of range");
            return false;
        }

        let descriptor = compute_descriptor(
            self.items.len(),
            Some(page),
            self.config.page_size,
            &self.config.window,
        );
        debug!(
            page,
            total_pages = descriptor.total_pages,
            start_index = descriptor.start_index,
            end_index = descriptor.end_index,
            "page changed"
        );

        (self.on_change_page)(descriptor.slice(&self.items));
        self.descriptor = Some(descriptor);
        true
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Pager<T, F>
where
    F: FnMut(&[T]),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
