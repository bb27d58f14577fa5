//! Stateful pager for pagewise.
//!
//! This crate wraps the pure calculator from `pagewise-core` in a [`Pager`]
//! that owns an item collection, validates page requests and reports each
//! page's items to a callback. It also derives a [`PagerControls`] strip
//! that renderers can turn into buttons.
//!
//! # Lifecycle
//!
//! - [`Pager::new`] validates the configuration; no page is selected yet
//! - [`Pager::mount`] selects the initial page when there are items
//! - [`Pager::update_items`] returns to the initial page when the item
//!   count changes
//! - [`Pager::set_page`] ignores requests outside `1..=total_pages`
//!
//! ```rust
//! use pagewise_pager::{Pager, PagerConfig};
//!
//! let mut shown = Vec::new();
//! let mut pager = Pager::new(
//!     (1..=25).collect::<Vec<u32>>(),
//!     PagerConfig::default(),
//!     |page: &[u32]| shown.push(page.len()),
//! )
//! .unwrap();
//!
//! pager.mount();
//! pager.set_page(3);
//! pager.set_page(4); // ignored, there are only 3 pages
//! drop(pager);
//!
//! assert_eq!(shown, vec![10, 5]);
//! ```

mod collection;
mod controls;
mod pager;

pub use collection::{is_non_empty, length_changed};
pub use controls::{Control, ControlKind, PagerControls};
pub use pager::{COMPONENT, Pager};

// Re-export core types
pub use pagewise_core::{
    PagerConfig, PagerError, PaginationDescriptor, WindowConfig, compute_default,
    compute_descriptor,
};
