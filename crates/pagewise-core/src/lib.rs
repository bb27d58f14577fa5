//! Core types for pagewise.
//!
//! This crate provides the page window calculator and the data structures
//! shared by the rest of the pagewise workspace:
//!
//! - **Calculator** - pure function from item count, page and page size to a
//!   [`PaginationDescriptor`]
//! - **Configuration** - window constants and pager settings, with builders
//!   and TOML loading
//! - **Validation** - conditional field rules checked once at construction
//!
//! ```rust
//! use pagewise_core::compute_default;
//!
//! let descriptor = compute_default(100, Some(1), Some(10));
//! assert_eq!(descriptor.total_pages, 10);
//! assert_eq!(descriptor.pages, vec![1, 2, 3, 4, 5, 6]);
//! ```

mod calculator;
mod config;
mod descriptor;
mod error;
pub mod validate;

pub use calculator::{compute_default, compute_descriptor, page_window};
pub use config::{
    DEFAULT_INITIAL_PAGE, DEFAULT_PAGE_SIZE, PagerConfig, PagerConfigBuilder, WindowConfig,
    WindowConfigBuilder, load_config,
};
pub use descriptor::PaginationDescriptor;
pub use error::PagerError;
pub use validate::{ConditionalRule, ConfigViolation, FieldValues, ValidationErrors, Validator};
