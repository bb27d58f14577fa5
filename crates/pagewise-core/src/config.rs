//! Window constants and pager configuration.

use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::PagerError;
use crate::validate::{FieldValues, ValidationErrors, Validator};

/// Page shown when no initial page is configured.
pub const DEFAULT_INITIAL_PAGE: usize = 1;

/// Items per page when no page size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Constants that shape the visible page window.
///
/// The defaults reproduce the classic pager layout, which is deliberately
/// asymmetric: the leading window is 6 pages wide, the trailing one 10 and
/// the centered one 7.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct WindowConfig {
    /// Show every page up to this many; also the end of the leading window.
    #[builder(default = "6")]
    pub max_buttons: usize,

    /// Current pages at or below this use the leading window.
    #[builder(default = "3")]
    pub leading_threshold: usize,

    /// `current + trailing_lookahead >= total` selects the trailing window.
    #[builder(default = "3")]
    pub trailing_lookahead: usize,

    /// The trailing window starts this many pages before the last.
    #[builder(default = "9")]
    pub trailing_span: usize,

    /// Pages shown before the current one in the centered window.
    #[builder(default = "3")]
    pub centered_before: usize,

    /// Pages shown after the current one in the centered window.
    #[builder(default = "3")]
    pub centered_after: usize,
}

impl WindowConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_buttons == Some(0) {
            return Err("max_buttons must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_buttons: 6,
            leading_threshold: 3,
            trailing_lookahead: 3,
            trailing_span: 9,
            centered_before: 3,
            centered_after: 3,
        }
    }
}

impl WindowConfig {
    /// Create a new window config builder.
    pub fn builder() -> WindowConfigBuilder {
        WindowConfigBuilder::default()
    }
}

/// Settings for a pager.
///
/// Unset fields (and fields set to zero, which older callers used to mean
/// "unset") fall back to [`DEFAULT_INITIAL_PAGE`] and [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(default)]
pub struct PagerConfig {
    /// Page requested on mount and whenever the item count changes.
    #[builder(default)]
    pub initial_page: Option<usize>,

    /// Items per page.
    #[builder(default)]
    pub page_size: Option<usize>,

    /// Window constants.
    #[builder(default)]
    pub window: WindowConfig,
}

impl PagerConfig {
    /// Create a new pager config builder.
    pub fn builder() -> PagerConfigBuilder {
        PagerConfigBuilder::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the initial page.
    pub fn with_initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = Some(initial_page);
        self
    }

    /// Initial page with the default applied.
    pub fn effective_initial_page(&self) -> usize {
        self.initial_page
            .filter(|&page| page > 0)
            .unwrap_or(DEFAULT_INITIAL_PAGE)
    }

    /// Page size with the default applied.
    pub fn effective_page_size(&self) -> usize {
        self.page_size
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Rules checked when a pager is constructed.
    pub fn validator() -> Validator<PagerConfig> {
        Validator::new()
            .rule(
                "page_size",
                "Page size must be at least 1.",
                |c: &PagerConfig| c.page_size == Some(0),
            )
            .rule(
                "initial_page",
                "Pages are numbered from 1.",
                |c: &PagerConfig| c.initial_page == Some(0),
            )
            .rule(
                "window.max_buttons",
                "At least one page button is required.",
                |c: &PagerConfig| c.window.max_buttons == 0,
            )
            .rule(
                "window.leading_threshold",
                "Leading threshold must be below max_buttons.",
                |c: &PagerConfig| c.window.leading_threshold >= c.window.max_buttons,
            )
            .rule(
                "window.trailing_span",
                "Trailing span must cover trailing_lookahead so the current page stays visible.",
                |c: &PagerConfig| c.window.trailing_span < c.window.trailing_lookahead,
            )
    }

    /// Check this config against [`PagerConfig::validator`].
    pub fn validate(&self, component: &str) -> Result<(), ValidationErrors> {
        Self::validator().validate(self, component)
    }
}

impl FieldValues for PagerConfig {
    fn field_value(&self, field: &str) -> Option<String> {
        let w = &self.window;
        match field {
            "initial_page" => self.initial_page.map(|v| v.to_string()),
            "page_size" => self.page_size.map(|v| v.to_string()),
            "window.max_buttons" => Some(w.max_buttons.to_string()),
            "window.leading_threshold" => Some(w.leading_threshold.to_string()),
            "window.trailing_lookahead" => Some(w.trailing_lookahead.to_string()),
            "window.trailing_span" => Some(w.trailing_span.to_string()),
            "window.centered_before" => Some(w.centered_before.to_string()),
            "window.centered_after" => Some(w.centered_after.to_string()),
            _ => None,
        }
    }
}

/// Load a pager config from a TOML file.
///
/// Missing fields take their defaults. The result is not validated; pagers
/// validate on construction.
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig, PagerError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| PagerError::io(path, e))?;

    toml::from_str(&content).map_err(|e| PagerError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
