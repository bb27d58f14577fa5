//! Control strip model.
//!
//! Describes the "First / Previous / pages / Next / Last" strip for a
//! descriptor without rendering it. Renderers walk [`PagerControls::iter`]
//! and request [`Control::target`] from the pager when a control is used.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use strum::Display;

use pagewise_core::PaginationDescriptor;

/// Kind of control in the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    #[strum(to_string = "«")]
    First,
    #[strum(to_string = "‹")]
    Previous,
    /// Gap marker between the window and the first or last page.
    #[strum(to_string = "…")]
    Ellipsis,
    /// A numbered page button.
    #[strum(to_string = "#")]
    Page,
    #[strum(to_string = "›")]
    Next,
    #[strum(to_string = "»")]
    Last,
}

/// A single control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Control {
    /// What the control is.
    pub kind: ControlKind,
    /// Page requested when the control is used; `None` for ellipses.
    pub target: Option<usize>,
    /// The control stands for the current page.
    pub active: bool,
    /// The control is shown but cannot be used.
    pub disabled: bool,
}

impl Control {
    fn nav(kind: ControlKind, target: usize, disabled: bool) -> Self {
        Self {
            kind,
            target: Some(target),
            active: false,
            disabled,
        }
    }

    fn page(page: usize, active: bool, disabled: bool) -> Self {
        Self {
            kind: ControlKind::Page,
            target: Some(page),
            active,
            disabled,
        }
    }

    fn ellipsis() -> Self {
        Self {
            kind: ControlKind::Ellipsis,
            target: None,
            active: false,
            disabled: false,
        }
    }

    /// Whether using this control should issue a page request.
    pub fn is_actionable(&self) -> bool {
        self.target.is_some() && !self.disabled
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.target) {
            (ControlKind::Page, Some(page)) if self.active => write!(f, "[{page}]"),
            (ControlKind::Page, Some(page)) => write!(f, "{page}"),
            (kind, _) => write!(f, "{kind}"),
        }
    }
}

/// Ordered control strip for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerControls {
    controls: Vec<Control>,
}

impl PagerControls {
    /// Build the strip, or `None` when there is at most one page to show.
    pub fn from_descriptor(descriptor: &PaginationDescriptor) -> Option<Self> {
        if !descriptor.has_multiple_pages() {
            return None;
        }

        let current = descriptor.current_page;
        let total = descriptor.total_pages;
        let on_first = current == 1;
        let on_last = current == total;

        let mut controls = vec![
            Control::nav(ControlKind::First, 1, on_first),
            Control::nav(ControlKind::Previous, current.saturating_sub(1), on_first),
        ];

        if descriptor.first_visible().is_some_and(|min| min > 1) {
            controls.push(Control::ellipsis());
        }

        controls.extend(
            descriptor
                .pages
                .iter()
                .map(|&page| Control::page(page, page == current, false)),
        );

        // The last page gets its own button when the window stops short of it.
        if descriptor
            .last_visible()
            .is_some_and(|max| max + 1 < total)
        {
            controls.push(Control::ellipsis());
            controls.push(Control::page(total, false, on_last));
        }

        controls.push(Control::nav(ControlKind::Next, current + 1, on_last));
        controls.push(Control::nav(ControlKind::Last, total, on_last));

        Some(Self { controls })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Numbered page controls, in order.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter(|c| c.kind == ControlKind::Page)
            .filter_map(|c| c.target)
            .collect()
    }

    /// Number of ellipsis markers.
    pub fn ellipsis_count(&self) -> usize {
        self.controls
            .iter()
            .filter(|c| c.kind == ControlKind::Ellipsis)
            .count()
    }

    /// First control of the given kind.
    pub fn find(&self, kind: ControlKind) -> Option<&Control> {
        self.controls.iter().find(|c| c.kind == kind)
    }
}

impl fmt::Display for PagerControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.controls.iter().join(" "))
    }
}
