use serde::Serialize;

use crate::window::{visible_pages, PageMarker};

/// One button of an interactive pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub label: String,
    /// Page selected when the control is activated, `None` when disabled.
    pub target: Option<usize>,
    pub current: bool,
}

/// Callback-driven pager for interactive clients.
///
/// Holds the selected page and notifies `on_change` whenever a selection
/// actually moves to a different page. Selections outside `1..=total_pages`
/// are clamped, and re-selecting the current page is a no-op.
pub struct Pager<F: FnMut(usize)> {
    current_page: usize,
    total_pages: usize,
    on_change: F,
}

impl<F: FnMut(usize)> Pager<F> {
    pub fn new(current_page: usize, total_pages: usize, on_change: F) -> Self {
        Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
            on_change,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Builds the button row for the current state.
    ///
    /// A single page needs no navigation, so the row is empty.
    pub fn controls(&self) -> Vec<PageControl> {
        if self.total_pages <= 1 {
            return Vec::new();
        }

        let window = visible_pages(self.current_page, self.total_pages);
        let mut controls = Vec::with_capacity(window.len() + 2);

        controls.push(PageControl {
            label: "Previous".to_string(),
            target: if self.current_page > 1 {
                Some(self.current_page - 1)
            } else {
                None
            },
            current: false,
        });
        controls.extend(window.into_iter().map(|marker| match marker {
            PageMarker::Page(number) if number == self.current_page => PageControl {
                label: number.to_string(),
                target: None,
                current: true,
            },
            PageMarker::Page(number) => PageControl {
                label: number.to_string(),
                target: Some(number),
                current: false,
            },
            PageMarker::Ellipsis => PageControl {
                label: "…".to_string(),
                target: None,
                current: false,
            },
        }));
        controls.push(PageControl {
            label: "Next".to_string(),
            target: if self.current_page < self.total_pages {
                Some(self.current_page + 1)
            } else {
                None
            },
            current: false,
        });

        controls
    }

    /// Moves to `page`, clamped into range, and returns the selected page.
    ///
    /// The change callback fires once per actual move.
    pub fn select(&mut self, page: usize) -> usize {
        let target = clamp_page(page, self.total_pages);
        if target != self.current_page {
            self.current_page = target;
            (self.on_change)(target);
        }
        self.current_page
    }

    pub fn next(&mut self) -> usize {
        self.select(self.current_page.saturating_add(1))
    }

    pub fn previous(&mut self) -> usize {
        self.select(self.current_page.saturating_sub(1))
    }
}

/// Clamp a requested page into a valid range.
fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
