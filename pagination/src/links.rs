use serde::Serialize;
use url::form_urlencoded;

use crate::window::{visible_pages, PageMarker};

/// A single anchor of a rendered pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: String,
    /// Target URL, `None` for the current page, ellipses and disabled arrows.
    pub href: Option<String>,
    pub current: bool,
}

/// Renderable link row for a paginated view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub previous: PageLink,
    pub next: PageLink,
    pub entries: Vec<PageLink>,
}

/// Builds the link row for a paginated view, or `None` when a single page
/// needs no controls.
///
/// Every href repeats the pairs in `carried_query` so active filters survive
/// page changes.
pub fn page_links(
    current_page: usize,
    total_pages: usize,
    base_path: &str,
    page_param: &str,
    carried_query: &[(&str, &str)],
) -> Option<PageLinks> {
    if total_pages <= 1 {
        return None;
    }

    let current = current_page.clamp(1, total_pages);
    let href = |page: usize| page_href(base_path, page_param, page, carried_query);

    let entries = visible_pages(current, total_pages)
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(number) if number == current => PageLink {
                label: number.to_string(),
                href: None,
                current: true,
            },
            PageMarker::Page(number) => PageLink {
                label: number.to_string(),
                href: Some(href(number)),
                current: false,
            },
            PageMarker::Ellipsis => PageLink {
                label: "…".to_string(),
                href: None,
                current: false,
            },
        })
        .collect();

    let previous = PageLink {
        label: "Previous".to_string(),
        href: if current > 1 {
            Some(href(current - 1))
        } else {
            None
        },
        current: false,
    };
    let next = PageLink {
        label: "Next".to_string(),
        href: if current < total_pages {
            Some(href(current + 1))
        } else {
            None
        },
        current: false,
    };

    Some(PageLinks {
        previous,
        next,
        entries,
    })
}

fn page_href(
    base_path: &str,
    page_param: &str,
    page: usize,
    carried_query: &[(&str, &str)],
) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(page_param, &page.to_string());
    for (key, value) in carried_query {
        serializer.append_pair(key, value);
    }
    let query = serializer.finish();
    format!("{base_path}?{query}")
}
