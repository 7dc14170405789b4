use serde::Serialize;

/// Largest page count that is listed in full, without any ellipsis.
pub const SMALL_PAGE_THRESHOLD: usize = 7;

/// A single entry of a pagination control, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "number", rename_all = "snake_case")]
pub enum PageMarker {
    /// A numbered page the user can jump to.
    Page(usize),
    /// A gap standing in for two or more hidden pages.
    Ellipsis,
}

impl PageMarker {
    /// Returns the page number for `Page` markers.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(number) => Some(number),
            Self::Ellipsis => None,
        }
    }
}

/// Computes the ordered markers of a pagination control.
///
/// Collections of up to [`SMALL_PAGE_THRESHOLD`] pages are listed in full.
/// Larger collections always show the first page, the last page and a
/// neighborhood around `current_page`, with an ellipsis for each gap. An
/// ellipsis always stands for at least two hidden pages; a gap of a single
/// page is shown as that page instead.
///
/// `current_page` is clamped into `1..=total_pages`. A `total_pages` of zero
/// yields an empty window.
pub fn visible_pages(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= SMALL_PAGE_THRESHOLD {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);

    // total_pages >= 8 from here on, so none of the ranges degenerate
    let (mut range_start, mut range_end) = if current <= 3 {
        (2, 5)
    } else if current >= total_pages - 2 {
        (total_pages - 4, total_pages - 1)
    } else {
        (current - 1, current + 1)
    };

    // A gap of exactly one page is absorbed into the range rather than
    // hidden behind an ellipsis
    if range_start == 3 {
        range_start = 2;
    }
    if range_end == total_pages - 2 {
        range_end = total_pages - 1;
    }

    // The widening above makes the window exactly seven markers wide
    let mut markers = Vec::with_capacity(SMALL_PAGE_THRESHOLD);
    markers.push(PageMarker::Page(1));
    if range_start > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((range_start..=range_end).map(PageMarker::Page));
    if range_end < total_pages - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total_pages));

    markers
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page};
    use super::{visible_pages, PageMarker, SMALL_PAGE_THRESHOLD};

    #[test]
    fn empty_collection_has_no_window() {
        assert!(visible_pages(1, 0).is_empty());
    }

    #[test]
    fn single_page_is_shown_alone() {
        assert_eq!(visible_pages(1, 1), vec![Page(1)]);
    }

    #[test]
    fn small_collections_are_listed_in_full() {
        assert_eq!(
            visible_pages(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );

        let at_threshold = visible_pages(4, SMALL_PAGE_THRESHOLD);
        assert_eq!(at_threshold.len(), SMALL_PAGE_THRESHOLD);
        assert!(at_threshold.iter().all(|marker| marker.page().is_some()));
    }

    #[test]
    fn near_start_widens_the_leading_range() {
        let expected = vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Ellipsis,
            Page(10),
        ];
        assert_eq!(visible_pages(1, 10), expected);
        assert_eq!(visible_pages(2, 10), expected);
        assert_eq!(visible_pages(3, 10), expected);
    }

    #[test]
    fn middle_page_is_flanked_by_ellipses() {
        assert_eq!(
            visible_pages(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10),
            ]
        );
    }

    #[test]
    fn near_end_widens_the_trailing_range() {
        let expected = vec![
            Page(1),
            Ellipsis,
            Page(6),
            Page(7),
            Page(8),
            Page(9),
            Page(10),
        ];
        assert_eq!(visible_pages(8, 10), expected);
        assert_eq!(visible_pages(10, 10), expected);
    }

    #[test]
    fn leading_gap_of_one_page_is_shown_explicitly() {
        // an ellipsis may never hide page 2 alone
        assert_eq!(
            visible_pages(4, 10),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10),
            ]
        );
    }

    #[test]
    fn trailing_gap_of_one_page_is_shown_explicitly() {
        assert_eq!(
            visible_pages(7, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10),
            ]
        );
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(visible_pages(0, 10), visible_pages(1, 10));
        assert_eq!(visible_pages(99, 10), visible_pages(10, 10));
    }

    #[test]
    fn large_windows_are_always_seven_markers_wide() {
        for total_pages in 8..=40 {
            for current_page in 1..=total_pages {
                let window = visible_pages(current_page, total_pages);
                assert_eq!(
                    window.len(),
                    SMALL_PAGE_THRESHOLD,
                    "width drifted at page {current_page} of {total_pages}"
                );
            }
        }
    }

    #[test]
    fn window_invariants_hold_across_inputs() {
        for total_pages in 1..=40 {
            for current_page in 0..=total_pages + 3 {
                let window = visible_pages(current_page, total_pages);
                assert_eq!(window, visible_pages(current_page, total_pages));

                assert_eq!(window.first(), Some(&Page(1)));
                assert_eq!(window.last(), Some(&Page(total_pages)));

                let shown = current_page.clamp(1, total_pages);
                assert!(
                    window.contains(&Page(shown)),
                    "page {shown} of {total_pages} missing from its own window"
                );

                for pair in window.windows(2) {
                    match pair {
                        [Page(a), Page(b)] => {
                            assert_eq!(*b, a + 1, "hidden gap without an ellipsis");
                        }
                        [Ellipsis, Ellipsis] => panic!("adjacent ellipses"),
                        _ => {}
                    }
                }

                for triple in window.windows(3) {
                    if let [Page(before), Ellipsis, Page(after)] = triple {
                        assert!(
                            after - before >= 3,
                            "ellipsis hides fewer than two pages between {before} and {after}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn markers_serialize_with_kind_tags() {
        let page = serde_json::to_value(PageMarker::Page(4)).unwrap();
        assert_eq!(page, serde_json::json!({ "kind": "page", "number": 4 }));

        let ellipsis = serde_json::to_value(PageMarker::Ellipsis).unwrap();
        assert_eq!(ellipsis, serde_json::json!({ "kind": "ellipsis" }));
    }
}
