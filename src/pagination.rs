//! Page arithmetic for paged listings: page counts, offsets and the window of
//! page numbers shown in the pagination bar.

use std::ops::RangeInclusive;

use crate::errors::pagination::PaginationError;

pub const DEFAULT_PAGE_SIZE: i64 = 15;
pub const DEFAULT_WINDOW_SIZE: i64 = 5;

/// The range of page numbers shown in the pagination bar.
///
/// `start..=end` is centred on the current page and slid back inside the
/// catalog when it would overflow one of its edges. Only one slide is ever
/// applied, so when the catalog has fewer pages than the window, `end` can
/// be greater than the total page count (or `start` smaller than 1).
/// Consumers must tolerate bounds outside `1..=total_pages` in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    pub start: i64,
    pub end: i64,
    /// `min(total_pages, window_size)`
    pub size: i64,
}

impl PageWindow {
    pub fn compute(
        current_page: i64,
        total_pages: i64,
        window_size: i64,
    ) -> Result<Self, PaginationError> {
        if total_pages < 1 {
            return Err(PaginationError::InvalidTotalPages(total_pages));
        }
        validate_window_size(window_size)?;

        let half = (window_size - 1) / 2;
        let mut start = current_page.saturating_sub(half);
        let mut end = current_page.saturating_add(half);

        if start < 1 {
            start = 1;
            end = window_size;
        } else if end > total_pages {
            start = total_pages - window_size + 1;
            end = total_pages;
        }

        Ok(Self {
            start,
            end,
            size: total_pages.min(window_size),
        })
    }

    /// Every page number in the window, including any that fall outside the catalog
    pub fn pages(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }

    /// Page numbers in the window that actually exist in a catalog of `total_pages`
    pub fn visible_pages(&self, total_pages: i64) -> RangeInclusive<i64> {
        self.start.max(1)..=self.end.min(total_pages)
    }
}

/// Rejects window sizes that cannot be centred on a page
pub fn validate_window_size(window_size: i64) -> Result<(), PaginationError> {
    if window_size < 1 || window_size % 2 == 0 {
        return Err(PaginationError::InvalidWindowSize(window_size));
    }

    Ok(())
}

pub fn validate_page_size(page_size: i64) -> Result<(), PaginationError> {
    if page_size < 1 {
        return Err(PaginationError::InvalidPageSize(page_size));
    }

    Ok(())
}

/// Number of pages needed for `total_count` items; an empty catalog still has one page
pub fn total_pages(total_count: i64, page_size: i64) -> Result<i64, PaginationError> {
    validate_page_size(page_size)?;

    if total_count <= 0 {
        return Ok(1);
    }

    Ok((total_count - 1) / page_size + 1)
}

/// Row offset of the first item on `page_number`. Negative for page numbers below 1,
/// which have no rows.
pub fn page_offset(page_number: i64, page_size: i64) -> i64 {
    page_number.saturating_sub(1).saturating_mul(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: i64, total: i64, size: i64) -> (i64, i64) {
        let w = PageWindow::compute(current, total, size).unwrap();
        (w.start, w.end)
    }

    #[test]
    fn test_left_edge() {
        assert_eq!(window(1, 20, 5), (1, 5));
        assert_eq!(window(2, 20, 5), (1, 5));
    }

    #[test]
    fn test_right_edge() {
        assert_eq!(window(20, 20, 5), (16, 20));
        assert_eq!(window(19, 20, 5), (16, 20));
    }

    #[test]
    fn test_centered() {
        assert_eq!(window(10, 20, 5), (8, 12));
        assert_eq!(window(3, 20, 5), (1, 5));
        assert_eq!(window(18, 20, 5), (16, 20));
    }

    #[test]
    fn test_fewer_pages_than_window() {
        let w = PageWindow::compute(1, 3, 5).unwrap();
        assert_eq!((w.start, w.end), (1, 5));
        assert_eq!(w.size, 3);
        assert_eq!(w.visible_pages(3).collect::<Vec<_>>(), vec![1, 2, 3]);

        // Only the right slide fires here, pulling start below 1
        assert_eq!(window(3, 3, 5), (-1, 3));
    }

    #[test]
    fn test_out_of_range_current_page() {
        assert_eq!(window(0, 20, 5), (1, 5));
        assert_eq!(window(-40, 20, 5), (1, 5));
        assert_eq!(window(99, 20, 5), (16, 20));
        assert_eq!(window(i64::MAX, 20, 5), (16, 20));
    }

    #[test]
    fn test_window_invariants_hold_inside_catalog() {
        for size in [1, 3, 5, 7, 9] {
            for total in size..40 {
                for current in 1..=total {
                    let w = PageWindow::compute(current, total, size).unwrap();
                    assert_eq!(w.end - w.start + 1, size, "({current}, {total}, {size})");
                    assert!(w.start >= 1);
                    assert!(w.end <= total);
                    assert!((w.start..=w.end).contains(&current));
                    assert_eq!(w.size, size);
                }
            }
        }
    }

    #[test]
    fn test_single_page_window() {
        assert_eq!(window(7, 20, 1), (7, 7));
        assert_eq!(window(1, 1, 1), (1, 1));
    }

    #[test]
    fn test_is_idempotent() {
        let first = PageWindow::compute(12, 31, 7);
        let second = PageWindow::compute(12, 31, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            PageWindow::compute(1, 0, 5),
            Err(PaginationError::InvalidTotalPages(0))
        );
        assert_eq!(
            PageWindow::compute(1, 10, 4),
            Err(PaginationError::InvalidWindowSize(4))
        );
        assert_eq!(
            PageWindow::compute(1, 10, 0),
            Err(PaginationError::InvalidWindowSize(0))
        );
        assert_eq!(
            PageWindow::compute(1, 10, -3),
            Err(PaginationError::InvalidWindowSize(-3))
        );
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 15), Ok(1));
        assert_eq!(total_pages(1, 15), Ok(1));
        assert_eq!(total_pages(15, 15), Ok(1));
        assert_eq!(total_pages(16, 15), Ok(2));
        assert_eq!(total_pages(300, 15), Ok(20));
        assert_eq!(total_pages(10, 0), Err(PaginationError::InvalidPageSize(0)));
    }

    #[test]
    fn test_total_pages_with_huge_page_size() {
        assert_eq!(total_pages(2, i64::MAX), Ok(1));
        assert_eq!(total_pages(i64::MAX, i64::MAX), Ok(1));
        assert_eq!(total_pages(i64::MAX, 1), Ok(i64::MAX));
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 15), 0);
        assert_eq!(page_offset(2, 15), 15);
        assert_eq!(page_offset(10, 15), 135);
        assert_eq!(page_offset(0, 15), -15);
        assert_eq!(page_offset(-5, 15), -90);
        assert_eq!(page_offset(i64::MIN, 15), i64::MIN);
        assert_eq!(page_offset(i64::MAX, 15), i64::MAX);
    }
}
