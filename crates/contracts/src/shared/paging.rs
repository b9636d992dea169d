//! Client-side paging over the generated rows

use serde::Serialize;
use std::ops::Range;

pub const PAGE_SIZE_OPTIONS: [usize; 2] = [10, 20];
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Always at least one page, even for an empty table
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_rows.div_ceil(page_size).max(1)
}

/// Pages are 1-based
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Indexes of the rows shown on `page`
pub fn page_range(page: usize, page_size: usize, total_rows: usize) -> Range<usize> {
    let page = clamp_page(page, total_pages(total_rows, page_size));
    let start = ((page - 1) * page_size).min(total_rows);
    let end = (start + page_size).min(total_rows);
    start..end
}

/// Number in the "序号" column
pub fn row_number(page: usize, page_size: usize, index_on_page: usize) -> usize {
    (page.max(1) - 1) * page_size + index_on_page + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// First and last page, the neighbours of the current one, and the first
/// or last three pages when the current page is near an edge.
pub fn page_buttons(current: usize, total: usize) -> Vec<PageButton> {
    let total = total.max(1);
    let current = clamp_page(current, total);

    let mut pages: Vec<usize> = vec![1, total, current];
    if current > 1 {
        pages.push(current - 1);
    }
    if current < total {
        pages.push(current + 1);
    }
    if current <= 3 {
        pages.extend(1..=3.min(total));
    }
    if current + 2 >= total {
        pages.extend(total.saturating_sub(2).max(1)..=total);
    }
    pages.sort_unstable();
    pages.dedup();

    let mut buttons = Vec::with_capacity(pages.len() + 2);
    let mut previous = 0;
    for page in pages {
        if previous != 0 && page > previous + 1 {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(PageButton::Page(page));
        previous = page;
    }
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageButton::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_page_range_and_row_numbers() {
        assert_eq!(page_range(1, 20, 20), 0..20);
        assert_eq!(page_range(2, 10, 20), 10..20);
        assert_eq!(page_range(9, 10, 20), 10..20);
        assert_eq!(page_range(0, 10, 20), 0..10);
        assert_eq!(page_range(1, 10, 0), 0..0);

        assert_eq!(row_number(1, 20, 0), 1);
        assert_eq!(row_number(2, 10, 4), 15);
    }

    #[test]
    fn test_page_buttons_near_start() {
        assert_eq!(
            page_buttons(1, 63),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(63)]
        );
        assert_eq!(page_buttons(1, 1), vec![Page(1)]);
        assert_eq!(page_buttons(1, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_page_buttons_middle_and_end() {
        assert_eq!(
            page_buttons(10, 63),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(63)]
        );
        assert_eq!(
            page_buttons(63, 63),
            vec![Page(1), Ellipsis, Page(61), Page(62), Page(63)]
        );
    }
}
