use serde::Serialize;

use crate::repository::Pagination;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Normalizes raw `page`/`per_page` parameters.
///
/// Pages below 1 become 1; `per_page` defaults to [`DEFAULT_ITEMS_PER_PAGE`]
/// and is clamped to `1..=MAX_ITEMS_PER_PAGE`.
pub fn page_window(page: Option<i64>, per_page: Option<i64>) -> Pagination {
    let page = page.unwrap_or(1).max(1) as usize;
    let per_page = per_page
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE as i64)
        .clamp(1, MAX_ITEMS_PER_PAGE as i64) as usize;
    Pagination { page, per_page }
}

/// Page metadata serialized next to every paginated list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub total: usize,
    pub pages: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(total: usize, pagination: Pagination) -> Self {
        let per_page = pagination.per_page.max(1);
        let current_page = pagination.page.max(1);
        let pages = total.div_ceil(per_page);

        Self {
            total,
            pages,
            current_page,
            per_page,
            has_next: current_page < pages,
            has_prev: current_page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_and_clamps() {
        assert_eq!(
            page_window(None, None),
            Pagination {
                page: 1,
                per_page: 20
            }
        );
        assert_eq!(
            page_window(Some(-3), Some(500)),
            Pagination {
                page: 1,
                per_page: 100
            }
        );
        assert_eq!(page_window(Some(4), Some(0)).per_page, 1);
    }

    #[test]
    fn last_possible_page_has_no_next() {
        let window = page_window(Some(i64::MAX), Some(20));
        assert_eq!(window.offset(), i64::MAX);

        let meta = PageMeta::new(45, window);
        assert_eq!(meta.pages, 3);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn meta_for_middle_page() {
        let meta = PageMeta::new(
            45,
            Pagination {
                page: 2,
                per_page: 20,
            },
        );
        assert_eq!(meta.pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn meta_for_empty_result() {
        let meta = PageMeta::new(0, page_window(None, None));
        assert_eq!(meta.pages, 0);
        assert_eq!(meta.current_page, 1);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }
}
