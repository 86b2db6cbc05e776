//! Generic filtering + pagination shared by every list view.
//!
//! A [`ListQuery`] borrows the full collection, carries a set of predicates
//! (combined with AND) and the requested page. [`paginate`] turns it into a
//! [`ListPage`] holding the visible slice and the display bounds.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Pages shown on each side of the current page by [`page_tokens`].
pub const DEFAULT_WINDOW_DELTA: usize = 2;

/// Boolean filter over one record.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// One filtering/paging request against a homogeneous collection.
pub struct ListQuery<'a, T> {
    items: &'a [T],
    predicates: Vec<Predicate<'a, T>>,
    page: usize,
    page_size: usize,
    clamp: bool,
}

impl<'a, T> ListQuery<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            predicates: Vec::new(),
            page: 1,
            page_size: 10,
            clamp: false,
        }
    }

    /// Add one predicate. All predicates must hold for an item to be kept.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Add already boxed predicates (as produced by `core::filters`).
    pub fn filters(mut self, predicates: Vec<Predicate<'a, T>>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Clamp the requested page into `[1, total_pages]` before slicing
    /// instead of returning an empty page.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p(item))
    }
}

/// Result of [`paginate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<'a, T> {
    pub visible_items: Vec<&'a T>,
    pub total_filtered: usize,
    pub total_pages: usize,
    /// 1-based position of the first visible item within the filtered set.
    pub start_index: usize,
    /// 1-based position of the last visible item (`min(page * size, total)`).
    pub end_index: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> ListPage<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter `query.items` with every predicate and cut out the requested page.
///
/// A page past the end yields an empty `visible_items`; a zero page or page
/// size is rejected.
pub fn paginate<'a, T>(query: ListQuery<'a, T>) -> AppResult<ListPage<'a, T>> {
    if query.page_size == 0 {
        return Err(AppError::InvalidArgument(
            "page size must be at least 1".into(),
        ));
    }
    if query.page == 0 {
        return Err(AppError::InvalidArgument(
            "page numbers start at 1".into(),
        ));
    }

    let filtered: Vec<&'a T> = query
        .items
        .iter()
        .filter(|item| query.matches(item))
        .collect();

    let total_filtered = filtered.len();
    let total_pages = total_filtered.div_ceil(query.page_size);

    let page = if query.clamp {
        query.page.clamp(1, total_pages.max(1))
    } else {
        query.page
    };

    let offset = (page - 1).saturating_mul(query.page_size);
    let end_index = page.saturating_mul(query.page_size).min(total_filtered);

    let visible_items = if offset >= total_filtered {
        Vec::new()
    } else {
        filtered[offset..end_index].to_vec()
    };

    tracing::debug!(
        total = query.items.len(),
        total_filtered,
        page,
        page_size = query.page_size,
        visible = visible_items.len(),
        "paginated list"
    );

    Ok(ListPage {
        visible_items,
        total_filtered,
        total_pages,
        start_index: offset.saturating_add(1),
        end_index,
        page,
        page_size: query.page_size,
    })
}

/// Page-number token shown by the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

/// Page numbers to display around `current`.
///
/// First and last page are always present, every page within `delta` of
/// `current` is listed, and each gap collapses into a single ellipsis.
/// When all pages fit in a window of `2 * delta + 1` they are all listed.
pub fn page_tokens(current: usize, total_pages: usize, delta: usize) -> Vec<PageToken> {
    if total_pages <= delta.saturating_mul(2).saturating_add(1) {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let low = current.saturating_sub(delta);
    let high = current.saturating_add(delta);

    let mut out = Vec::new();
    for i in 1..=total_pages {
        if i == 1 || i == total_pages || (i >= low && i <= high) {
            out.push(PageToken::Page(i));
        } else if out.last() != Some(&PageToken::Ellipsis) {
            out.push(PageToken::Ellipsis);
        }
    }
    out
}
