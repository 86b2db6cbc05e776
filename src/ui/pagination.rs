use crate::core::pager::{ListPage, PageToken, page_tokens};

/// "Showing a - b of n", or the reason nothing is shown.
pub fn summary_line<T>(page: &ListPage<'_, T>) -> String {
    if page.total_filtered == 0 {
        "No results".to_string()
    } else if page.is_empty() {
        format!(
            "Page {} is past the end ({} in total)",
            page.page,
            crate::utils::formatting::plural(page.total_pages, "page")
        )
    } else {
        format!(
            "Showing {} - {} of {}",
            page.start_index, page.end_index, page.total_filtered
        )
    }
}

/// Page bar such as `‹ 1 ... 3 4 [5] 6 7 ... 10 ›`; empty when there is at
/// most one page.
pub fn page_bar(current: usize, total_pages: usize, delta: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    let mut parts = Vec::new();
    if current > 1 && current <= total_pages {
        parts.push("‹".to_string());
    }

    for token in page_tokens(current, total_pages, delta) {
        parts.push(match token {
            PageToken::Page(n) if n == current => format!("[{n}]"),
            other => other.to_string(),
        });
    }

    if current < total_pages {
        parts.push("›".to_string());
    }

    parts.join(" ")
}

pub fn footer<T>(page: &ListPage<'_, T>, delta: usize) -> String {
    let bar = page_bar(page.page, page.total_pages, delta);
    if bar.is_empty() {
        summary_line(page)
    } else {
        format!("{}\n{bar}", summary_line(page))
    }
}
