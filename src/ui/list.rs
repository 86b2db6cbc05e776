use crate::core::pager::ListPage;
use crate::models::Listable;
use crate::ui::pagination::footer;
use crate::utils::colors::paint_status;
use crate::utils::table::Table;

/// Table of the visible rows of `page`; the status column is coloured.
pub fn render_table<T: Listable>(items: &[&T], color: bool) -> String {
    let headers = T::headers();
    let status_col = headers.iter().position(|h| *h == "Status");
    let mut table = Table::with_headers(&headers);

    for item in items {
        let mut row = item.row();
        if let (Some(col), Some(code)) = (status_col, item.status_code())
            && let Some(cell) = row.get_mut(col)
        {
            *cell = paint_status(cell, code, color);
        }
        table.add_row(row);
    }

    table.render()
}

pub fn render_page<T: Listable>(page: &ListPage<'_, T>, delta: usize, color: bool) -> String {
    let mut out = String::new();
    if !page.is_empty() {
        out.push_str(&render_table(&page.visible_items, color));
        out.push('\n');
    }
    out.push_str(&footer(page, delta));
    out.push('\n');
    out
}
