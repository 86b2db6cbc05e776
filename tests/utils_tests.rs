use rhiredesk::core::pager::{ListQuery, paginate};
use rhiredesk::ui::pagination::{footer, page_bar};
use rhiredesk::utils::formatting::{pad_right, plural, truncate_to_width};
use rhiredesk::utils::table::{Table, strip_ansi, visible_width};
use rhiredesk::utils::time::{format_minutes, parse_time_range, range_minutes};
use unicode_width::UnicodeWidthStr;

#[test]
fn test_table_aligns_cjk_cells() {
    let mut table = Table::with_headers(&["ID", "Name", "City"]);
    table.add_row(vec!["1".into(), "张三".into(), "北京".into()]);
    table.add_row(vec!["12".into(), "Bob".into(), "Shanghai".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "-- ---- --------");

    // Second column starts at the same terminal column on every row.
    let name_col = |line: &str| {
        let idx = line.find(|c: char| !c.is_ascii_digit() && c != ' ').unwrap();
        UnicodeWidthStr::width(&line[..idx])
    };
    assert_eq!(name_col(lines[2]), name_col(lines[3]));
}

#[test]
fn test_visible_width_ignores_escapes() {
    let coloured = "\x1b[32mPassed\x1b[0m";
    assert_eq!(strip_ansi(coloured), "Passed");
    assert_eq!(visible_width(coloured), 6);
    assert_eq!(visible_width("王五"), 4);
}

#[test]
fn test_truncate_and_pad_use_columns() {
    assert_eq!(truncate_to_width("14:30 张三", 20), "14:30 张三");
    assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    assert_eq!(truncate_to_width("张三李四", 5), "张三…");
    assert_eq!(pad_right("张三", 6), "张三  ");
    assert_eq!(plural(1, "page"), "1 page");
    assert_eq!(plural(0, "page"), "0 pages");
}

#[test]
fn test_time_ranges() {
    assert_eq!(range_minutes("14:30-15:30").unwrap(), Some(60));
    assert_eq!(range_minutes("09:00").unwrap(), None);
    assert_eq!(format_minutes(95), "01h 35m");
    assert!(parse_time_range("16:00-15:00").is_err());
    assert!(parse_time_range("25:00-26:00").is_err());
}

#[test]
fn test_page_bar_marks_current_page() {
    assert_eq!(page_bar(1, 1, 2), "");
    assert_eq!(page_bar(1, 3, 2), "[1] 2 3 ›");
    assert_eq!(page_bar(3, 3, 2), "‹ 1 2 [3]");
    assert_eq!(page_bar(1, 10, 2), "[1] 2 3 ... 10 ›");
}

#[test]
fn test_footer_for_single_page_has_no_bar() {
    let items: Vec<u32> = (1..=4).collect();
    let page = paginate(ListQuery::new(&items).page_size(10)).unwrap();
    assert_eq!(footer(&page, 2), "Showing 1 - 4 of 4");
}
