use rhiredesk::core::pager::{DEFAULT_WINDOW_DELTA, ListQuery, PageToken, page_tokens, paginate};
use rhiredesk::errors::AppError;

fn numbers(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

fn render(tokens: &[PageToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_first_page_bounds() {
    let items = numbers(12);
    let page = paginate(ListQuery::new(&items).page(1).page_size(10)).unwrap();

    assert_eq!(page.visible_items.len(), 10);
    assert_eq!(page.total_filtered, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.start_index, 1);
    assert_eq!(page.end_index, 10);
    assert!(!page.has_previous());
    assert!(page.has_next());
}

#[test]
fn test_last_partial_page() {
    let items = numbers(12);
    let page = paginate(ListQuery::new(&items).page(2).page_size(10)).unwrap();

    assert_eq!(page.visible_items, vec![&11, &12]);
    assert_eq!(page.start_index, 11);
    assert_eq!(page.end_index, 12);
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[test]
fn test_visible_never_exceeds_page_size() {
    let items = numbers(37);
    for size in 1..=12 {
        for p in 1..=10 {
            let page = paginate(ListQuery::new(&items).page(p).page_size(size)).unwrap();
            assert!(page.visible_items.len() <= size);
        }
    }
}

#[test]
fn test_pages_concatenate_to_filtered_set() {
    let items = numbers(23);
    let even = |n: &u32| n % 2 == 0;

    let first = paginate(ListQuery::new(&items).filter(even).page(1).page_size(4)).unwrap();
    let mut seen = Vec::new();
    for p in 1..=first.total_pages {
        let page = paginate(ListQuery::new(&items).filter(even).page(p).page_size(4)).unwrap();
        assert_eq!(page.total_filtered, first.total_filtered);
        seen.extend(page.visible_items.into_iter().copied());
    }

    let expected: Vec<u32> = items.iter().copied().filter(|n| n % 2 == 0).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_predicates_are_combined_with_and() {
    let items = numbers(30);
    let page = paginate(
        ListQuery::new(&items)
            .filter(|n: &u32| n % 2 == 0)
            .filter(|n: &u32| n % 3 == 0)
            .page_size(100),
    )
    .unwrap();

    assert_eq!(page.visible_items, vec![&6, &12, &18, &24, &30]);
}

#[test]
fn test_no_predicates_match_everything() {
    let items = numbers(7);
    let page = paginate(ListQuery::new(&items).page_size(100)).unwrap();
    assert_eq!(page.total_filtered, 7);
}

#[test]
fn test_page_past_end_is_empty_not_error() {
    let items = numbers(12);
    let page = paginate(ListQuery::new(&items).page(5).page_size(10)).unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_filtered, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 5);
}

#[test]
fn test_empty_input_has_zero_pages() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(ListQuery::new(&items)).unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_filtered, 0);
}

#[test]
fn test_zero_page_size_rejected() {
    let items = numbers(3);
    let err = paginate(ListQuery::new(&items).page_size(0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
}

#[test]
fn test_zero_page_rejected() {
    let items = numbers(3);
    let err = paginate(ListQuery::new(&items).page(0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
}

#[test]
fn test_clamped_query_moves_to_last_page() {
    let items = numbers(12);
    let page = paginate(ListQuery::new(&items).page(9).page_size(5).clamped(true)).unwrap();

    assert_eq!(page.page, 3);
    assert_eq!(page.visible_items, vec![&11, &12]);
}

#[test]
fn test_clamped_query_on_empty_input_stays_on_page_one() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(ListQuery::new(&items).page(4).clamped(true)).unwrap();
    assert_eq!(page.page, 1);
    assert!(page.is_empty());
}

#[test]
fn test_order_is_preserved() {
    let items = vec!["c", "a", "b", "a"];
    let page = paginate(ListQuery::new(&items).filter(|s: &&str| *s != "b")).unwrap();
    assert_eq!(page.visible_items, vec![&"c", &"a", &"a"]);
}

#[test]
fn test_window_middle_of_ten() {
    let tokens = page_tokens(5, 10, DEFAULT_WINDOW_DELTA);
    assert_eq!(render(&tokens), "1 ... 3 4 5 6 7 ... 10");
}

#[test]
fn test_window_covers_whole_range() {
    let tokens = page_tokens(1, 5, DEFAULT_WINDOW_DELTA);
    assert_eq!(
        tokens,
        (1..=5).map(PageToken::Page).collect::<Vec<_>>()
    );
}

#[test]
fn test_window_near_edges() {
    assert_eq!(render(&page_tokens(1, 10, 2)), "1 2 3 ... 10");
    assert_eq!(render(&page_tokens(10, 10, 2)), "1 ... 8 9 10");
    assert_eq!(render(&page_tokens(4, 10, 2)), "1 2 3 4 5 6 ... 10");
}

#[test]
fn test_window_never_repeats_ellipsis() {
    for total in 1..=30 {
        for current in 1..=total {
            let tokens = page_tokens(current, total, 2);
            assert_eq!(tokens.first(), Some(&PageToken::Page(1)));
            assert_eq!(tokens.last(), Some(&PageToken::Page(total)));
            assert!(
                tokens
                    .windows(2)
                    .all(|w| !(w[0] == PageToken::Ellipsis && w[1] == PageToken::Ellipsis))
            );
        }
    }
}

#[test]
fn test_window_without_pages() {
    assert!(page_tokens(1, 0, 2).is_empty());
}
