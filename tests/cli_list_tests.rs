mod common;
use common::{TODAY, rhd, rhd_plain, temp_config};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_list_candidates_first_page() {
    rhd_plain("list_first")
        .args(["list", "candidates"])
        .assert()
        .success()
        .stdout(contains("====================== Candidates"))
        .stdout(contains("Showing 1 - 10 of 12"))
        .stdout(contains("[1] 2 ›"))
        .stdout(contains("张三"))
        .stdout(contains("陈三").not());
}

#[test]
fn test_list_candidates_second_page() {
    rhd_plain("list_second")
        .args(["list", "candidates", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("Showing 11 - 12 of 12"))
        .stdout(contains("‹ 1 [2]"))
        .stdout(contains("陈三"))
        .stdout(contains("褚四"));
}

#[test]
fn test_list_status_filter() {
    rhd_plain("list_status")
        .args(["list", "candidates", "--status", "screening"])
        .assert()
        .success()
        .stdout(contains("Showing 1 - 3 of 3"))
        .stdout(contains("Resume screening"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    rhd_plain("list_search")
        .args(["list", "candidates", "--search", "LISI@"])
        .assert()
        .success()
        .stdout(contains("Showing 1 - 1 of 1"))
        .stdout(contains("李四"));
}

#[test]
fn test_list_no_results() {
    rhd_plain("list_none")
        .args(["list", "candidates", "--search", "nobody-here"])
        .assert()
        .success()
        .stdout(contains("No results"));
}

#[test]
fn test_list_page_past_end() {
    rhd_plain("list_past_end")
        .args(["list", "candidates", "--page", "9"])
        .assert()
        .success()
        .stdout(contains("Page 9 is past the end (2 pages in total)"));
}

#[test]
fn test_list_clamped_page() {
    let cfg = temp_config("list_clamp", "clamp_page: true\n");
    rhd()
        .args(["--config", &cfg, "--today", TODAY, "list", "candidates", "--page", "9"])
        .assert()
        .success()
        .stdout(contains("Showing 11 - 12 of 12"));
}

#[test]
fn test_list_page_zero_is_an_error() {
    rhd_plain("list_page_zero")
        .args(["list", "candidates", "--page", "0"])
        .assert()
        .failure()
        .stderr(contains("page numbers start at 1"));
}

#[test]
fn test_list_unknown_status_is_an_error() {
    rhd_plain("list_bad_status")
        .args(["list", "candidates", "--status", "hired"])
        .assert()
        .failure()
        .stderr(contains("Invalid status 'hired' for candidates"));
}

#[test]
fn test_list_windowed_page_bar() {
    rhd_plain("list_window")
        .args(["list", "candidates", "--page-size", "1", "--page", "5"])
        .assert()
        .success()
        .stdout(contains("Showing 5 - 5 of 12"))
        .stdout(contains("‹ 1 ... 3 4 [5] 6 7 ... 12 ›"));
}

#[test]
fn test_list_page_size_from_config() {
    let cfg = temp_config("list_cfg_size", "page_size: 5\n");
    rhd()
        .args(["--config", &cfg, "--today", TODAY, "list", "candidates"])
        .assert()
        .success()
        .stdout(contains("Showing 1 - 5 of 12"));
}

#[test]
fn test_enterprises_use_their_own_page_size() {
    let cfg = temp_config("list_ent_size", "page_size: 1\n");
    rhd()
        .args(["--config", &cfg, "--today", TODAY, "list", "enterprises"])
        .assert()
        .success()
        .stdout(contains("Showing 1 - 4 of 4"));
}

#[test]
fn test_list_interviews_on_date() {
    rhd_plain("list_interviews_date")
        .args(["list", "interviews", "--date", "2024-03-20"])
        .assert()
        .success()
        .stdout(contains("Showing 1 - 3 of 3"))
        .stdout(contains("14:30-15:30"));
}

#[test]
fn test_list_interviews_by_position() {
    rhd_plain("list_interviews_pos")
        .args(["list", "interviews", "--position", "产品经理"])
        .assert()
        .success()
        .stdout(contains("Showing 1 - 2 of 2"));
}

#[test]
fn test_position_filter_on_positions_is_an_error() {
    rhd_plain("list_positions_pos")
        .args(["list", "positions", "--position", "x"])
        .assert()
        .failure()
        .stderr(contains("cannot be filtered by position"));
}

#[test]
fn test_list_departments_tree() {
    rhd_plain("list_departments")
        .args(["list", "departments"])
        .assert()
        .success()
        .stdout(contains("TECH-FE"))
        .stdout(contains("Showing 1 - 6 of 6"));
}

#[test]
fn test_invalid_today_is_an_error() {
    rhd()
        .args(["--today", "20-03-2024", "list", "candidates"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
