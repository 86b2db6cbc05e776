mod common;
use common::{TODAY, rhd, rhd_plain, temp_config};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_calendar_current_month() {
    rhd_plain("cal_current")
        .arg("calendar")
        .assert()
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains(" Su"))
        .stdout(contains(" 20 *"))
        .stdout(contains("14:30 张三"))
        .stdout(contains("10:00 李四"))
        .stdout(contains("+1 more"))
        .stdout(contains("7 interviews scheduled"))
        .stdout(contains("Showing 1 - 7 of 7"));
}

#[test]
fn test_calendar_select_date() {
    rhd_plain("cal_select")
        .args(["calendar", "--select", "2024-03-21"])
        .assert()
        .success()
        .stdout(contains("[21]"))
        .stdout(contains("1 interview on Thu 21 Mar"))
        .stdout(contains("赵六"));
}

#[test]
fn test_calendar_other_month_keeps_interview_list() {
    rhd_plain("cal_feb")
        .args(["calendar", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("February 2024"))
        .stdout(contains("29"))
        .stdout(contains("+1 more").not())
        .stdout(contains("7 interviews scheduled"));
}

#[test]
fn test_calendar_shift_back() {
    rhd_plain("cal_shift_back")
        .args(["calendar", "--shift=-1"])
        .assert()
        .success()
        .stdout(contains("February 2024"));
}

#[test]
fn test_calendar_shift_across_year() {
    rhd_plain("cal_shift_year")
        .args(["calendar", "--month", "2024-11", "--shift", "2"])
        .assert()
        .success()
        .stdout(contains("January 2025"));
}

#[test]
fn test_calendar_limit_shows_all_events() {
    rhd_plain("cal_limit")
        .args(["calendar", "--limit", "3"])
        .assert()
        .success()
        .stdout(contains("16:00 王五"))
        .stdout(contains("+1 more").not());
}

#[test]
fn test_calendar_limit_from_config() {
    let cfg = temp_config("cal_cfg_limit", "max_events_per_day: 1\n");
    rhd()
        .args(["--config", &cfg, "--today", TODAY, "calendar"])
        .assert()
        .success()
        .stdout(contains("+2 more"));
}

#[test]
fn test_calendar_invalid_month() {
    rhd_plain("cal_bad_month")
        .args(["calendar", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_day_lists_interviews_by_time() {
    let out = rhd_plain("day_today")
        .args(["day", "2024-03-20"])
        .assert()
        .success()
        .stdout(contains("Interviews on Wed 20 Mar"))
        .stdout(contains("01h 00m"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let li = text.find("李四").unwrap();
    let zhang = text.find("张三").unwrap();
    let wang = text.find("王五").unwrap();
    assert!(li < zhang && zhang < wang);
}

#[test]
fn test_day_without_interviews() {
    rhd_plain("day_empty")
        .args(["day", "2024-03-19"])
        .assert()
        .success()
        .stdout(contains("No interviews on 2024-03-19."));
}

#[test]
fn test_day_invalid_date() {
    rhd_plain("day_bad")
        .args(["day", "2024-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_calendar_lists_interviews_outside_shown_month() {
    rhd()
        .args(["--config", &temp_config("cal_month_end", ""), "--today", "2024-03-28"])
        .arg("calendar")
        .assert()
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains("7 interviews scheduled"))
        .stdout(contains("2024-04-04"));
}

#[test]
fn test_calendar_status_filter() {
    rhd_plain("cal_status")
        .args(["calendar", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("5 interviews scheduled"))
        .stdout(contains("Showing 1 - 5 of 5"));
}

#[test]
fn test_calendar_interview_list_is_paged() {
    rhd_plain("cal_paged")
        .args(["calendar", "--page", "2", "--page-size", "2"])
        .assert()
        .success()
        .stdout(contains("Showing 3 - 4 of 7"))
        .stdout(contains("‹ 1 [2] 3 4 ›"))
        .stdout(contains("16:00-17:00"))
        .stdout(contains("09:30-10:30"));
}

#[test]
fn test_calendar_date_flag_selects_like_select() {
    rhd_plain("cal_date_flag")
        .args(["calendar", "--date", "2024-03-21"])
        .assert()
        .success()
        .stdout(contains("[21]"))
        .stdout(contains("1 interview on Thu 21 Mar"));
}

#[test]
fn test_calendar_selected_date_with_no_match() {
    rhd_plain("cal_select_none")
        .args(["calendar", "--select", "2024-03-21", "--status", "cancelled"])
        .assert()
        .success()
        .stdout(contains("No interviews on Thu 21 Mar."))
        .stdout(contains("No results"));
}

#[test]
fn test_calendar_search_and_position() {
    rhd_plain("cal_search")
        .args(["calendar", "--position", "产品经理", "--search", "周"])
        .assert()
        .success()
        .stdout(contains("1 interview scheduled"))
        .stdout(contains("2024-03-27"));
}
