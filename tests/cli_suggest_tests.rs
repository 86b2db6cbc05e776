mod common;
use common::rhd_plain;
use predicates::str::contains;

#[test]
fn test_suggest_competency() {
    rhd_plain("suggest_comp")
        .args(["suggest", "competency", "1"])
        .assert()
        .success()
        .stdout(contains("# Competency model: 前端架构师"))
        .stdout(contains("████████████ 30%"));
}

#[test]
fn test_suggest_interview_guide_json() {
    rhd_plain("suggest_json")
        .args(["suggest", "interview-guide", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"kind\": \"interview-guide\""))
        .stdout(contains("张三"));
}

#[test]
fn test_suggest_unknown_subject() {
    rhd_plain("suggest_missing")
        .args(["suggest", "candidate-focus", "99"])
        .assert()
        .failure()
        .stderr(contains("Not found: candidate #99"));
}
