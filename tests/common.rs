#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reference date pinned for every CLI test: Wednesday 20 March 2024.
pub const TODAY: &str = "2024-03-20";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 20).expect("valid date")
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn rhd() -> Command {
    cargo_bin_cmd!("rhiredesk")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rhiredesk_{name}.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file with colours off plus `extra` YAML lines.
pub fn temp_config(name: &str, extra: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, format!("color: false\n{extra}")).expect("write config");
    path
}

/// `rhiredesk --config <plain config> --today 2024-03-20`
pub fn rhd_plain(name: &str) -> Command {
    let cfg = temp_config(name, "");
    let mut cmd = rhd();
    cmd.args(["--config", &cfg, "--today", TODAY]);
    cmd
}
