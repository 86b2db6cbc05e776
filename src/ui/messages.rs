use crate::core::notify::{Level, Notification, NotificationCenter};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn ANSI styling of every message on or off (`color` config key).
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn styled(fg: &str, icon: &str) -> String {
    if color_enabled() {
        format!("{fg}{BOLD}{icon} {RESET}")
    } else {
        format!("{icon} ")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}", styled(FG_BLUE, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}", styled(FG_GREEN, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}", styled(FG_YELLOW, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}", styled(FG_RED, ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    if color_enabled() {
        println!("{FG_BLUE}{BOLD}====================== {msg}{RESET}\n");
    } else {
        println!("====================== {msg}\n");
    }
}

/// Print one notification with the message style of its level.
pub fn print_notification(n: &Notification) {
    match n.level {
        Level::Success => success(&n.message),
        Level::Error => error(&n.message),
        Level::Info => info(&n.message),
    }
}

/// A notification center whose only subscriber prints to the terminal.
pub fn terminal_center() -> NotificationCenter {
    let mut center = NotificationCenter::new();
    center.subscribe(print_notification);
    center
}
