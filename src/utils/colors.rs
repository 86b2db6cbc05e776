//! Status colouring for tables and the calendar.

use ansi_term::{Colour, Style};

/// Colour of a status code, shared by every entity.
pub fn color_for_status(code: &str) -> Colour {
    match code {
        "formal" | "active" | "passed" | "completed" | "available" => Colour::Green,
        "trial" | "pending" | "interviewing" | "to-schedule" | "occupied" => Colour::Yellow,
        "screening" | "awaiting-feedback" => Colour::Cyan,
        "expired" | "rejected" | "cancelled" | "closed" => Colour::Red,
        "maintenance" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Paint `text` in the colour of `code`, or leave it plain.
pub fn paint_status(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        color_for_status(code).paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Reverse video for today's cell.
pub fn highlight_today(text: &str, enabled: bool) -> String {
    if enabled {
        Style::new().reverse().paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str, enabled: bool) -> String {
    if enabled {
        Colour::Fixed(8).paint(text).to_string()
    } else {
        text.to_string()
    }
}
