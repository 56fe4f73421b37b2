//! Terminal colors
//!
//! Category pills and budget states are shown in their hex color when the
//! terminal supports it.

use std::io::IsTerminal;

use crossterm::style::{style, Color, Stylize};

use crate::models::{BudgetStatus, HexColor};

/// Whether stdout should get ANSI colors (a terminal, and `NO_COLOR` unset)
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// `text` in `color`, or unchanged when `enabled` is false
pub fn paint(text: &str, color: HexColor, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let (r, g, b) = color.rgb();
    style(text).with(Color::Rgb { r, g, b }).to_string()
}

/// Color used for each budget state
pub fn status_color(status: BudgetStatus) -> HexColor {
    match status {
        BudgetStatus::Safe => HexColor::new("#34C759"),
        BudgetStatus::Warning => HexColor::new("#FF9500"),
        BudgetStatus::Danger => HexColor::new("#FF3B30"),
    }
}

/// `text` in the color of `status`
pub fn paint_status(text: &str, status: BudgetStatus, enabled: bool) -> String {
    paint(text, status_color(status), enabled)
}
