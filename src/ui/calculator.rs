//! Calculator screen rendering.
//!
//! Renders the two-line display in a framed box, with the keypad below it.

use crate::display::Display;
use crate::input::KEYPAD;

/// Width of one keypad cell in columns.
const CELL_WIDTH: usize = 5;

/// Render the display box.
///
/// Both lines are right-aligned inside `width` columns. The box grows when a
/// line is longer than that.
pub fn render_display(display: &Display, width: usize) -> String {
    let inner = width
        .max(display.secondary.chars().count())
        .max(display.primary.chars().count());
    let border = "─".repeat(inner + 2);

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", border));
    out.push_str(&format!("│ {:>inner$} │\n", display.secondary));
    out.push_str(&format!("│ {:>inner$} │\n", display.primary));
    out.push_str(&format!("└{}┘\n", border));
    out
}

/// Render the keypad grid, one line per row.
pub fn render_keypad() -> String {
    let mut out = String::new();
    for row in KEYPAD {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, label)| {
                // The zero button spans two cells in the short last row.
                if row.len() < 4 && i == 0 {
                    format!("[{:^w$}]", label, w = CELL_WIDTH * 2 - 1)
                } else {
                    format!("[{:^w$}]", label, w = CELL_WIDTH - 2)
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Render the full screen.
pub fn render(display: &Display, width: usize, show_keypad: bool) -> String {
    let mut out = render_display(display, width);
    if show_keypad {
        out.push_str(&render_keypad());
    }
    out
}
