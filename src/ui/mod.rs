mod calculator;

pub use calculator::{render, render_display, render_keypad};
