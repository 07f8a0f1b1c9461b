//! Input adapter: key names, keypad labels and key sequences.

mod keys;

pub use keys::{KEYPAD, parse_keys};
