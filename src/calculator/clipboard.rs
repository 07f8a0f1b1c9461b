//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;

use crate::error::{Error, Result};

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| Error::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(format!("Failed to copy to clipboard: {}", e)))?;

    tracing::debug!(text, "copied to clipboard");
    Ok(())
}
