//! Copying the calculator display to the system clipboard.
//!
//! `:copy` copies the display text exactly as shown, so a pending
//! expression such as `50+1` is copied with its operator.

use arboard::Clipboard;

use crate::error::{Error, Result};

/// Put `text` on the system clipboard, replacing its contents.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| Error::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(format!("Failed to copy to clipboard: {}", e)))
}
