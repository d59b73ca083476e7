//! Clipboard integration.

use crate::error::{MathscopeError, Result};
use arboard::Clipboard;

/// Copy a result to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(MathscopeError::validation("Nothing to copy."));
    }
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    tracing::debug!("Copied {} bytes to the clipboard", text.len());
    Ok(())
}
