//! System clipboard access.

use crate::error::{ClipboardError, LensError};

/// Copy plain text to the system clipboard.
pub fn copy(text: &str) -> Result<(), LensError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
        message: e.to_string(),
    })?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed {
            message: e.to_string(),
        })?;

    Ok(())
}
