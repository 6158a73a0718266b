//! System clipboard access

use anyhow::{Context, Result};

/// Place text on the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write to system clipboard")?;
    Ok(())
}
