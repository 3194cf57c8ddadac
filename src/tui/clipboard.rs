//! System clipboard access and the "Copied!" cell flash.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use super::GridCursor;

/// How long a copied cell shows its confirmation.
pub const COPY_FLASH_DURATION: Duration = Duration::from_millis(1500);

/// Copies text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write to clipboard")?;
    Ok(())
}

/// Confirmation shown on a cell after its hex was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFlash {
    /// Cell that was copied
    pub position: GridCursor,
    started: Instant,
}

impl CopyFlash {
    /// Starts a flash on `position` now.
    #[must_use]
    pub fn new(position: GridCursor) -> Self {
        Self::started_at(position, Instant::now())
    }

    /// Starts a flash on `position` at a given instant.
    #[must_use]
    pub const fn started_at(position: GridCursor, started: Instant) -> Self {
        Self { position, started }
    }

    /// Whether the flash is still visible at `now`.
    #[must_use]
    pub fn is_active_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < COPY_FLASH_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_expires_after_duration() {
        let start = Instant::now();
        let flash = CopyFlash::started_at(GridCursor { row: 1, col: 2 }, start);

        assert!(flash.is_active_at(start));
        assert!(flash.is_active_at(start + Duration::from_millis(1499)));
        assert!(!flash.is_active_at(start + COPY_FLASH_DURATION));
    }
}
