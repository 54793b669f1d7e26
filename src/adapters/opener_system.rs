//! File-manager reveal via the platform opener.

use std::path::Path;

use crate::domain::AppError;
use crate::ports::FileOpener;

/// Opens paths with the system handler (Finder on macOS, xdg-open on Linux).
#[derive(Debug, Clone, Default)]
pub struct SystemFileOpener;

impl FileOpener for SystemFileOpener {
    fn reveal(&self, path: &Path) -> Result<(), AppError> {
        open::that(path)
            .map_err(|e| AppError::Configuration(format!("Failed to open {}: {e}", path.display())))
    }
}
