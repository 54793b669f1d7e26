//! File-manager reveal port.

use std::path::Path;

use crate::domain::AppError;

/// Port for revealing a path in the platform file manager.
pub trait FileOpener {
    /// Open `path` in the file manager. Best-effort; callers treat a failure
    /// as a warning, never as fatal.
    fn reveal(&self, path: &Path) -> Result<(), AppError>;
}
