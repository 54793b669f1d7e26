//! Config and state store port.

use std::collections::BTreeMap;

use crate::domain::styles::{ArtStyle, ComicStyle};
use crate::domain::{AppError, History, RotationState, Settings};

/// Port for the JSON-backed config and state files.
///
/// Files are read and written whole, with no locking. That is safe only
/// under the single-operator, single-process assumption this tool is scoped
/// to; concurrent invocations may race on these files.
pub trait StateStore {
    fn load_settings(&self) -> Result<Settings, AppError>;
    fn load_art_styles(&self) -> Result<Vec<ArtStyle>, AppError>;
    fn load_comic_styles(&self) -> Result<Vec<ComicStyle>, AppError>;

    fn load_rotation(&self) -> Result<RotationState, AppError>;
    fn save_rotation(&self, state: &RotationState) -> Result<(), AppError>;

    fn load_history(&self) -> Result<History, AppError>;
    fn save_history(&self, history: &History) -> Result<(), AppError>;

    fn load_shorten_cache(&self) -> Result<BTreeMap<String, String>, AppError>;
    fn save_shorten_cache(&self, cache: &BTreeMap<String, String>) -> Result<(), AppError>;
}
