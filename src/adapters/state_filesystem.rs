//! Filesystem-backed config and state store.
//!
//! Layout under the base directory:
//!
//! ```text
//! config/settings.json      config/art_styles.json   config/comic_styles.json
//! state/state.json          state/post_history.json
//! cache/shortened_urls.json
//! ```
//!
//! Config files are seeded from embedded defaults on first use. State and
//! cache files simply default in memory until first saved.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::styles::{ArtStyle, ArtStyleBook, ComicStyle, ComicStyleBook};
use crate::domain::{AppError, History, RotationState, Settings};
use crate::ports::StateStore;

static CONFIG_DEFAULTS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/config");

const SETTINGS_FILE: &str = "settings.json";
const ART_STYLES_FILE: &str = "art_styles.json";
const COMIC_STYLES_FILE: &str = "comic_styles.json";

/// Environment variable overriding the base directory (used by tests and
/// portable setups).
pub const HOME_ENV: &str = "MEDIPOST_HOME";

const DEFAULT_DIR_NAME: &str = ".medipost";

#[derive(Debug, Clone)]
pub struct FilesystemStateStore {
    root: PathBuf,
}

impl FilesystemStateStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the base directory: `$MEDIPOST_HOME`, else `$HOME/.medipost`.
    pub fn from_env() -> Result<Self, AppError> {
        if let Some(root) = std::env::var_os(HOME_ENV) {
            return Ok(Self::new(PathBuf::from(root)));
        }
        let home = std::env::var_os("HOME")
            .ok_or_else(|| AppError::config_error("HOME is not set; set MEDIPOST_HOME instead"))?;
        Ok(Self::new(PathBuf::from(home).join(DEFAULT_DIR_NAME)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self, name: &str) -> PathBuf {
        self.root.join("config").join(name)
    }

    fn state_path(&self, name: &str) -> PathBuf {
        self.root.join("state").join(name)
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.root.join("cache").join(name)
    }

    /// Read a config file, writing the embedded default first when absent.
    fn load_config<T: DeserializeOwned>(&self, name: &str) -> Result<T, AppError> {
        let path = self.config_path(name);
        if !path.exists() {
            let default = CONFIG_DEFAULTS
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| {
                    AppError::config_error(format!("missing embedded default for {name}"))
                })?;
            write_file(&path, default)?;
        }
        read_json(&path)
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T, AppError> {
        if !path.exists() {
            return Ok(T::default());
        }
        read_json(path)
    }
}

impl StateStore for FilesystemStateStore {
    fn load_settings(&self) -> Result<Settings, AppError> {
        self.load_config(SETTINGS_FILE)
    }

    fn load_art_styles(&self) -> Result<Vec<ArtStyle>, AppError> {
        let book: ArtStyleBook = self.load_config(ART_STYLES_FILE)?;
        Ok(book.rotation)
    }

    fn load_comic_styles(&self) -> Result<Vec<ComicStyle>, AppError> {
        let book: ComicStyleBook = self.load_config(COMIC_STYLES_FILE)?;
        Ok(book.styles)
    }

    fn load_rotation(&self) -> Result<RotationState, AppError> {
        self.load_or_default(&self.state_path("state.json"))
    }

    fn save_rotation(&self, state: &RotationState) -> Result<(), AppError> {
        write_json(&self.state_path("state.json"), state)
    }

    fn load_history(&self) -> Result<History, AppError> {
        self.load_or_default(&self.state_path("post_history.json"))
    }

    fn save_history(&self, history: &History) -> Result<(), AppError> {
        write_json(&self.state_path("post_history.json"), history)
    }

    fn load_shorten_cache(&self) -> Result<BTreeMap<String, String>, AppError> {
        self.load_or_default(&self.cache_path("shortened_urls.json"))
    }

    fn save_shorten_cache(&self, cache: &BTreeMap<String, String>) -> Result<(), AppError> {
        write_json(&self.cache_path("shortened_urls.json"), cache)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::config_error(format!("Malformed JSON in {}: {e}", path.display()))
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    write_file(path, &content)
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
