//! User settings store.
//!
//! A flat string-to-string map persisted as a single JSON object. The file is
//! created with one default entry on first run, rewritten wholesale on every
//! save, and a malformed file is treated as an empty settings set.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Error;

/// Background color of the navigation bar.
pub const NAVIGATION_COLOR: &str = "NavigationColor";
/// Background color of the alert ticker.
pub const ALERT_BAR_COLOR: &str = "AlertBarColor";
/// Font face used by the alert ticker.
pub const ALERT_BAR_FONT_FACE: &str = "AlertBarFontFace";
/// Horizontal scale factor for the alert ticker text.
pub const ALERT_BAR_SCALE_X: &str = "AlertBarScaleX";
/// Vertical scale factor for the alert ticker text.
pub const ALERT_BAR_SCALE_Y: &str = "AlertBarScaleY";

const DEFAULT_NAVIGATION_COLOR: &str = "#2D2D30";

/// Process-wide user settings, keyed by name.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl SettingsStore {
    /// Load settings from `path`, creating the file with defaults when absent.
    ///
    /// A malformed file yields an empty settings set rather than an error.
    pub fn load_or_create(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        if !path.exists() {
            let mut values = HashMap::new();
            values.insert(NAVIGATION_COLOR.to_string(), DEFAULT_NAVIGATION_COLOR.to_string());
            let store = Self { path, values };
            store.save()?;
            return Ok(store);
        }

        let raw = fs::read_to_string(&path)?;
        let values = match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("malformed settings file {}: {}", path.display(), e);
                HashMap::new()
            }
        };

        Ok(Self { path, values })
    }

    /// Persist the full map, overwriting the file.
    pub fn save(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
