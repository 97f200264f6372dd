use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::ui::settings::UiSettings;

/// `<config dir>/travel_cocreator/ui_settings.json`, or the working
/// directory when the platform has no config dir.
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("travel_cocreator")
        .join("ui_settings.json")
}

pub fn load_settings() -> UiSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    save_settings_to(&settings_path(), settings);
}

/// Unreadable or malformed files fall back to defaults.
pub fn load_settings_from(path: &Path) -> UiSettings {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no saved ui settings");
            return UiSettings::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring malformed ui settings");
        UiSettings::default()
    })
}

pub fn save_settings_to(path: &Path, settings: &UiSettings) {
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            warn!(path = %dir.display(), error = %e, "cannot create settings directory");
            return;
        }
    }

    let result = serde_json::to_string_pretty(settings)
        .map_err(|e| e.to_string())
        .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));

    if let Err(e) = result {
        warn!(path = %path.display(), error = %e, "failed to save ui settings");
    }
}
