use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService;

impl SettingsService {
    /// `settings.toml` in the platform config directory, if one exists for
    /// this user.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ics-year-planner")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                Some(path) => {
                    log::debug!("No settings at {:?}, using defaults", path);
                    Ok(Settings::default())
                }
                None => Ok(Settings::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        let settings = Settings::from_toml_str(&content).with_context(|| format!("Invalid settings file: {:?}", path))?;

        log::info!(
            "Loaded settings from {:?} ({} replacement rules, zone {})",
            path,
            settings.replacements.len(),
            settings.time_zone
        );
        Ok(settings)
    }
}
