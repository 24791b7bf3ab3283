// Settings module
// File-backed settings and the validated renderer configuration

use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::replacement::{ReplacementRule, ReplacementTable};

pub const DEFAULT_TIME_ZONE: &str = "Europe/Berlin";

/// Settings as stored in `settings.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// IANA zone that UTC event starts are converted into.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Event name substitutions, applied top to bottom.
    #[serde(default)]
    pub replacements: Vec<ReplacementRule>,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            replacements: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate into the configuration the renderer is constructed with
    pub fn into_renderer_config(self) -> Result<RendererConfig, ConfigError> {
        let time_zone = Tz::from_str(self.time_zone.trim())
            .map_err(|_| ConfigError::UnknownTimeZone(self.time_zone.clone()))?;
        let replacements = ReplacementTable::new(self.replacements)?;

        Ok(RendererConfig {
            time_zone,
            replacements,
            collision_policy: CollisionPolicy::default(),
        })
    }
}

/// What happens when several events land on the same civil date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Keep the first event in calendar order, then event order. Later
    /// same-day events are not shown anywhere in the grid.
    #[default]
    FirstMatch,
}

/// Everything a render needs besides its input data.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    pub time_zone: Tz,
    pub replacements: ReplacementTable,
    pub collision_policy: CollisionPolicy,
}

impl RendererConfig {
    pub fn new(time_zone: Tz, replacements: ReplacementTable) -> Self {
        Self {
            time_zone,
            replacements,
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::Berlin, ReplacementTable::empty())
    }
}
