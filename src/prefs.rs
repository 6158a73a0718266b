//! Preference store for the last-used tone
//!
//! A small TOML file in the data directory, keyed by `last_used_tone`.
//! Storage trouble is never fatal: load falls back to the default tone,
//! save logs and moves on.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::tone::Tone;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    last_used_tone: Option<String>,
}

pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Open the store at the default location under the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: Config::data_dir()?.join("prefs.toml"),
        })
    }

    /// Open the store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the last-used tone. Returns the default tone when the file is
    /// missing, unreadable, or stores an id outside the current tone set.
    pub fn load_tone(&self) -> Tone {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Tone::default();
        };

        let prefs: Preferences = match toml::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Ignoring unparsable preferences file: {}", e);
                return Tone::default();
            }
        };

        prefs
            .last_used_tone
            .as_deref()
            .and_then(Tone::from_id)
            .unwrap_or_default()
    }

    /// Persist the tone. Best-effort: failures are logged, never surfaced.
    pub fn save_tone(&self, tone: Tone) {
        if let Err(e) = self.write_tone(tone) {
            tracing::warn!("Failed to save tone preference: {}", e);
        }
    }

    fn write_tone(&self, tone: Tone) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let prefs = Preferences {
            last_used_tone: Some(tone.id().to_string()),
        };
        fs::write(&self.path, toml::to_string_pretty(&prefs)?)?;
        Ok(())
    }
}
