//! Player preferences
//!
//! Persisted in LocalStorage on the web. Only preferences live here; the
//! game keeps no scores between sessions.

use serde::{Deserialize, Serialize};

use crate::assets::Character;
use crate::sim::SpawnPolicy;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tick rate; overrides `tuning.fps`
    pub fps: u32,
    /// How obstacles appear for the whole session
    pub spawn_policy: SpawnPolicy,
    /// Preselected on the next visit
    pub last_character: Option<Character>,
    /// Fixed RNG seed; the clock is used when absent
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        let tuning = Tuning::default();
        Self {
            fps: tuning.fps,
            spawn_policy: SpawnPolicy::default(),
            last_character: None,
            seed: None,
            tuning,
        }
    }
}

impl Settings {
    /// Tuning with the preferred frame rate applied, falling back to
    /// defaults if the stored values don't validate
    pub fn resolved_tuning(&self) -> Tuning {
        let tuning = Tuning {
            fps: self.fps,
            ..self.tuning.clone()
        };
        match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Stored tuning rejected ({}), using defaults", e);
                Tuning::default()
            }
        }
    }

    /// Configured seed, or `now_ms` truncated when none is set
    pub fn seed_or(&self, now_ms: f64) -> u64 {
        self.seed.unwrap_or(now_ms as u64)
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "flappy_canvas_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("Settings not persisted natively ({})", Self::STORAGE_KEY);
    }
}
