//! Runtime settings persisted to localStorage.
//!
//! Currently just the UI locale, stored as a small versioned JSON blob.
//! Load is tolerant: a missing, garbled, or wrong-version stored value
//! falls back to the default locale.

use appdeck_core::i18n::{set_locale, Locale};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
const SETTINGS_STORAGE_KEY: &str = "appdeck_settings";

/// Settings persisted to localStorage between sessions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    /// Selected UI locale
    pub locale: Locale,
    /// Schema version for future migrations
    version: u32,
}

impl PersistedSettings {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            version: Self::CURRENT_VERSION,
        }
    }
}

/// Load settings from localStorage.
/// Returns None if nothing is stored, parsing fails, or storage is
/// unavailable.
fn load_settings_from_storage() -> Option<PersistedSettings> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        let json = storage.get_item(SETTINGS_STORAGE_KEY).ok()??;

        match serde_json::from_str::<PersistedSettings>(&json) {
            Ok(settings) => {
                // Only accept current version (future: add migration logic)
                if settings.version == PersistedSettings::CURRENT_VERSION {
                    Some(settings)
                } else {
                    log::warn!(
                        "Ignoring stored settings with version {} (current: {})",
                        settings.version,
                        PersistedSettings::CURRENT_VERSION
                    );
                    None
                }
            }
            Err(e) => {
                log::warn!("Failed to parse stored settings: {}", e);
                None
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Save settings to localStorage. Best-effort, warns on failure.
fn save_settings_to_storage(settings: &PersistedSettings) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return;
        };

        match serde_json::to_string(settings) {
            Ok(json) => {
                if let Err(e) = storage.set_item(SETTINGS_STORAGE_KEY, &json) {
                    log::warn!("Failed to save settings to localStorage: {:?}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = settings;
    }
}

/// Initialize the active locale from localStorage, if settings were stored.
pub fn init_locale() {
    if let Some(settings) = load_settings_from_storage() {
        log::info!("Loaded locale {} from localStorage", settings.locale.as_str());
        set_locale(settings.locale);
    }
}

/// Set the active locale and persist the choice.
#[allow(dead_code)]
pub fn set_locale_setting(locale: Locale) {
    set_locale(locale);
    save_settings_to_storage(&PersistedSettings::new(locale));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_without_browser_storage_falls_back_to_none() {
        // Native builds have no localStorage; load must not panic.
        assert_eq!(load_settings_from_storage(), None);
    }

    #[test]
    fn settings_roundtrip_uses_locale_labels() {
        let settings = PersistedSettings::new(Locale::ZhHans);
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"zh-Hans\""));

        let back: PersistedSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn default_locale_serializes_as_en() {
        let json = serde_json::to_string(&PersistedSettings::new(Locale::En)).unwrap();
        assert!(json.contains("\"en\""));
    }

    #[test]
    fn unknown_locale_label_is_rejected() {
        let result = serde_json::from_str::<PersistedSettings>(r#"{"locale":"fr","version":1}"#);
        assert!(result.is_err());
    }
}
