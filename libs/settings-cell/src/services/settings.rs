// libs/settings-cell/src/services/settings.rs
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, info, warn};

use shared_database::KeyValueStore;

use crate::models::{SettingsError, SettingsUpdate, ShopSettings};

pub const SETTINGS_KEY: &str = "barberShopSettings";

const HEX_COLOR_PATTERN: &str = r"^#[0-9a-fA-F]{6}$";

/// Persists the settings document under [`SETTINGS_KEY`].
pub struct SettingsService {
    store: Arc<dyn KeyValueStore>,
    hex_color: Regex,
}

impl SettingsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self, SettingsError> {
        let hex_color = Regex::new(HEX_COLOR_PATTERN)
            .map_err(|e| SettingsError::ValidationError(format!("Invalid color pattern: {}", e)))?;

        Ok(Self { store, hex_color })
    }

    /// Stored settings, or the defaults when nothing usable is stored.
    /// A malformed blob is left in place until the next save overwrites it.
    pub fn load(&self) -> ShopSettings {
        debug!("Loading shop settings");

        let raw = match self.store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored settings, using defaults");
                return ShopSettings::default();
            }
            Err(e) => {
                warn!("Failed to read stored settings, using defaults: {:#}", e);
                return ShopSettings::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Discarding malformed stored settings: {}", e);
                ShopSettings::default()
            }
        }
    }

    /// Writes the document as-is.
    pub fn save(&self, settings: &ShopSettings) -> Result<(), SettingsError> {
        let raw = serde_json::to_string(settings)
            .map_err(|e| SettingsError::StorageError(e.to_string()))?;

        self.store
            .set(SETTINGS_KEY, &raw)
            .map_err(|e| SettingsError::StorageError(format!("{:#}", e)))?;

        info!("Shop settings saved");
        Ok(())
    }

    /// Shallow merge of the provided sections over the current settings, then save.
    pub fn update(&self, update: SettingsUpdate) -> Result<ShopSettings, SettingsError> {
        debug!("Updating shop settings");

        if let Some(appearance) = &update.appearance {
            if !self.hex_color.is_match(&appearance.primary_color) {
                warn!("Rejected primary color {}", appearance.primary_color);
                return Err(SettingsError::ValidationError(
                    "Primary color must be a hex value like #f97316".to_string(),
                ));
            }
        }

        let settings = update.apply_to(self.load());
        self.save(&settings)?;

        Ok(settings)
    }

    pub fn reset(&self) -> Result<ShopSettings, SettingsError> {
        let defaults = ShopSettings::default();
        self.save(&defaults)?;
        info!("Shop settings reset to defaults");
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_database::MemoryStore;

    fn service() -> (Arc<MemoryStore>, SettingsService) {
        let store = Arc::new(MemoryStore::new());
        let service = SettingsService::new(store.clone()).unwrap();
        (store, service)
    }

    #[test]
    fn test_absent_settings_yield_defaults() {
        let (_, service) = service();
        assert_eq!(service.load(), ShopSettings::default());
    }

    #[test]
    fn test_corrupt_blob_yields_defaults_then_is_overwritten() {
        let (store, service) = service();
        store.set(SETTINGS_KEY, "{not json").unwrap();

        assert_eq!(service.load(), ShopSettings::default());

        service.save(&ShopSettings::default()).unwrap();
        let raw = store.get(SETTINGS_KEY).unwrap().unwrap();
        assert!(raw.starts_with('{'));
        assert!(serde_json::from_str::<ShopSettings>(&raw).is_ok());
    }

    #[test]
    fn test_partial_document_is_treated_as_malformed() {
        let (store, service) = service();
        store.set(SETTINGS_KEY, r#"{"shopName":"Only a name"}"#).unwrap();

        assert_eq!(service.load(), ShopSettings::default());
    }
}
