pub mod settings;

pub use settings::{SettingsService, SETTINGS_KEY};
