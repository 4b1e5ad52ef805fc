// libs/settings-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_models::error::AppError;

// ==============================================================================
// CORE SETTINGS MODELS
// ==============================================================================

/// The whole settings document, stored verbatim as one JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    pub shop_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub opening_hours: OpeningHours,
    pub social_media: SocialMedia,
    pub notifications: NotificationSettings,
    pub appearance: Appearance,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            shop_name: "Classic Barber Shop".to_string(),
            address: "123 Main Street, City, State 12345".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "contact@barber.com".to_string(),
            website: "www.classicbarbershop.com".to_string(),
            opening_hours: OpeningHours::default(),
            social_media: SocialMedia::default(),
            notifications: NotificationSettings::default(),
            appearance: Appearance::default(),
        }
    }
}

/// Free-form hours per weekday, e.g. "9:00 AM - 7:00 PM" or "Closed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl OpeningHours {
    /// Monday first.
    pub fn days(&self) -> [(&'static str, &str); 7] {
        [
            ("Monday", self.monday.as_str()),
            ("Tuesday", self.tuesday.as_str()),
            ("Wednesday", self.wednesday.as_str()),
            ("Thursday", self.thursday.as_str()),
            ("Friday", self.friday.as_str()),
            ("Saturday", self.saturday.as_str()),
            ("Sunday", self.sunday.as_str()),
        ]
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        let weekday = "9:00 AM - 7:00 PM".to_string();
        Self {
            monday: weekday.clone(),
            tuesday: weekday.clone(),
            wednesday: weekday.clone(),
            thursday: weekday,
            friday: "9:00 AM - 8:00 PM".to_string(),
            saturday: "10:00 AM - 6:00 PM".to_string(),
            sunday: "Closed".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

impl Default for SocialMedia {
    fn default() -> Self {
        Self {
            facebook: "facebook.com/classicbarbershop".to_string(),
            instagram: "instagram.com/classicbarbershop".to_string(),
            twitter: "twitter.com/classicbarber".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_reminders: bool,
    pub sms_reminders: bool,
    pub appointment_confirmation: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_reminders: true,
            sms_reminders: true,
            appointment_confirmation: true,
            marketing_emails: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub theme: Theme,
    /// `#rrggbb`.
    pub primary_color: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            primary_color: "#f97316".to_string(),
        }
    }
}

impl Appearance {
    /// `system` follows the host preference.
    pub fn resolved_theme(&self, prefers_dark: bool) -> Theme {
        match self.theme {
            Theme::System if prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            theme => theme,
        }
    }

    pub fn primary_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.primary_color.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Theme class plus CSS custom properties for the current appearance.
    /// Properties derived from the RGB triple are left out when the color
    /// is not a valid hex value.
    pub fn theme_variables(&self, prefers_dark: bool) -> ThemeVariables {
        let mut properties = vec![
            ("--primary-color".to_string(), self.primary_color.clone()),
            ("--orange-500".to_string(), self.primary_color.clone()),
            ("--orange-600".to_string(), self.primary_color.clone()),
        ];

        if let Some((r, g, b)) = self.primary_rgb() {
            properties.push(("--primary-rgb".to_string(), format!("{}, {}, {}", r, g, b)));
            properties.push(("--orange-700".to_string(), format!("rgba({}, {}, {}, 0.9)", r, g, b)));
        }

        ThemeVariables {
            theme_class: format!("theme-{}", self.resolved_theme(prefers_dark)),
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariables {
    pub theme_class: String,
    pub properties: Vec<(String, String)>,
}

impl ThemeVariables {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Top-level sections to replace. Sections left as `None` keep their value;
/// provided sections replace the stored one whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub shop_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub social_media: Option<SocialMedia>,
    pub notifications: Option<NotificationSettings>,
    pub appearance: Option<Appearance>,
}

impl SettingsUpdate {
    pub fn apply_to(self, mut settings: ShopSettings) -> ShopSettings {
        if let Some(shop_name) = self.shop_name {
            settings.shop_name = shop_name;
        }
        if let Some(address) = self.address {
            settings.address = address;
        }
        if let Some(phone) = self.phone {
            settings.phone = phone;
        }
        if let Some(email) = self.email {
            settings.email = email;
        }
        if let Some(website) = self.website {
            settings.website = website;
        }
        if let Some(opening_hours) = self.opening_hours {
            settings.opening_hours = opening_hours;
        }
        if let Some(social_media) = self.social_media {
            settings.social_media = social_media;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
        if let Some(appearance) = self.appearance {
            settings.appearance = appearance;
        }
        settings
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::ValidationError(msg) => AppError::ValidationError(msg),
            SettingsError::StorageError(msg) => AppError::Storage(msg),
        }
    }
}
