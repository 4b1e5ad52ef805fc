use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@barber.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory backing the key-value store. Empty means in-memory only.
    pub data_dir: String,
    pub admin_email: String,
    pub admin_password: String,
    pub strict_status_transitions: bool,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            strict_status_transitions: false,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            data_dir: env::var("BARBER_DATA_DIR")
                .unwrap_or_else(|_| {
                    warn!("BARBER_DATA_DIR not set, settings and session stay in memory");
                    defaults.data_dir.clone()
                }),
            admin_email: env::var("BARBER_ADMIN_EMAIL")
                .unwrap_or_else(|_| {
                    warn!("BARBER_ADMIN_EMAIL not set, using default");
                    defaults.admin_email.clone()
                }),
            admin_password: env::var("BARBER_ADMIN_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("BARBER_ADMIN_PASSWORD not set, using default");
                    defaults.admin_password.clone()
                }),
            strict_status_transitions: read_flag(
                "BARBER_STRICT_STATUS_TRANSITIONS",
                defaults.strict_status_transitions,
            ),
            seed_demo_data: read_flag("BARBER_SEED_DEMO_DATA", defaults.seed_demo_data),
        };

        if !config.is_persistent() {
            warn!("No data directory configured - settings will not survive a restart");
        }

        config
    }

    pub fn is_persistent(&self) -> bool {
        !self.data_dir.trim().is_empty()
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        if self.is_persistent() {
            Some(PathBuf::from(self.data_dir.trim()))
        } else {
            None
        }
    }
}

fn read_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => match parse_flag(&value) {
            Some(flag) => flag,
            None => {
                warn!("{} has unrecognised value {:?}, using default {}", name, value, default);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_default_config_is_in_memory() {
        let config = AppConfig::default();
        assert!(!config.is_persistent());
        assert!(config.data_path().is_none());
        assert_eq!(config.admin_email, "admin@barber.com");
        assert!(!config.strict_status_transitions);
    }

    #[test]
    fn test_data_path_trims_whitespace() {
        let config = AppConfig {
            data_dir: " /tmp/barber ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.data_path(), Some(PathBuf::from("/tmp/barber")));
    }
}
