use std::sync::Arc;
use chrono::NaiveDate;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::User;

pub struct TestConfig {
    pub data_dir: String,
    pub admin_email: String,
    pub admin_password: String,
    pub strict_status_transitions: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            admin_email: "admin@barber.com".to_string(),
            admin_password: "admin123".to_string(),
            strict_status_transitions: false,
        }
    }
}

impl TestConfig {
    pub fn with_data_dir(dir: &std::path::Path) -> Self {
        Self {
            data_dir: dir.display().to_string(),
            ..Self::default()
        }
    }

    pub fn strict() -> Self {
        Self {
            strict_status_transitions: true,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            data_dir: self.data_dir.clone(),
            admin_email: self.admin_email.clone(),
            admin_password: self.admin_password.clone(),
            strict_status_transitions: self.strict_status_transitions,
            seed_demo_data: false,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role: "staff".to_string(),
        }
    }
}

impl TestUser {
    pub fn new(email: &str, role: &str) -> Self {
        Self {
            email: email.to_string(),
            role: role.to_string(),
            ..Self::default()
        }
    }

    pub fn admin(email: &str) -> Self {
        Self::new(email, "admin")
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Shorthand for fixture dates; panics on an invalid literal.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("fixture date must be YYYY-MM-DD")
}
