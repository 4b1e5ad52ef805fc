// libs/staff-cell/src/models.rs
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use shared_database::{Entity, StorageError};
use shared_models::display::{BadgeVariant, SelectOption};
use shared_models::error::AppError;

// ==============================================================================
// CORE STAFF MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    pub email: String,
    pub phone: String,
    pub hire_date: NaiveDate,
    pub bio: String,
    pub image: String,
}

impl Staff {
    /// Upper-cased first letter of each name part, e.g. "Mike Smith" -> "MS".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// "Name (position)" as shown in staff pickers.
    pub fn picker_label(&self) -> String {
        format!("{} ({})", self.name, self.position)
    }
}

impl Entity for Staff {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Barber,
    Stylist,
    Assistant,
    Manager,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Barber,
        Position::Stylist,
        Position::Assistant,
        Position::Manager,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Barber => "Barber",
            Position::Stylist => "Stylist",
            Position::Assistant => "Assistant",
            Position::Manager => "Manager",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Position::Barber => BadgeVariant::Info,
            Position::Stylist => BadgeVariant::Warning,
            Position::Assistant => BadgeVariant::Success,
            Position::Manager => BadgeVariant::Error,
        }
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|position| SelectOption::new(position.to_string(), position.label()))
            .collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Barber => write!(f, "barber"),
            Position::Stylist => write!(f, "stylist"),
            Position::Assistant => write!(f, "assistant"),
            Position::Manager => write!(f, "manager"),
        }
    }
}

impl FromStr for Position {
    type Err = StaffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "barber" => Ok(Position::Barber),
            "stylist" => Ok(Position::Stylist),
            "assistant" => Ok(Position::Assistant),
            "manager" => Ok(Position::Manager),
            other => Err(StaffError::ValidationError(format!("Unknown position: {}", other))),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Add/edit form for a staff member. Only name and email are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffDraft {
    pub name: String,
    pub position: Option<Position>,
    pub email: String,
    pub phone: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl StaffDraft {
    pub fn validate(&self) -> Result<(), StaffError> {
        if self.name.trim().is_empty() {
            return Err(StaffError::ValidationError("Staff name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(StaffError::ValidationError("Email is required".to_string()));
        }
        Ok(())
    }

    /// Applies defaults: barber, hired today, empty optional text.
    pub fn into_staff(self, id: Uuid) -> Staff {
        Staff {
            id,
            name: self.name.trim().to_string(),
            position: self.position.unwrap_or_default(),
            email: self.email.trim().to_string(),
            phone: self.phone.unwrap_or_default(),
            hire_date: self.hire_date.unwrap_or_else(|| Utc::now().date_naive()),
            bio: self.bio.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        }
    }
}

impl From<&Staff> for StaffDraft {
    fn from(staff: &Staff) -> Self {
        Self {
            name: staff.name.clone(),
            position: Some(staff.position),
            email: staff.email.clone(),
            phone: Some(staff.phone.clone()),
            hire_date: Some(staff.hire_date),
            bio: Some(staff.bio.clone()),
            image: Some(staff.image.clone()),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StaffError {
    #[error("Staff member not found")]
    NotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for StaffError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => StaffError::NotFound,
            other => StaffError::StorageError(other.to_string()),
        }
    }
}

impl From<StaffError> for AppError {
    fn from(err: StaffError) -> Self {
        match err {
            StaffError::NotFound => AppError::NotFound("Staff member not found".to_string()),
            StaffError::ValidationError(msg) => AppError::ValidationError(msg),
            StaffError::StorageError(msg) => AppError::Storage(msg),
        }
    }
}
