// libs/catalog-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use shared_database::{Entity, StorageError};
use shared_models::display::{BadgeVariant, SelectOption};
use shared_models::error::AppError;

pub const DEFAULT_DURATION_MINUTES: u32 = 30;
pub const DEFAULT_PRICE: f64 = 25.0;

// ==============================================================================
// CORE SERVICE MODELS
// ==============================================================================

/// A bookable offering on the shop menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Minutes, always positive.
    pub duration: u32,
    pub price: f64,
    pub category: ServiceCategory,
}

impl Entity for Service {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    #[default]
    Haircut,
    Beard,
    Styling,
    Color,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Haircut,
        ServiceCategory::Beard,
        ServiceCategory::Styling,
        ServiceCategory::Color,
        ServiceCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Haircut => "Haircut",
            ServiceCategory::Beard => "Beard",
            ServiceCategory::Styling => "Styling",
            ServiceCategory::Color => "Color",
            ServiceCategory::Other => "Other",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            ServiceCategory::Haircut => BadgeVariant::Info,
            ServiceCategory::Beard => BadgeVariant::Success,
            ServiceCategory::Styling => BadgeVariant::Warning,
            ServiceCategory::Color => BadgeVariant::Error,
            ServiceCategory::Other => BadgeVariant::Default,
        }
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|category| SelectOption::new(category.to_string(), category.label()))
            .collect()
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceCategory::Haircut => write!(f, "haircut"),
            ServiceCategory::Beard => write!(f, "beard"),
            ServiceCategory::Styling => write!(f, "styling"),
            ServiceCategory::Color => write!(f, "color"),
            ServiceCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "haircut" => Ok(ServiceCategory::Haircut),
            "beard" => Ok(ServiceCategory::Beard),
            "styling" => Ok(ServiceCategory::Styling),
            "color" => Ok(ServiceCategory::Color),
            "other" => Ok(ServiceCategory::Other),
            other => Err(CatalogError::ValidationError(format!("Unknown category: {}", other))),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub price: Option<f64>,
    pub category: Option<ServiceCategory>,
}

impl ServiceDraft {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::ValidationError("Service name is required".to_string()));
        }
        if self.duration == Some(0) {
            return Err(CatalogError::ValidationError(
                "Duration must be greater than zero".to_string(),
            ));
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::ValidationError("Price cannot be negative".to_string()));
            }
        }
        Ok(())
    }

    pub fn into_service(self, id: Uuid) -> Service {
        Service {
            id,
            name: self.name.trim().to_string(),
            description: self.description.unwrap_or_default(),
            duration: self.duration.unwrap_or(DEFAULT_DURATION_MINUTES),
            price: self.price.unwrap_or(DEFAULT_PRICE),
            category: self.category.unwrap_or_default(),
        }
    }
}

impl From<&Service> for ServiceDraft {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: Some(service.description.clone()),
            duration: Some(service.duration),
            price: Some(service.price),
            category: Some(service.category),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Service not found")]
    NotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => CatalogError::NotFound,
            other => CatalogError::StorageError(other.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => AppError::NotFound("Service not found".to_string()),
            CatalogError::ValidationError(msg) => AppError::ValidationError(msg),
            CatalogError::StorageError(msg) => AppError::Storage(msg),
        }
    }
}
