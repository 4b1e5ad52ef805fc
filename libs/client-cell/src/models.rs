// libs/client-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use shared_database::{Entity, StorageError};
use shared_models::error::AppError;

// ==============================================================================
// CORE CLIENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub last_visit: LastVisit,
    pub total_visits: u32,
    pub total_spent: f64,
}

impl Entity for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Date of the most recent visit, or the "Never" sentinel for new clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LastVisit {
    Never,
    On(NaiveDate),
}

impl fmt::Display for LastVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastVisit::Never => write!(f, "Never"),
            LastVisit::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl From<LastVisit> for String {
    fn from(value: LastVisit) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for LastVisit {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("never") {
            return Ok(LastVisit::Never);
        }
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map(LastVisit::On)
            .map_err(|_| format!("Invalid last visit value: {}", value))
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl CreateClientRequest {
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_identity(&self.name, &self.email)
    }
}

/// Full edit draft; every field is written back on commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UpdateClientRequest {
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_identity(&self.name, &self.email)
    }
}

impl From<&Client> for UpdateClientRequest {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
        }
    }
}

fn validate_identity(name: &str, email: &str) -> Result<(), ClientError> {
    if name.trim().is_empty() {
        return Err(ClientError::ValidationError("Client name is required".to_string()));
    }
    if email.trim().is_empty() {
        return Err(ClientError::ValidationError("Email is required".to_string()));
    }
    Ok(())
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Client not found")]
    NotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for ClientError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => ClientError::NotFound,
            other => ClientError::StorageError(other.to_string()),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound => AppError::NotFound("Client not found".to_string()),
            ClientError::ValidationError(msg) => AppError::ValidationError(msg),
            ClientError::StorageError(msg) => AppError::Storage(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_visit_serialization() {
        assert_eq!(serde_json::to_string(&LastVisit::Never).unwrap(), "\"Never\"");

        let visit = LastVisit::On(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        let json = serde_json::to_string(&visit).unwrap();
        assert_eq!(json, "\"2023-06-15\"");
        assert_eq!(serde_json::from_str::<LastVisit>(&json).unwrap(), visit);

        assert!(serde_json::from_str::<LastVisit>("\"yesterday\"").is_err());
    }

    #[test]
    fn test_client_uses_camel_case_fields() {
        let client = Client {
            id: Uuid::nil(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            last_visit: LastVisit::Never,
            total_visits: 0,
            total_spent: 0.0,
        };

        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["lastVisit"], "Never");
        assert_eq!(value["totalVisits"], 0);
        assert!(value.get("total_spent").is_none());
    }

    #[test]
    fn test_create_request_validation() {
        let missing_name = CreateClientRequest {
            name: "   ".to_string(),
            email: "a@b.c".to_string(),
            phone: None,
        };
        assert_eq!(
            missing_name.validate(),
            Err(ClientError::ValidationError("Client name is required".to_string()))
        );

        let missing_email = CreateClientRequest {
            name: "Ann".to_string(),
            email: String::new(),
            phone: None,
        };
        assert_eq!(
            missing_email.validate(),
            Err(ClientError::ValidationError("Email is required".to_string()))
        );

        // Email format is not checked.
        let loose_email = CreateClientRequest {
            name: "Ann".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
        };
        assert!(loose_email.validate().is_ok());
    }
}
