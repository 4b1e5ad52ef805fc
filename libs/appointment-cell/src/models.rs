// libs/appointment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use catalog_cell::models::Service;
use client_cell::models::Client;
use shared_database::{Entity, StorageError};
use shared_models::display::{BadgeVariant, SelectOption};
use shared_models::error::AppError;
use shared_utils::ALL;
use staff_cell::models::Staff;

/// Duration and price shown in the booking form before a service is picked.
pub const UNSELECTED_DURATION_MINUTES: u32 = 30;
pub const UNSELECTED_PRICE: f64 = 0.0;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked visit. Client, service and staff are stored as name snapshots taken at
/// booking time; the optional ids point back at the live records when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Uuid>,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<Uuid>,
    pub date: NaiveDate,
    /// Display time such as "10:00 AM".
    pub time: String,
    pub duration: u32,
    pub status: AppointmentStatus,
    pub staff_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<Uuid>,
    pub price: f64,
}

impl Appointment {
    pub fn is_completed(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }
}

impl Entity for Appointment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
        AppointmentStatus::NoShow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::NoShow => "No Show",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            AppointmentStatus::Confirmed => BadgeVariant::Success,
            AppointmentStatus::Cancelled => BadgeVariant::Error,
            AppointmentStatus::Completed => BadgeVariant::Info,
            AppointmentStatus::NoShow => BadgeVariant::Warning,
        }
    }

    /// Cancelled, completed and no-show close out a visit.
    pub fn is_closed(&self) -> bool {
        !matches!(self, AppointmentStatus::Confirmed)
    }

    /// Options for the edit form.
    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|status| SelectOption::new(status.to_string(), status.label()))
            .collect()
    }

    /// Options for the list filter, "All Statuses" first.
    pub fn filter_options() -> Vec<SelectOption> {
        std::iter::once(SelectOption::new(ALL, "All Statuses"))
            .chain(Self::options())
            .collect()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::NoShow => write!(f, "no-show"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            "no-show" | "no_show" => Ok(AppointmentStatus::NoShow),
            other => Err(AppointmentError::ValidationError(format!("Unknown status: {}", other))),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// State of the add-appointment form.
///
/// Duration and price are never typed in directly; they follow the selected
/// service through [`AppointmentDraft::select_service`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub client_name: String,
    pub client_id: Option<Uuid>,
    pub service: String,
    pub service_id: Option<Uuid>,
    /// `YYYY-MM-DD` as entered.
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub price: f64,
    pub staff_name: String,
    pub staff_id: Option<Uuid>,
}

impl Default for AppointmentDraft {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            client_id: None,
            service: String::new(),
            service_id: None,
            date: String::new(),
            time: String::new(),
            duration: UNSELECTED_DURATION_MINUTES,
            price: UNSELECTED_PRICE,
            staff_name: String::new(),
            staff_id: None,
        }
    }
}

impl AppointmentDraft {
    pub fn select_client(&mut self, client: &Client) {
        self.client_name = client.name.clone();
        self.client_id = Some(client.id);
    }

    /// Switches the selected service and always drops the chosen staff member,
    /// since eligibility depends on the service.
    pub fn select_service(&mut self, service: Option<&Service>) {
        match service {
            Some(service) => {
                self.service = service.name.clone();
                self.service_id = Some(service.id);
                self.duration = service.duration;
                self.price = service.price;
            }
            None => {
                self.service.clear();
                self.service_id = None;
                self.duration = UNSELECTED_DURATION_MINUTES;
                self.price = UNSELECTED_PRICE;
            }
        }
        self.clear_staff();
    }

    pub fn select_staff(&mut self, staff: &Staff) {
        self.staff_name = staff.name.clone();
        self.staff_id = Some(staff.id);
    }

    pub fn clear_staff(&mut self) {
        self.staff_name.clear();
        self.staff_id = None;
    }

    pub fn validate(&self) -> Result<(), AppointmentError> {
        let required = [
            &self.client_name,
            &self.service,
            &self.date,
            &self.time,
            &self.staff_name,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(AppointmentError::ValidationError(
                "Please fill all required fields.".to_string(),
            ));
        }
        parse_date(&self.date)?;
        Ok(())
    }
}

/// The edit form. Every field is editable and the full record is committed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub service: String,
    pub service_id: Option<Uuid>,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub staff_name: String,
    pub staff_id: Option<Uuid>,
    pub price: f64,
    pub status: AppointmentStatus,
}

impl UpdateAppointmentRequest {
    pub fn validate(&self) -> Result<(), AppointmentError> {
        if self.service.trim().is_empty() {
            return Err(AppointmentError::ValidationError("Service is required".to_string()));
        }
        if self.date.trim().is_empty() {
            return Err(AppointmentError::ValidationError("Date is required".to_string()));
        }
        if self.time.trim().is_empty() {
            return Err(AppointmentError::ValidationError("Time is required".to_string()));
        }
        if self.staff_name.trim().is_empty() {
            return Err(AppointmentError::ValidationError(
                "Staff member is required".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppointmentError::ValidationError("Price cannot be negative".to_string()));
        }
        parse_date(&self.date)?;
        Ok(())
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }
}

impl From<&Appointment> for UpdateAppointmentRequest {
    fn from(appointment: &Appointment) -> Self {
        Self {
            service: appointment.service.clone(),
            service_id: appointment.service_id,
            date: appointment.date.format(DATE_FORMAT).to_string(),
            time: appointment.time.clone(),
            duration: appointment.duration,
            staff_name: appointment.staff_name.clone(),
            staff_id: appointment.staff_id,
            price: appointment.price,
            status: appointment.status,
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, AppointmentError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AppointmentError::ValidationError(format!("Invalid date: {}", value)))
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("{staff} cannot perform {service}")]
    IneligibleStaff { staff: String, service: String },

    #[error("Appointment status cannot change from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for AppointmentError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => AppointmentError::NotFound,
            other => AppointmentError::StorageError(other.to_string()),
        }
    }
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            err @ AppointmentError::IneligibleStaff { .. } => AppError::ValidationError(err.to_string()),
            err @ AppointmentError::InvalidStatusTransition { .. } => {
                AppError::ValidationError(err.to_string())
            }
            AppointmentError::StorageError(msg) => AppError::Storage(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_cell::demo::demo_services;

    fn filled_draft() -> AppointmentDraft {
        AppointmentDraft {
            client_name: "Alice".to_string(),
            service: "Haircut".to_string(),
            date: "2024-01-05".to_string(),
            time: "9:00 AM".to_string(),
            staff_name: "Mike Smith".to_string(),
            ..AppointmentDraft::default()
        }
    }

    #[test]
    fn test_status_lookup_tables() {
        assert_eq!(AppointmentStatus::Confirmed.badge_variant(), BadgeVariant::Success);
        assert_eq!(AppointmentStatus::Cancelled.badge_variant(), BadgeVariant::Error);
        assert_eq!(AppointmentStatus::Completed.badge_variant(), BadgeVariant::Info);
        assert_eq!(AppointmentStatus::NoShow.badge_variant(), BadgeVariant::Warning);
        assert_eq!(AppointmentStatus::NoShow.label(), "No Show");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
        assert_eq!(json, "\"no-show\"");
        assert_eq!("no-show".parse::<AppointmentStatus>().unwrap(), AppointmentStatus::NoShow);
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = AppointmentStatus::filter_options();
        assert_eq!(options[0], SelectOption::new("all", "All Statuses"));
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn test_select_service_copies_snapshot_and_clears_staff() {
        let services = demo_services();
        let mut draft = filled_draft();

        draft.select_service(Some(&services[4]));
        assert_eq!(draft.service, "Hair Coloring");
        assert_eq!(draft.duration, 90);
        assert_eq!(draft.price, 80.0);
        assert!(draft.staff_name.is_empty());
        assert!(draft.staff_id.is_none());
    }

    #[test]
    fn test_clearing_service_resets_duration_and_price() {
        let services = demo_services();
        let mut draft = filled_draft();
        draft.select_service(Some(&services[0]));
        draft.staff_name = "Mike Smith".to_string();

        draft.select_service(None);
        assert_eq!(draft.service, "");
        assert_eq!(draft.duration, 30);
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.staff_name, "");
    }

    #[test]
    fn test_draft_requires_every_field() {
        assert!(filled_draft().validate().is_ok());

        let mut missing_time = filled_draft();
        missing_time.time = " ".to_string();
        assert_eq!(
            missing_time.validate(),
            Err(AppointmentError::ValidationError("Please fill all required fields.".to_string()))
        );

        let mut bad_date = filled_draft();
        bad_date.date = "05/01/2024".to_string();
        assert!(bad_date.validate().is_err());
    }

    #[test]
    fn test_edit_messages_name_the_missing_field() {
        let request = UpdateAppointmentRequest {
            service: "Haircut".to_string(),
            service_id: None,
            date: "2024-01-05".to_string(),
            time: "9:00 AM".to_string(),
            duration: 30,
            staff_name: String::new(),
            staff_id: None,
            price: 30.0,
            status: AppointmentStatus::Confirmed,
        };

        assert_eq!(
            request.validate(),
            Err(AppointmentError::ValidationError("Staff member is required".to_string()))
        );
    }
}
