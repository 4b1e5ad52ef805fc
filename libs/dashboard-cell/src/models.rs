// libs/dashboard-cell/src/models.rs
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use appointment_cell::models::{Appointment, AppointmentStatus};
use shared_database::StorageError;
use shared_models::display::BadgeVariant;
use shared_models::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub date: NaiveDate,
    pub todays_appointments: usize,
    pub total_clients: usize,
    pub revenue_this_month: f64,
    pub active_staff: usize,
    pub upcoming: Vec<UpcomingAppointment>,
}

/// One row of the "next appointments today" list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingAppointment {
    pub id: Uuid,
    pub client_name: String,
    pub service: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub status_label: &'static str,
    pub badge: BadgeVariant,
}

impl From<&Appointment> for UpcomingAppointment {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id,
            client_name: appointment.client_name.clone(),
            service: appointment.service.clone(),
            time: appointment.time.clone(),
            status: appointment.status,
            status_label: appointment.status.label(),
            badge: appointment.status.badge_variant(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for DashboardError {
    fn from(err: StorageError) -> Self {
        DashboardError::StorageError(err.to_string())
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::StorageError(msg) => AppError::Storage(msg),
        }
    }
}
