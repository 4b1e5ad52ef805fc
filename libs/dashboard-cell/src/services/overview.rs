// libs/dashboard-cell/src/services/overview.rs
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use tracing::debug;

use appointment_cell::models::{Appointment, AppointmentStatus};
use appointment_cell::services::AppointmentStats;
use client_cell::models::Client;
use shared_database::Repository;
use shared_utils::parse_display_time;
use staff_cell::models::Staff;

use crate::models::{DashboardError, DashboardOverview, UpcomingAppointment};

pub const UPCOMING_LIMIT: usize = 5;

/// Builds the landing-page numbers from the shared collections on every call.
pub struct DashboardService {
    appointments: Arc<dyn Repository<Appointment>>,
    clients: Arc<dyn Repository<Client>>,
    staff: Arc<dyn Repository<Staff>>,
}

impl DashboardService {
    pub fn new(
        appointments: Arc<dyn Repository<Appointment>>,
        clients: Arc<dyn Repository<Client>>,
        staff: Arc<dyn Repository<Staff>>,
    ) -> Self {
        Self {
            appointments,
            clients,
            staff,
        }
    }

    pub async fn overview(&self, today: NaiveDate) -> Result<DashboardOverview, DashboardError> {
        debug!("Building dashboard overview for {}", today);

        let appointments = self.appointments.list().await?;
        let stats = AppointmentStats::new(&appointments);
        let todays = stats.appointments_on(today);

        Ok(DashboardOverview {
            date: today,
            todays_appointments: todays.len(),
            total_clients: self.clients.count().await?,
            revenue_this_month: stats.revenue_in_month(today.year(), today.month()),
            active_staff: self.staff.count().await?,
            upcoming: upcoming_for_day(&todays),
        })
    }
}

/// Confirmed appointments ordered by clock time; times that do not parse go last.
fn upcoming_for_day(todays: &[&Appointment]) -> Vec<UpcomingAppointment> {
    let mut confirmed: Vec<&Appointment> = todays
        .iter()
        .copied()
        .filter(|appointment| appointment.status == AppointmentStatus::Confirmed)
        .collect();

    confirmed.sort_by_key(|appointment| {
        let time = parse_display_time(&appointment.time);
        (time.is_none(), time)
    });

    confirmed
        .into_iter()
        .take(UPCOMING_LIMIT)
        .map(UpcomingAppointment::from)
        .collect()
}
