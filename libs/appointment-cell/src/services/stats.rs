// libs/appointment-cell/src/services/stats.rs
//
// Read-only aggregates over an appointment snapshot. Nothing here is cached;
// callers pass the current list every time.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
    pub no_show: usize,
}

impl StatusCounts {
    pub fn get(&self, status: AppointmentStatus) -> usize {
        match status {
            AppointmentStatus::Confirmed => self.confirmed,
            AppointmentStatus::Cancelled => self.cancelled,
            AppointmentStatus::Completed => self.completed,
            AppointmentStatus::NoShow => self.no_show,
        }
    }

    fn bump(&mut self, status: AppointmentStatus) {
        match status {
            AppointmentStatus::Confirmed => self.confirmed += 1,
            AppointmentStatus::Cancelled => self.cancelled += 1,
            AppointmentStatus::Completed => self.completed += 1,
            AppointmentStatus::NoShow => self.no_show += 1,
        }
    }
}

/// Completed work grouped under one staff member or service name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueGroup {
    pub name: String,
    pub appointments: usize,
    pub revenue: f64,
}

/// Visit totals for a client derived from completed appointments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientActivity {
    pub client_name: String,
    pub visits: u32,
    pub spent: f64,
    pub last_visit: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub total: usize,
    pub by_status: StatusCounts,
    pub revenue: f64,
    pub completion_rate: f64,
}

pub struct AppointmentStats<'a> {
    appointments: &'a [Appointment],
}

impl<'a> AppointmentStats<'a> {
    pub fn new(appointments: &'a [Appointment]) -> Self {
        Self { appointments }
    }

    pub fn total(&self) -> usize {
        self.appointments.len()
    }

    pub fn count_by_status(&self) -> StatusCounts {
        self.appointments
            .iter()
            .fold(StatusCounts::default(), |mut counts, appointment| {
                counts.bump(appointment.status);
                counts
            })
    }

    /// Sum of prices over completed appointments only.
    pub fn revenue(&self) -> f64 {
        self.completed().map(|appointment| appointment.price).sum()
    }

    /// Completed appointments over all appointments, 0 for an empty list.
    pub fn completion_rate(&self) -> f64 {
        if self.appointments.is_empty() {
            return 0.0;
        }
        self.count_by_status().completed as f64 / self.total() as f64
    }

    pub fn appointments_on(&self, date: NaiveDate) -> Vec<&'a Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.date == date)
            .collect()
    }

    pub fn revenue_in_month(&self, year: i32, month: u32) -> f64 {
        self.completed()
            .filter(|appointment| appointment.date.year() == year && appointment.date.month() == month)
            .map(|appointment| appointment.price)
            .sum()
    }

    pub fn revenue_by_staff(&self) -> Vec<RevenueGroup> {
        group_revenue(self.completed().map(|appointment| (&appointment.staff_name, appointment.price)))
    }

    pub fn revenue_by_service(&self) -> Vec<RevenueGroup> {
        group_revenue(self.completed().map(|appointment| (&appointment.service, appointment.price)))
    }

    /// Per-client visits, spend and last visit, busiest spenders first.
    pub fn client_activity(&self) -> Vec<ClientActivity> {
        let mut by_client: HashMap<&str, ClientActivity> = HashMap::new();

        for appointment in self.completed() {
            let entry = by_client
                .entry(appointment.client_name.as_str())
                .or_insert_with(|| ClientActivity {
                    client_name: appointment.client_name.clone(),
                    visits: 0,
                    spent: 0.0,
                    last_visit: None,
                });
            entry.visits += 1;
            entry.spent += appointment.price;
            entry.last_visit = entry.last_visit.max(Some(appointment.date));
        }

        let mut activity: Vec<ClientActivity> = by_client.into_values().collect();
        activity.sort_by(|a, b| {
            b.spent
                .total_cmp(&a.spent)
                .then_with(|| a.client_name.cmp(&b.client_name))
        });
        activity
    }

    pub fn summary(&self) -> AppointmentSummary {
        AppointmentSummary {
            total: self.total(),
            by_status: self.count_by_status(),
            revenue: self.revenue(),
            completion_rate: self.completion_rate(),
        }
    }

    fn completed(&self) -> impl Iterator<Item = &'a Appointment> {
        self.appointments.iter().filter(|appointment| appointment.is_completed())
    }
}

fn group_revenue<'a>(rows: impl Iterator<Item = (&'a String, f64)>) -> Vec<RevenueGroup> {
    let mut groups: HashMap<&str, RevenueGroup> = HashMap::new();

    for (name, price) in rows {
        let group = groups.entry(name.as_str()).or_insert_with(|| RevenueGroup {
            name: name.clone(),
            appointments: 0,
            revenue: 0.0,
        });
        group.appointments += 1;
        group.revenue += price;
    }

    let mut groups: Vec<RevenueGroup> = groups.into_values().collect();
    groups.sort_by(|a, b| b.revenue.total_cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));
    groups
}
