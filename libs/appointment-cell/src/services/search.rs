use chrono::NaiveDate;

use shared_models::display::SelectOption;
use shared_utils::{distinct_values, SearchTerm, Selection, ALL};

use crate::models::{Appointment, AppointmentStatus, DATE_FORMAT};

#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub term: SearchTerm,
    pub date: Selection<NaiveDate>,
    pub status: Selection<AppointmentStatus>,
}

impl AppointmentFilter {
    pub fn new(
        term: impl Into<SearchTerm>,
        date: Selection<NaiveDate>,
        status: Selection<AppointmentStatus>,
    ) -> Self {
        Self {
            term: term.into(),
            date,
            status,
        }
    }

    pub fn matches(&self, appointment: &Appointment) -> bool {
        let matches_search = self
            .term
            .matches_any([appointment.client_name.as_str(), appointment.service.as_str()]);

        matches_search
            && self.date.matches(&appointment.date)
            && self.status.matches(&appointment.status)
    }

    pub fn apply<'a>(&self, appointments: &'a [Appointment]) -> Vec<&'a Appointment> {
        appointments
            .iter()
            .filter(|appointment| self.matches(appointment))
            .collect()
    }
}

/// Dates that currently have appointments, in list order.
pub fn distinct_dates(appointments: &[Appointment]) -> Vec<NaiveDate> {
    distinct_values(appointments.iter().map(|appointment| appointment.date))
}

/// Date filter entries, "All Dates" first.
pub fn date_options(appointments: &[Appointment]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL, "All Dates"))
        .chain(distinct_dates(appointments).into_iter().map(|date| {
            let value = date.format(DATE_FORMAT).to_string();
            SelectOption::new(value.clone(), value)
        }))
        .collect()
}
