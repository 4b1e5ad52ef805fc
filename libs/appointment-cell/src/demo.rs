//! Seed appointments, listed newest first, referencing the demo clients, staff and services.

use chrono::NaiveDate;
use uuid::Uuid;

use catalog_cell::demo::demo_service_id;
use client_cell::demo::demo_client_id;
use staff_cell::demo::demo_staff_id;

use crate::models::{Appointment, AppointmentStatus};

pub fn demo_appointment_id(n: u128) -> Uuid {
    Uuid::from_u128(0x4000 + n)
}

pub fn demo_appointments() -> Vec<Appointment> {
    // (n, client, service, date, time, duration, staff, price)
    let rows = [
        (1, 1, "John Doe", 1, "Haircut", (2023, 7, 1), "10:00 AM", 30, 1, "Mike Smith", 30.0),
        (2, 2, "Sarah Johnson", 3, "Haircut + Beard Trim", (2023, 7, 1), "11:00 AM", 45, 1, "Mike Smith", 45.0),
        (3, 3, "Michael Brown", 4, "Hair Styling", (2023, 7, 1), "1:30 PM", 60, 2, "Jessica Lee", 50.0),
        (4, 4, "Emily Davis", 1, "Haircut", (2023, 7, 2), "2:00 PM", 30, 1, "Mike Smith", 30.0),
        (5, 5, "David Wilson", 2, "Beard Trim", (2023, 7, 2), "3:30 PM", 20, 2, "Jessica Lee", 20.0),
    ];

    rows.into_iter()
        .filter_map(
            |(n, client, client_name, service, service_name, (y, m, d), time, duration, staff, staff_name, price)| {
                Some(Appointment {
                    id: demo_appointment_id(n),
                    client_name: client_name.to_string(),
                    client_id: Some(demo_client_id(client)),
                    service: service_name.to_string(),
                    service_id: Some(demo_service_id(service)),
                    date: NaiveDate::from_ymd_opt(y, m, d)?,
                    time: time.to_string(),
                    duration,
                    status: AppointmentStatus::Confirmed,
                    staff_name: staff_name.to_string(),
                    staff_id: Some(demo_staff_id(staff)),
                    price,
                })
            },
        )
        .collect()
}
