//! Seed clients for demo and test workspaces.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Client, LastVisit};

pub fn demo_client_id(n: u128) -> Uuid {
    Uuid::from_u128(0x1000 + n)
}

pub fn demo_clients() -> Vec<Client> {
    let rows = [
        (1, "John Doe", "john@example.com", "(555) 123-4567", (2023, 6, 15), 8, 240.0),
        (2, "Sarah Johnson", "sarah@example.com", "(555) 234-5678", (2023, 6, 20), 12, 360.0),
        (3, "Michael Brown", "michael@example.com", "(555) 345-6789", (2023, 6, 18), 5, 150.0),
        (4, "Emily Davis", "emily@example.com", "(555) 456-7890", (2023, 6, 22), 3, 90.0),
        (5, "David Wilson", "david@example.com", "(555) 567-8901", (2023, 6, 10), 15, 450.0),
    ];

    rows.into_iter()
        .map(|(n, name, email, phone, (y, m, d), visits, spent)| Client {
            id: demo_client_id(n),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            last_visit: NaiveDate::from_ymd_opt(y, m, d)
                .map(LastVisit::On)
                .unwrap_or(LastVisit::Never),
            total_visits: visits,
            total_spent: spent,
        })
        .collect()
}
