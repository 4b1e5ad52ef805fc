//! Seed staff for demo and test workspaces.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Position, Staff};

pub fn demo_staff_id(n: u128) -> Uuid {
    Uuid::from_u128(0x2000 + n)
}

pub fn demo_staff() -> Vec<Staff> {
    let rows = [
        (1, "Mike Smith", Position::Barber, "mike@barber.com", "(555) 123-4567", (2020, 1, 15),
         "Experienced barber with over 10 years of experience in classic cuts."),
        (2, "Jessica Lee", Position::Stylist, "jessica@barber.com", "(555) 234-5678", (2021, 3, 10),
         "Specializes in modern styling and coloring techniques."),
        (3, "David Johnson", Position::Barber, "david@barber.com", "(555) 345-6789", (2019, 11, 5),
         "Expert in beard grooming and traditional shaves."),
        (4, "Sarah Williams", Position::Assistant, "sarah@barber.com", "(555) 456-7890", (2022, 5, 20),
         "Friendly assistant helping with all aspects of the shop."),
        (5, "Robert Brown", Position::Manager, "robert@barber.com", "(555) 567-8901", (2018, 8, 12),
         "Shop manager with a background in business and barbering."),
    ];

    rows.into_iter()
        .filter_map(|(n, name, position, email, phone, (y, m, d), bio)| {
            Some(Staff {
                id: demo_staff_id(n),
                name: name.to_string(),
                position,
                email: email.to_string(),
                phone: phone.to_string(),
                hire_date: NaiveDate::from_ymd_opt(y, m, d)?,
                bio: bio.to_string(),
                image: String::new(),
            })
        })
        .collect()
}
