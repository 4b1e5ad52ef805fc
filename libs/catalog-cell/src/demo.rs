//! Seed service menu for demo and test workspaces.

use uuid::Uuid;

use crate::models::{Service, ServiceCategory};

pub fn demo_service_id(n: u128) -> Uuid {
    Uuid::from_u128(0x3000 + n)
}

pub fn demo_services() -> Vec<Service> {
    let rows = [
        (1, "Haircut", "Classic haircut with scissors and clippers", 30, 30.0, ServiceCategory::Haircut),
        (2, "Beard Trim", "Beard shaping and trimming", 20, 20.0, ServiceCategory::Beard),
        (3, "Haircut + Beard Trim", "Complete hair and beard service", 45, 45.0, ServiceCategory::Haircut),
        (4, "Hair Styling", "Hair styling with products", 30, 25.0, ServiceCategory::Styling),
        (5, "Hair Coloring", "Full hair coloring service", 90, 80.0, ServiceCategory::Color),
    ];

    rows.into_iter()
        .map(|(n, name, description, duration, price, category)| Service {
            id: demo_service_id(n),
            name: name.to_string(),
            description: description.to_string(),
            duration,
            price,
            category,
        })
        .collect()
}
