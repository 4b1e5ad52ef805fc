// libs/appointment-cell/src/services/consistency.rs
//
// Reference checks between appointments and the records they point at.
// Deleting a client, staff member or service never cascades; this module
// only reports what no longer resolves.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use catalog_cell::models::Service;
use client_cell::models::Client;
use staff_cell::models::Staff;

use crate::models::Appointment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Client,
    Staff,
    Service,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingReference {
    pub appointment_id: Uuid,
    pub kind: ReferenceKind,
    pub missing_id: Uuid,
    /// Name snapshot still held by the appointment.
    pub snapshot: String,
}

/// Names to show for an appointment: live names where the id resolves,
/// the booking-time snapshot otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDisplay {
    pub client_name: String,
    pub staff_name: String,
    pub service: String,
}

pub struct ReferenceIndex<'a> {
    clients: HashMap<Uuid, &'a Client>,
    staff: HashMap<Uuid, &'a Staff>,
    services: HashMap<Uuid, &'a Service>,
}

impl<'a> ReferenceIndex<'a> {
    pub fn new(clients: &'a [Client], staff: &'a [Staff], services: &'a [Service]) -> Self {
        Self {
            clients: clients.iter().map(|client| (client.id, client)).collect(),
            staff: staff.iter().map(|member| (member.id, member)).collect(),
            services: services.iter().map(|service| (service.id, service)).collect(),
        }
    }

    pub fn dangling_references(&self, appointment: &Appointment) -> Vec<DanglingReference> {
        let checks = [
            (
                ReferenceKind::Client,
                appointment.client_id,
                &appointment.client_name,
                appointment.client_id.map_or(true, |id| self.clients.contains_key(&id)),
            ),
            (
                ReferenceKind::Staff,
                appointment.staff_id,
                &appointment.staff_name,
                appointment.staff_id.map_or(true, |id| self.staff.contains_key(&id)),
            ),
            (
                ReferenceKind::Service,
                appointment.service_id,
                &appointment.service,
                appointment.service_id.map_or(true, |id| self.services.contains_key(&id)),
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(kind, id, snapshot, resolves)| match (id, resolves) {
                (Some(missing_id), false) => Some(DanglingReference {
                    appointment_id: appointment.id,
                    kind,
                    missing_id,
                    snapshot: snapshot.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    pub fn resolve_display(&self, appointment: &Appointment) -> ResolvedDisplay {
        let client_name = appointment
            .client_id
            .and_then(|id| self.clients.get(&id))
            .map(|client| client.name.clone())
            .unwrap_or_else(|| appointment.client_name.clone());
        let staff_name = appointment
            .staff_id
            .and_then(|id| self.staff.get(&id))
            .map(|member| member.name.clone())
            .unwrap_or_else(|| appointment.staff_name.clone());
        let service = appointment
            .service_id
            .and_then(|id| self.services.get(&id))
            .map(|service| service.name.clone())
            .unwrap_or_else(|| appointment.service.clone());

        ResolvedDisplay {
            client_name,
            staff_name,
            service,
        }
    }
}

/// Appointments whose client, staff or service id no longer exists.
/// Appointments without an id for a reference are not reported for it.
pub fn find_dangling_references(
    appointments: &[Appointment],
    clients: &[Client],
    staff: &[Staff],
    services: &[Service],
) -> Vec<DanglingReference> {
    debug!("Checking references for {} appointments", appointments.len());

    let index = ReferenceIndex::new(clients, staff, services);
    let dangling: Vec<DanglingReference> = appointments
        .iter()
        .flat_map(|appointment| index.dangling_references(appointment))
        .collect();

    if !dangling.is_empty() {
        warn!("{} appointment references no longer resolve", dangling.len());
    }

    dangling
}

pub fn resolve_display(
    appointment: &Appointment,
    clients: &[Client],
    staff: &[Staff],
    services: &[Service],
) -> ResolvedDisplay {
    ReferenceIndex::new(clients, staff, services).resolve_display(appointment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_appointments;
    use catalog_cell::demo::demo_services;
    use client_cell::demo::demo_clients;
    use staff_cell::demo::demo_staff;

    #[test]
    fn test_demo_data_is_consistent() {
        let dangling = find_dangling_references(
            &demo_appointments(),
            &demo_clients(),
            &demo_staff(),
            &demo_services(),
        );
        assert!(dangling.is_empty());
    }

    #[test]
    fn test_deleted_staff_is_reported_per_appointment() {
        let appointments = demo_appointments();
        let staff: Vec<Staff> = demo_staff()
            .into_iter()
            .filter(|member| member.name != "Jessica Lee")
            .collect();

        let dangling = find_dangling_references(&appointments, &demo_clients(), &staff, &demo_services());

        assert_eq!(dangling.len(), 2);
        assert!(dangling.iter().all(|d| d.kind == ReferenceKind::Staff && d.snapshot == "Jessica Lee"));
    }

    #[test]
    fn test_missing_ids_are_not_dangling() {
        let mut appointments = demo_appointments();
        for appointment in &mut appointments {
            appointment.client_id = None;
        }

        let dangling = find_dangling_references(&appointments, &[], &demo_staff(), &demo_services());
        assert!(dangling.is_empty());
    }

    #[test]
    fn test_resolve_display_prefers_live_names() {
        let appointment = demo_appointments().remove(0);
        let mut staff = demo_staff();
        staff[0].name = "Michael Smith".to_string();
        let clients: Vec<Client> = Vec::new();

        let display = resolve_display(&appointment, &clients, &staff, &demo_services());
        assert_eq!(display.staff_name, "Michael Smith");
        assert_eq!(display.client_name, "John Doe");
        assert_eq!(display.service, "Haircut");
    }
}
