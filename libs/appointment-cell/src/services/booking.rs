// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use catalog_cell::models::Service;
use shared_database::Repository;
use staff_cell::models::Staff;

use crate::models::{
    parse_date, Appointment, AppointmentDraft, AppointmentError, AppointmentStatus,
    UpdateAppointmentRequest,
};
use crate::services::compatibility::is_eligible;
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::search::AppointmentFilter;

/// Books and edits appointments against the shared collections.
///
/// Double booking is not checked. There is no delete operation.
pub struct AppointmentBookingService {
    appointments: Arc<dyn Repository<Appointment>>,
    services: Arc<dyn Repository<Service>>,
    staff: Arc<dyn Repository<Staff>>,
    lifecycle: AppointmentLifecycleService,
}

impl AppointmentBookingService {
    pub fn new(
        appointments: Arc<dyn Repository<Appointment>>,
        services: Arc<dyn Repository<Service>>,
        staff: Arc<dyn Repository<Staff>>,
        lifecycle: AppointmentLifecycleService,
    ) -> Self {
        Self {
            appointments,
            services,
            staff,
            lifecycle,
        }
    }

    /// Validates the form and stores a new appointment. The status is always
    /// the lifecycle's initial status.
    pub async fn book_appointment(&self, draft: AppointmentDraft) -> Result<Appointment, AppointmentError> {
        debug!("Booking {} for {} on {} at {}", draft.service, draft.client_name, draft.date, draft.time);

        if let Err(e) = draft.validate() {
            warn!("Rejected booking: {}", e);
            return Err(e);
        }
        let date = parse_date(&draft.date)?;

        let service = self.resolve_service(draft.service_id, &draft.service).await?;
        let staff = self.resolve_staff(draft.staff_id, &draft.staff_name).await?;
        if let (Some(service), Some(staff)) = (&service, &staff) {
            if !is_eligible(Some(service), staff) {
                warn!("{} ({}) cannot perform {}", staff.name, staff.position, service.name);
                return Err(AppointmentError::IneligibleStaff {
                    staff: staff.name.clone(),
                    service: service.name.clone(),
                });
            }
        }

        // Duration and price are copied from the catalog entry when it resolves.
        let (service_name, service_id, duration, price) = match service {
            Some(service) => (service.name, Some(service.id), service.duration, service.price),
            None => (draft.service.trim().to_string(), None, draft.duration, draft.price),
        };
        let (staff_name, staff_id) = match staff {
            Some(member) => (member.name, Some(member.id)),
            None => (draft.staff_name.trim().to_string(), None),
        };

        let appointment = Appointment {
            id: Uuid::new_v4(),
            client_name: draft.client_name.trim().to_string(),
            client_id: draft.client_id,
            service: service_name,
            service_id,
            date,
            time: draft.time.trim().to_string(),
            duration,
            status: self.lifecycle.initial_status(),
            staff_name,
            staff_id,
            price,
        };

        let appointment = self.appointments.create(appointment).await?;
        info!(
            "Appointment {} booked: {} with {} on {} at {}",
            appointment.id, appointment.client_name, appointment.staff_name, appointment.date, appointment.time
        );

        Ok(appointment)
    }

    pub async fn get_appointment(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        self.appointments
            .find_by_id(appointment_id)
            .await?
            .ok_or(AppointmentError::NotFound)
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.appointments.list().await?)
    }

    pub async fn search_appointments(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let appointments = self.appointments.list().await?;
        Ok(filter.apply(&appointments).into_iter().cloned().collect())
    }

    /// Commits the edit form. Client fields are not editable here.
    pub async fn update_appointment(
        &self,
        appointment_id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment: {}", appointment_id);

        if let Err(e) = request.validate() {
            warn!("Rejected edit of appointment {}: {}", appointment_id, e);
            return Err(e);
        }
        let date = parse_date(&request.date)?;

        let current = self.get_appointment(appointment_id).await?;
        self.lifecycle
            .validate_status_transition(current.status, request.status)?;

        // An unchanged reference keeps its id; a changed one is looked up again
        // by name so the id never points at a different record than the name.
        let service_unchanged =
            request.service.trim() == current.service && request.service_id == current.service_id;
        let (service_name, service_id) = if service_unchanged {
            (current.service, current.service_id)
        } else {
            match self.resolve_service(request.service_id, &request.service).await? {
                Some(service) => (service.name, Some(service.id)),
                None => (request.service.trim().to_string(), None),
            }
        };
        let staff_unchanged =
            request.staff_name.trim() == current.staff_name && request.staff_id == current.staff_id;
        let (staff_name, staff_id) = if staff_unchanged {
            (current.staff_name, current.staff_id)
        } else {
            match self.resolve_staff(request.staff_id, &request.staff_name).await? {
                Some(member) => (member.name, Some(member.id)),
                None => (request.staff_name.trim().to_string(), None),
            }
        };

        let updated = Appointment {
            id: current.id,
            client_name: current.client_name,
            client_id: current.client_id,
            service: service_name,
            service_id,
            date,
            time: request.time.trim().to_string(),
            duration: request.duration,
            status: request.status,
            staff_name,
            staff_id,
            price: request.price,
        };

        let appointment = self.appointments.update(updated).await?;
        if current.status != appointment.status {
            info!(
                "Appointment {} moved from {} to {}",
                appointment_id, current.status, appointment.status
            );
        } else {
            info!("Appointment {} updated", appointment_id);
        }

        Ok(appointment)
    }

    /// Status-only edit, as used by the quick actions on the list.
    pub async fn set_status(
        &self,
        appointment_id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        let current = self.get_appointment(appointment_id).await?;
        let request = UpdateAppointmentRequest::from(&current).with_status(status);
        self.update_appointment(appointment_id, request).await
    }

    /// The service an id points at, as long as it still carries the entered
    /// name; otherwise the first service with that name.
    async fn resolve_service(&self, id: Option<Uuid>, name: &str) -> Result<Option<Service>, AppointmentError> {
        let name = name.trim();
        if let Some(id) = id {
            if let Some(service) = self.services.find_by_id(id).await? {
                if service.name == name {
                    return Ok(Some(service));
                }
            }
        }
        let services = self.services.list().await?;
        Ok(services.into_iter().find(|service| service.name == name))
    }

    async fn resolve_staff(&self, id: Option<Uuid>, name: &str) -> Result<Option<Staff>, AppointmentError> {
        let name = name.trim();
        if let Some(id) = id {
            if let Some(member) = self.staff.find_by_id(id).await? {
                if member.name == name {
                    return Ok(Some(member));
                }
            }
        }
        let staff = self.staff.list().await?;
        Ok(staff.into_iter().find(|member| member.name == name))
    }
}
