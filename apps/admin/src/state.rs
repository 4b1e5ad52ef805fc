use std::sync::Arc;
use tracing::info;

use appointment_cell::demo::demo_appointments;
use appointment_cell::models::Appointment;
use appointment_cell::services::{AppointmentBookingService, AppointmentLifecycleService, TransitionPolicy};
use auth_cell::services::SessionService;
use catalog_cell::demo::demo_services;
use catalog_cell::models::Service;
use catalog_cell::services::CatalogService;
use client_cell::demo::demo_clients;
use client_cell::models::Client;
use client_cell::services::ClientService;
use dashboard_cell::services::DashboardService;
use settings_cell::services::SettingsService;
use shared_config::AppConfig;
use shared_database::{InMemoryRepository, KeyValueStore};
use staff_cell::demo::demo_staff;
use staff_cell::models::Staff;
use staff_cell::services::StaffService;

/// One repository per collection, shared by every service that reads it.
pub struct AdminState {
    pub clients: ClientService,
    pub staff: StaffService,
    pub catalog: CatalogService,
    pub booking: AppointmentBookingService,
    pub dashboard: DashboardService,
    pub settings: SettingsService,
    pub session: SessionService,
}

impl AdminState {
    pub fn build(config: Arc<AppConfig>, store: Arc<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let (clients, staff, services, appointments) = if config.seed_demo_data {
            info!("Seeding demo data");
            (demo_clients(), demo_staff(), demo_services(), demo_appointments())
        } else {
            (Vec::new(), Vec::new(), Vec::new(), Vec::new())
        };

        let client_repo = Arc::new(InMemoryRepository::<Client>::with_items(clients));
        let staff_repo = Arc::new(InMemoryRepository::<Staff>::with_items(staff));
        let service_repo = Arc::new(InMemoryRepository::<Service>::with_items(services));
        let appointment_repo = Arc::new(InMemoryRepository::<Appointment>::newest_first(appointments));

        let lifecycle = AppointmentLifecycleService::new(TransitionPolicy::from_config(&config));
        info!("Status transitions: {:?}", lifecycle.policy());

        Ok(Self {
            clients: ClientService::new(client_repo.clone()),
            staff: StaffService::new(staff_repo.clone()),
            catalog: CatalogService::new(service_repo.clone()),
            booking: AppointmentBookingService::new(
                appointment_repo.clone(),
                service_repo,
                staff_repo.clone(),
                lifecycle,
            ),
            dashboard: DashboardService::new(appointment_repo, client_repo, staff_repo),
            settings: SettingsService::new(store.clone())?,
            session: SessionService::new(store, config),
        })
    }
}
