use std::sync::Arc;
use assert_matches::assert_matches;

use appointment_cell::demo::demo_appointments;
use appointment_cell::models::{
    Appointment, AppointmentDraft, AppointmentError, AppointmentStatus, UpdateAppointmentRequest,
};
use appointment_cell::services::{
    eligible_staff, find_dangling_references, resolve_display, AppointmentBookingService, AppointmentFilter,
    AppointmentLifecycleService, AppointmentStats, TransitionPolicy,
};
use catalog_cell::demo::demo_services;
use catalog_cell::models::{Service, ServiceCategory, ServiceDraft};
use catalog_cell::services::CatalogService;
use client_cell::demo::demo_clients;
use shared_database::{InMemoryRepository, Repository};
use staff_cell::demo::demo_staff;
use staff_cell::models::{Position, Staff};
use staff_cell::services::StaffService;
use shared_utils::test_utils::{date, TestConfig};

struct Shop {
    appointments: Arc<InMemoryRepository<Appointment>>,
    services: Arc<InMemoryRepository<Service>>,
    staff: Arc<InMemoryRepository<Staff>>,
}

impl Shop {
    fn seeded() -> Self {
        Self {
            appointments: Arc::new(InMemoryRepository::newest_first(demo_appointments())),
            services: Arc::new(InMemoryRepository::with_items(demo_services())),
            staff: Arc::new(InMemoryRepository::with_items(demo_staff())),
        }
    }

    fn booking(&self, policy: TransitionPolicy) -> AppointmentBookingService {
        AppointmentBookingService::new(
            self.appointments.clone(),
            self.services.clone(),
            self.staff.clone(),
            AppointmentLifecycleService::new(policy),
        )
    }

    async fn service_named(&self, name: &str) -> Service {
        CatalogService::new(self.services.clone())
            .find_by_name(name)
            .await
            .unwrap()
            .unwrap()
    }
}

fn emily_draft(service: &Service) -> AppointmentDraft {
    let mut draft = AppointmentDraft {
        date: "2024-01-05".to_string(),
        time: "9:00 AM".to_string(),
        ..AppointmentDraft::default()
    };
    draft.select_client(&demo_clients()[3]);
    draft.select_service(Some(service));
    draft.staff_name = "Mike Smith".to_string();
    draft
}

#[tokio::test]
async fn test_new_shave_is_offered_to_barbers_only() {
    let shop = Shop::seeded();
    let catalog = CatalogService::new(shop.services.clone());

    let shave = catalog
        .create_service(ServiceDraft {
            name: "Shave".to_string(),
            duration: Some(15),
            price: Some(15.0),
            category: Some(ServiceCategory::Beard),
            ..ServiceDraft::default()
        })
        .await
        .unwrap();

    let staff = shop.staff.list().await.unwrap();
    let eligible = eligible_staff(Some(&shave), &staff);

    assert!(!eligible.is_empty());
    assert!(eligible.iter().all(|member| member.position == Position::Barber));
    assert!(eligible
        .iter()
        .all(|member| !matches!(member.position, Position::Stylist | Position::Assistant | Position::Manager)));
}

#[tokio::test]
async fn test_booking_snapshots_service_and_starts_confirmed() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let haircut = shop.service_named("Haircut").await;

    let appointment = booking.book_appointment(emily_draft(&haircut)).await.unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    assert_eq!(appointment.duration, haircut.duration);
    assert_eq!(appointment.price, haircut.price);
    assert_eq!(appointment.date, date("2024-01-05"));
    assert_eq!(appointment.service_id, Some(haircut.id));
    assert!(appointment.staff_id.is_some());
    assert_eq!(appointment.client_name, "Emily Davis");
    assert_eq!(appointment.client_id, Some(demo_clients()[3].id));

    let listed = booking.list_appointments().await.unwrap();
    assert_eq!(listed.len(), 6);
    assert_eq!(listed[0].id, appointment.id);
}

#[tokio::test]
async fn test_later_service_edit_does_not_touch_booked_price() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let catalog = CatalogService::new(shop.services.clone());
    let haircut = shop.service_named("Haircut").await;

    let appointment = booking.book_appointment(emily_draft(&haircut)).await.unwrap();
    catalog
        .update_service(
            haircut.id,
            ServiceDraft {
                name: "Haircut".to_string(),
                price: Some(35.0),
                ..ServiceDraft::default()
            },
        )
        .await
        .unwrap();

    let stored = booking.get_appointment(appointment.id).await.unwrap();
    assert_eq!(stored.price, 30.0);
}

#[tokio::test]
async fn test_no_show_is_excluded_from_revenue() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let haircut = shop.service_named("Haircut").await;
    let appointment = booking.book_appointment(emily_draft(&haircut)).await.unwrap();

    let before = AppointmentStats::new(&booking.list_appointments().await.unwrap()).revenue();
    let updated = booking
        .set_status(appointment.id, AppointmentStatus::NoShow)
        .await
        .unwrap();
    let after = AppointmentStats::new(&booking.list_appointments().await.unwrap()).revenue();

    assert_eq!(updated.status, AppointmentStatus::NoShow);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_revenue_moves_only_on_completion() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let beard_trim = shop.service_named("Beard Trim").await;

    let baseline = AppointmentStats::new(&booking.list_appointments().await.unwrap()).revenue();

    let mut draft = emily_draft(&beard_trim);
    draft.staff_name = "David Johnson".to_string();
    let appointment = booking.book_appointment(draft).await.unwrap();
    let after_booking = AppointmentStats::new(&booking.list_appointments().await.unwrap()).revenue();
    assert_eq!(after_booking, baseline);

    booking
        .set_status(appointment.id, AppointmentStatus::Completed)
        .await
        .unwrap();
    let after_completion = AppointmentStats::new(&booking.list_appointments().await.unwrap()).revenue();
    assert_eq!(after_completion, baseline + appointment.price);
}

#[tokio::test]
async fn test_incomplete_draft_is_not_stored() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let haircut = shop.service_named("Haircut").await;

    let mut draft = emily_draft(&haircut);
    draft.select_service(Some(&haircut));

    let result = booking.book_appointment(draft).await;
    assert_matches!(
        result,
        Err(AppointmentError::ValidationError(msg)) if msg == "Please fill all required fields."
    );
    assert_eq!(booking.list_appointments().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_ineligible_staff_is_rejected() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let coloring = shop.service_named("Hair Coloring").await;

    let result = booking.book_appointment(emily_draft(&coloring)).await;

    assert_matches!(
        result,
        Err(AppointmentError::IneligibleStaff { staff, service })
            if staff == "Mike Smith" && service == "Hair Coloring"
    );
}

#[tokio::test]
async fn test_unrestricted_policy_reopens_completed() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let first = booking.list_appointments().await.unwrap().remove(0);

    booking.set_status(first.id, AppointmentStatus::Completed).await.unwrap();
    let reopened = booking.set_status(first.id, AppointmentStatus::Confirmed).await.unwrap();

    assert_eq!(reopened.status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn test_strict_policy_rejects_without_mutating() {
    let shop = Shop::seeded();
    let policy = TransitionPolicy::from_config(&TestConfig::strict().to_app_config());
    let booking = shop.booking(policy);
    let first = booking.list_appointments().await.unwrap().remove(0);

    booking.set_status(first.id, AppointmentStatus::Cancelled).await.unwrap();
    let result = booking.set_status(first.id, AppointmentStatus::Confirmed).await;

    assert_matches!(result, Err(AppointmentError::InvalidStatusTransition { .. }));
    let stored = booking.get_appointment(first.id).await.unwrap();
    assert_eq!(stored.status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn test_edit_validation_happens_before_mutation() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let first = booking.list_appointments().await.unwrap().remove(0);

    let mut request = UpdateAppointmentRequest::from(&first);
    request.time = String::new();
    request.status = AppointmentStatus::Completed;

    let result = booking.update_appointment(first.id, request).await;
    assert_matches!(result, Err(AppointmentError::ValidationError(msg)) if msg == "Time is required");
    assert_eq!(booking.get_appointment(first.id).await.unwrap(), first);
}

#[tokio::test]
async fn test_filter_is_stable_and_idempotent() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let filter = AppointmentFilter::new("haircut", Default::default(), Default::default());

    let once = booking.search_appointments(&filter).await.unwrap();
    let twice: Vec<Appointment> = filter.apply(&once).into_iter().cloned().collect();

    assert_eq!(once, twice);
    let clients: Vec<&str> = once.iter().map(|a| a.client_name.as_str()).collect();
    assert_eq!(clients, vec!["John Doe", "Sarah Johnson", "Emily Davis"]);
}

#[tokio::test]
async fn test_deleting_staff_leaves_dangling_appointments() {
    let shop = Shop::seeded();
    let staff_service = StaffService::new(shop.staff.clone());
    let jessica = staff_service.find_by_name("Jessica Lee").await.unwrap().unwrap();

    staff_service.delete_staff(jessica.id).await.unwrap();

    let appointments = shop.appointments.list().await.unwrap();
    let dangling = find_dangling_references(
        &appointments,
        &demo_clients(),
        &shop.staff.list().await.unwrap(),
        &shop.services.list().await.unwrap(),
    );
    assert_eq!(dangling.len(), 2);
    assert_eq!(appointments.len(), 5);
}

#[tokio::test]
async fn test_booking_by_name_copies_service_snapshot() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let haircut = shop.service_named("Haircut").await;

    let draft = AppointmentDraft {
        client_name: "Walk-in".to_string(),
        service: " Haircut ".to_string(),
        date: "2024-01-05".to_string(),
        time: "9:00 AM".to_string(),
        staff_name: " Mike Smith".to_string(),
        ..AppointmentDraft::default()
    };
    let appointment = booking.book_appointment(draft).await.unwrap();

    assert_eq!(appointment.service, "Haircut");
    assert_eq!(appointment.service_id, Some(haircut.id));
    assert_eq!((appointment.duration, appointment.price), (30, 30.0));
    assert_eq!(appointment.staff_name, "Mike Smith");
    assert!(appointment.staff_id.is_some());
}

#[tokio::test]
async fn test_padded_staff_name_is_still_checked_for_eligibility() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);

    let draft = AppointmentDraft {
        client_name: "Walk-in".to_string(),
        service: "Hair Coloring".to_string(),
        date: "2024-01-05".to_string(),
        time: "9:00 AM".to_string(),
        staff_name: " Mike Smith ".to_string(),
        ..AppointmentDraft::default()
    };

    assert_matches!(
        booking.book_appointment(draft).await,
        Err(AppointmentError::IneligibleStaff { staff, .. }) if staff == "Mike Smith"
    );
    assert_eq!(booking.list_appointments().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_unknown_service_name_keeps_draft_values_without_id() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);

    let draft = AppointmentDraft {
        client_name: "Walk-in".to_string(),
        service: "Hot Towel".to_string(),
        date: "2024-01-05".to_string(),
        time: "9:00 AM".to_string(),
        staff_name: "Mike Smith".to_string(),
        price: 12.0,
        ..AppointmentDraft::default()
    };
    let appointment = booking.book_appointment(draft).await.unwrap();

    assert_eq!(appointment.service_id, None);
    assert_eq!(appointment.price, 12.0);
}

#[tokio::test]
async fn test_edited_staff_follows_the_new_name() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let first = booking.list_appointments().await.unwrap().remove(0);
    assert_eq!(first.staff_name, "Mike Smith");

    let mut request = UpdateAppointmentRequest::from(&first);
    request.staff_name = "David Johnson".to_string();
    let updated = booking.update_appointment(first.id, request).await.unwrap();

    let staff = shop.staff.list().await.unwrap();
    let david = staff.iter().find(|member| member.name == "David Johnson").unwrap();
    assert_eq!(updated.staff_id, Some(david.id));

    let services = shop.services.list().await.unwrap();
    let display = resolve_display(&updated, &demo_clients(), &staff, &services);
    assert_eq!(display.staff_name, "David Johnson");
    assert_eq!(display.service, first.service);

    let appointments = booking.list_appointments().await.unwrap();
    assert!(find_dangling_references(&appointments, &demo_clients(), &staff, &services).is_empty());
}

#[tokio::test]
async fn test_edit_to_unknown_staff_clears_the_id() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let first = booking.list_appointments().await.unwrap().remove(0);

    let mut request = UpdateAppointmentRequest::from(&first);
    request.staff_name = "Guest Barber".to_string();
    let updated = booking.update_appointment(first.id, request).await.unwrap();

    assert_eq!(updated.staff_name, "Guest Barber");
    assert_eq!(updated.staff_id, None);
    assert_eq!(updated.service_id, first.service_id);
}

#[tokio::test]
async fn test_status_change_keeps_ids_after_catalog_rename() {
    let shop = Shop::seeded();
    let booking = shop.booking(TransitionPolicy::Unrestricted);
    let catalog = CatalogService::new(shop.services.clone());
    let first = booking.list_appointments().await.unwrap().remove(0);
    let service_id = first.service_id.unwrap();

    catalog
        .update_service(
            service_id,
            ServiceDraft {
                name: "Classic Cut".to_string(),
                ..ServiceDraft::default()
            },
        )
        .await
        .unwrap();
    let updated = booking.set_status(first.id, AppointmentStatus::Completed).await.unwrap();

    assert_eq!(updated.service, first.service);
    assert_eq!(updated.service_id, Some(service_id));
}
