use std::sync::Arc;
use assert_matches::assert_matches;

use catalog_cell::demo::demo_services;
use catalog_cell::models::{CatalogError, ServiceCategory, ServiceDraft};
use catalog_cell::services::{CatalogService, ServiceFilter};
use shared_database::InMemoryRepository;
use shared_models::error::AppError;
use shared_utils::Selection;

fn seeded_catalog() -> CatalogService {
    CatalogService::new(Arc::new(InMemoryRepository::with_items(demo_services())))
}

#[tokio::test]
async fn test_add_shave_keeps_entered_values() {
    let catalog = seeded_catalog();

    let shave = catalog
        .create_service(ServiceDraft {
            name: "Shave".to_string(),
            description: Some("Hot towel straight razor shave".to_string()),
            duration: Some(15),
            price: Some(15.0),
            category: Some(ServiceCategory::Beard),
        })
        .await
        .unwrap();

    assert_eq!(shave.duration, 15);
    assert_eq!(shave.price, 15.0);
    assert_eq!(shave.category, ServiceCategory::Beard);

    let all = catalog.list_services().await.unwrap();
    assert_eq!(all.len(), 6);
    assert_eq!(all.last().unwrap().name, "Shave");
}

#[tokio::test]
async fn test_rejected_service_is_not_stored() {
    let catalog = seeded_catalog();

    let result = catalog
        .create_service(ServiceDraft {
            name: "   ".to_string(),
            ..ServiceDraft::default()
        })
        .await;

    assert_matches!(result, Err(CatalogError::ValidationError(msg)) if msg == "Service name is required");
    assert_eq!(catalog.list_services().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_update_keeps_unset_fields() {
    let catalog = seeded_catalog();
    let coloring = catalog.find_by_name("Hair Coloring").await.unwrap().unwrap();

    let updated = catalog
        .update_service(
            coloring.id,
            ServiceDraft {
                name: "Hair Coloring".to_string(),
                price: Some(95.0),
                ..ServiceDraft::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 95.0);
    assert_eq!(updated.duration, 90);
    assert_eq!(updated.category, ServiceCategory::Color);
    assert_eq!(updated.description, coloring.description);
}

#[tokio::test]
async fn test_filter_by_category_preserves_order() {
    let catalog = seeded_catalog();
    let filter = ServiceFilter::new("", Selection::Only(ServiceCategory::Haircut));

    let haircuts = catalog.search_services(&filter).await.unwrap();
    let names: Vec<&str> = haircuts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Haircut", "Haircut + Beard Trim"]);

    let again = catalog.search_services(&filter).await.unwrap();
    assert_eq!(haircuts, again);
}

#[tokio::test]
async fn test_delete_unknown_service_maps_to_not_found() {
    let catalog = seeded_catalog();
    let id = uuid::Uuid::new_v4();

    let err = catalog.delete_service(id).await.unwrap_err();
    assert_eq!(err, CatalogError::NotFound);
    assert_matches!(AppError::from(err), AppError::NotFound(_));
}
