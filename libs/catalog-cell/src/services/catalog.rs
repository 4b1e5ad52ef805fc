// libs/catalog-cell/src/services/catalog.rs
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_database::Repository;

use crate::models::{CatalogError, Service, ServiceDraft};
use crate::services::search::ServiceFilter;

/// CRUD over the service menu. Edits never touch appointments already booked.
pub struct CatalogService {
    repository: Arc<dyn Repository<Service>>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn Repository<Service>>) -> Self {
        Self { repository }
    }

    pub async fn create_service(&self, draft: ServiceDraft) -> Result<Service, CatalogError> {
        debug!("Adding service: {}", draft.name);

        if let Err(e) = draft.validate() {
            warn!("Rejected new service: {}", e);
            return Err(e);
        }

        let service = self.repository.create(draft.into_service(Uuid::new_v4())).await?;
        info!(
            "Service {} added ({} min, {:.2}, {})",
            service.name, service.duration, service.price, service.category
        );

        Ok(service)
    }

    pub async fn get_service(&self, service_id: Uuid) -> Result<Service, CatalogError> {
        self.repository
            .find_by_id(service_id)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, CatalogError> {
        Ok(self.repository.list().await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Service>, CatalogError> {
        let services = self.repository.list().await?;
        Ok(services.into_iter().find(|service| service.name == name))
    }

    pub async fn update_service(
        &self,
        service_id: Uuid,
        draft: ServiceDraft,
    ) -> Result<Service, CatalogError> {
        debug!("Updating service: {}", service_id);

        if let Err(e) = draft.validate() {
            warn!("Rejected edit of service {}: {}", service_id, e);
            return Err(e);
        }

        let current = self.get_service(service_id).await?;
        let updated = Service {
            id: current.id,
            name: draft.name.trim().to_string(),
            description: draft.description.unwrap_or(current.description),
            duration: draft.duration.unwrap_or(current.duration),
            price: draft.price.unwrap_or(current.price),
            category: draft.category.unwrap_or(current.category),
        };

        let service = self.repository.update(updated).await?;
        info!("Service {} updated", service_id);

        Ok(service)
    }

    pub async fn delete_service(&self, service_id: Uuid) -> Result<(), CatalogError> {
        debug!("Deleting service: {}", service_id);
        self.repository.delete(service_id).await?;
        info!("Service {} deleted", service_id);
        Ok(())
    }

    pub async fn search_services(&self, filter: &ServiceFilter) -> Result<Vec<Service>, CatalogError> {
        let services = self.repository.list().await?;
        Ok(filter.apply(&services).into_iter().cloned().collect())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_services;
    use shared_database::InMemoryRepository;

    #[test]
    fn test_find_by_name_is_exact() {
        let catalog = CatalogService::new(Arc::new(InMemoryRepository::with_items(demo_services())));

        let found = tokio_test::block_on(catalog.find_by_name("Beard Trim")).unwrap();
        assert_eq!(found.map(|s| s.duration), Some(20));

        let missing = tokio_test::block_on(catalog.find_by_name("beard trim")).unwrap();
        assert!(missing.is_none());
    }
}
