// libs/client-cell/src/services/client.rs
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_database::Repository;

use crate::models::{Client, ClientError, CreateClientRequest, LastVisit, UpdateClientRequest};
use crate::services::search::ClientFilter;

pub struct ClientService {
    repository: Arc<dyn Repository<Client>>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn Repository<Client>>) -> Self {
        Self { repository }
    }

    pub async fn create_client(&self, request: CreateClientRequest) -> Result<Client, ClientError> {
        debug!("Creating client: {}", request.name);

        if let Err(e) = request.validate() {
            warn!("Rejected new client: {}", e);
            return Err(e);
        }

        let client = Client {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.unwrap_or_default().trim().to_string(),
            last_visit: LastVisit::Never,
            total_visits: 0,
            total_spent: 0.0,
        };

        let client = self.repository.create(client).await?;
        info!("Client {} created with ID: {}", client.name, client.id);

        Ok(client)
    }

    pub async fn get_client(&self, client_id: Uuid) -> Result<Client, ClientError> {
        self.repository
            .find_by_id(client_id)
            .await?
            .ok_or(ClientError::NotFound)
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        Ok(self.repository.list().await?)
    }

    pub async fn update_client(
        &self,
        client_id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<Client, ClientError> {
        debug!("Updating client: {}", client_id);

        if let Err(e) = request.validate() {
            warn!("Rejected edit of client {}: {}", client_id, e);
            return Err(e);
        }

        let mut client = self.get_client(client_id).await?;
        client.name = request.name.trim().to_string();
        client.email = request.email.trim().to_string();
        client.phone = request.phone.trim().to_string();

        let client = self.repository.update(client).await?;
        info!("Client {} updated", client_id);

        Ok(client)
    }

    /// Removes the client only; appointments that reference it are left as they are.
    pub async fn delete_client(&self, client_id: Uuid) -> Result<(), ClientError> {
        debug!("Deleting client: {}", client_id);
        self.repository.delete(client_id).await?;
        info!("Client {} deleted", client_id);
        Ok(())
    }

    pub async fn search_clients(&self, filter: &ClientFilter) -> Result<Vec<Client>, ClientError> {
        let clients = self.repository.list().await?;
        Ok(filter.apply(&clients).into_iter().cloned().collect())
    }
}
