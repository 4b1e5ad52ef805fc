// libs/staff-cell/src/services/staff.rs
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_database::Repository;

use crate::models::{Position, Staff, StaffDraft, StaffError};
use crate::services::search::StaffFilter;

pub struct StaffService {
    repository: Arc<dyn Repository<Staff>>,
}

impl StaffService {
    pub fn new(repository: Arc<dyn Repository<Staff>>) -> Self {
        Self { repository }
    }

    pub async fn create_staff(&self, draft: StaffDraft) -> Result<Staff, StaffError> {
        debug!("Adding staff member: {}", draft.name);

        if let Err(e) = draft.validate() {
            warn!("Rejected new staff member: {}", e);
            return Err(e);
        }

        let staff = self.repository.create(draft.into_staff(Uuid::new_v4())).await?;
        info!("Staff member {} added as {} with ID: {}", staff.name, staff.position, staff.id);

        Ok(staff)
    }

    pub async fn get_staff(&self, staff_id: Uuid) -> Result<Staff, StaffError> {
        self.repository
            .find_by_id(staff_id)
            .await?
            .ok_or(StaffError::NotFound)
    }

    pub async fn list_staff(&self) -> Result<Vec<Staff>, StaffError> {
        Ok(self.repository.list().await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Staff>, StaffError> {
        let staff = self.repository.list().await?;
        Ok(staff.into_iter().find(|member| member.name == name))
    }

    /// Commits an edit draft. Fields left as `None` keep their stored value.
    pub async fn update_staff(&self, staff_id: Uuid, draft: StaffDraft) -> Result<Staff, StaffError> {
        debug!("Updating staff member: {}", staff_id);

        if let Err(e) = draft.validate() {
            warn!("Rejected edit of staff member {}: {}", staff_id, e);
            return Err(e);
        }

        let current = self.get_staff(staff_id).await?;
        let updated = Staff {
            id: current.id,
            name: draft.name.trim().to_string(),
            position: draft.position.unwrap_or(current.position),
            email: draft.email.trim().to_string(),
            phone: draft.phone.unwrap_or(current.phone),
            hire_date: draft.hire_date.unwrap_or(current.hire_date),
            bio: draft.bio.unwrap_or(current.bio),
            image: draft.image.unwrap_or(current.image),
        };

        let staff = self.repository.update(updated).await?;
        info!("Staff member {} updated", staff_id);

        Ok(staff)
    }

    /// Appointments keep their stored staff name; nothing cascades.
    pub async fn delete_staff(&self, staff_id: Uuid) -> Result<(), StaffError> {
        debug!("Deleting staff member: {}", staff_id);
        self.repository.delete(staff_id).await?;
        info!("Staff member {} deleted", staff_id);
        Ok(())
    }

    pub async fn search_staff(&self, filter: &StaffFilter) -> Result<Vec<Staff>, StaffError> {
        let staff = self.repository.list().await?;
        Ok(filter.apply(&staff).into_iter().cloned().collect())
    }

    pub async fn count_by_position(&self, position: Position) -> Result<usize, StaffError> {
        let staff = self.repository.list().await?;
        Ok(staff.iter().filter(|member| member.position == position).count())
    }
}
