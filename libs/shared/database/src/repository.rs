use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::error::AppError;

/// A record owned by exactly one repository, keyed by its id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Record {0} not found")]
    NotFound(Uuid),

    #[error("Record {0} already exists")]
    DuplicateId(Uuid),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => AppError::NotFound(format!("Record {} not found", id)),
            StorageError::DuplicateId(id) => AppError::Storage(format!("Record {} already exists", id)),
        }
    }
}

/// Data access contract shared by every entity collection.
///
/// The in-memory implementation resolves immediately; the trait stays async so a
/// networked backend can be dropped in without touching call sites.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn create(&self, entity: T) -> Result<T, StorageError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StorageError>;

    /// All records in their stored order.
    async fn list(&self) -> Result<Vec<T>, StorageError>;

    async fn update(&self, entity: T) -> Result<T, StorageError>;

    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.list().await?.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertPosition {
    Back,
    Front,
}

/// Vec-backed repository. Order is insertion order unless built with
/// [`InMemoryRepository::newest_first`].
pub struct InMemoryRepository<T: Entity> {
    items: RwLock<Vec<T>>,
    position: InsertPosition,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            position: InsertPosition::Back,
        }
    }

    /// New records are listed before older ones.
    pub fn newest_first(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            position: InsertPosition::Front,
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: T) -> Result<T, StorageError> {
        let mut items = self.items.write().await;
        let id = entity.id();

        if items.iter().any(|item| item.id() == id) {
            return Err(StorageError::DuplicateId(id));
        }

        match self.position {
            InsertPosition::Back => items.push(entity.clone()),
            InsertPosition::Front => items.insert(0, entity.clone()),
        }

        debug!("Stored record {} ({} total)", id, items.len());
        Ok(entity)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StorageError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.items.read().await.clone())
    }

    async fn update(&self, entity: T) -> Result<T, StorageError> {
        let mut items = self.items.write().await;
        let id = entity.id();

        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(StorageError::NotFound(id))?;
        *slot = entity.clone();

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != id);

        if items.len() == before {
            return Err(StorageError::NotFound(id));
        }

        debug!("Removed record {} ({} remaining)", id, items.len());
        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.items.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Uuid,
        text: String,
    }

    impl Entity for Note {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn note(text: &str) -> Note {
        Note { id: Uuid::new_v4(), text: text.to_string() }
    }

    #[tokio::test]
    async fn test_create_appends_by_default() {
        let repo = InMemoryRepository::new();
        repo.create(note("first")).await.unwrap();
        repo.create(note("second")).await.unwrap();

        let texts: Vec<String> = repo.list().await.unwrap().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_newest_first_prepends() {
        let repo = InMemoryRepository::newest_first(vec![note("seeded")]);
        repo.create(note("booked")).await.unwrap();

        let texts: Vec<String> = repo.list().await.unwrap().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["booked", "seeded"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryRepository::new();
        let original = note("once");
        repo.create(original.clone()).await.unwrap();

        assert_matches!(repo.create(original).await, Err(StorageError::DuplicateId(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = InMemoryRepository::new();
        let a = repo.create(note("a")).await.unwrap();
        repo.create(note("b")).await.unwrap();

        repo.update(Note { id: a.id, text: "a2".to_string() }).await.unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items[0].text, "a2");
        assert_eq!(items[1].text, "b");
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        let ghost = note("ghost");

        assert_matches!(repo.update(ghost.clone()).await, Err(StorageError::NotFound(id)) if id == ghost.id);
        assert_matches!(repo.delete(ghost.id).await, Err(StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let repo = InMemoryRepository::new();
        let a = repo.create(note("a")).await.unwrap();
        let b = repo.create(note("b")).await.unwrap();

        repo.delete(a.id).await.unwrap();

        assert!(repo.find_by_id(a.id).await.unwrap().is_none());
        assert_eq!(repo.find_by_id(b.id).await.unwrap(), Some(b));
    }
}
