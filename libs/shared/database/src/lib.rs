pub mod repository;
pub mod store;

pub use repository::{Entity, InMemoryRepository, Repository, StorageError};
pub use store::{open_store, FileStore, KeyValueStore, MemoryStore};
