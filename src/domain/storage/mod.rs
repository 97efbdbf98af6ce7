//! Durable storage collaborator boundary

mod repository;

pub use repository::{KeyValueStorage, StorageError};

#[cfg(test)]
pub use repository::mock::MockStorage;
