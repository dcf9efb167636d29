//! redb-based durable key-value storage
//!
//! Backs the merchant record cache with a single `cache` table of string
//! keys and values. Writes are whole-value replacements committed in one
//! transaction, so concurrent refreshes of the same key are last-write-wins
//! safe and a failed write never corrupts prior content.

use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for cache entries: key = derived cache key, value = JSON-serialized entry
const CACHE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("cache");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable local storage seam: string key-value get/set/remove
///
/// Implementations may fail on write (e.g. quota) without corrupting prior
/// content; the cache treats such failures as non-fatal.
pub trait KvStorage: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Cache storage backed by redb
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
}

impl RedbStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CACHE_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl KvStorage for RedbStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CACHE_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CACHE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CACHE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove_roundtrip() {
        let storage = RedbStorage::open_in_memory().unwrap();

        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v1").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v1".to_string()));

        // Whole-value replacement
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v2".to_string()));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);

        // Removing an absent key is fine
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_file_backed_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.redb");

        {
            let storage = RedbStorage::open(&path).unwrap();
            storage.set("merchant", "{}").unwrap();
        }

        let reopened = RedbStorage::open(&path).unwrap();
        assert_eq!(reopened.get("merchant").unwrap(), Some("{}".to_string()));
    }
}
