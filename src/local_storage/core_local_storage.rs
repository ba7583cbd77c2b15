use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, params};

use crate::local_storage::slot_tables::SlotTable;

/// Device-local persistent storage: a handful of independently keyed
/// slots, each holding one serialized collection as text.
pub struct CoreLocalStorage {
    connection: Mutex<Connection>,
}

impl CoreLocalStorage {
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        if let Some(dir) = Path::new(db_path).parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let conn = Connection::open(db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute(&SlotTable::create_table(), [])?;

        Ok(CoreLocalStorage {
            connection: Mutex::new(conn),
        })
    }

    fn get_connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.connection.lock().map_err(|_| StorageError::Poisoned)
    }

    /// Read the content of a slot, `None` if the key has never been written.
    pub fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.get_connection()?;
        let query = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            SlotTable::COLUMN_VALUE,
            SlotTable::TABLE_NAME,
            SlotTable::COLUMN_KEY,
        );

        let value = conn
            .query_row(&query, params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Write a slot, replacing any previous content under the same key.
    pub fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.get_connection()?;
        let query = format!(
            "INSERT INTO {} ({}, {}) VALUES (?, ?)
             ON CONFLICT({}) DO UPDATE SET {} = excluded.{}",
            SlotTable::TABLE_NAME,
            SlotTable::COLUMN_KEY,
            SlotTable::COLUMN_VALUE,
            SlotTable::COLUMN_KEY,
            SlotTable::COLUMN_VALUE,
            SlotTable::COLUMN_VALUE,
        );

        conn.execute(&query, params![key, value])?;
        Ok(())
    }

    /// Remove a slot. Removing an absent key is not an error.
    pub fn delete_slot(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.get_connection()?;
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            SlotTable::TABLE_NAME,
            SlotTable::COLUMN_KEY,
        );

        conn.execute(&query, params![key])?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage engine error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage connection poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uuid::Uuid;

    use super::*;

    fn setup_test_db() -> (PathBuf, CoreLocalStorage) {
        let db_path = std::env::temp_dir().join(format!("logistics_test_{}.db", Uuid::new_v4()));
        let storage =
            CoreLocalStorage::new(db_path.to_str().unwrap()).expect("failed to create storage");
        (db_path, storage)
    }

    fn teardown_test_db(db_path: &Path) {
        if db_path.exists() {
            fs::remove_file(db_path).expect("failed to remove test database");
        }
    }

    #[test]
    fn slots_round_trip() {
        let (db_path, storage) = setup_test_db();

        assert_eq!(storage.read_slot("logistics_products").unwrap(), None);

        storage.write_slot("logistics_products", "[1,2,3]").unwrap();
        assert_eq!(
            storage.read_slot("logistics_products").unwrap().as_deref(),
            Some("[1,2,3]")
        );

        storage.write_slot("logistics_products", "[]").unwrap();
        assert_eq!(
            storage.read_slot("logistics_products").unwrap().as_deref(),
            Some("[]")
        );

        teardown_test_db(&db_path);
    }

    #[test]
    fn slots_are_independent() {
        let (db_path, storage) = setup_test_db();

        storage.write_slot("a", "first").unwrap();
        storage.write_slot("b", "second").unwrap();
        storage.delete_slot("a").unwrap();

        assert_eq!(storage.read_slot("a").unwrap(), None);
        assert_eq!(storage.read_slot("b").unwrap().as_deref(), Some("second"));

        teardown_test_db(&db_path);
    }

    #[test]
    fn reopening_the_same_path_sees_previous_writes() {
        let (db_path, storage) = setup_test_db();
        storage.write_slot("user", "{\"id\":\"1\"}").unwrap();
        drop(storage);

        let reopened = CoreLocalStorage::new(db_path.to_str().unwrap()).unwrap();
        assert_eq!(
            reopened.read_slot("user").unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );

        teardown_test_db(&db_path);
    }

    #[test]
    fn deleting_an_absent_slot_is_fine() {
        let (db_path, storage) = setup_test_db();
        storage.delete_slot("never-written").unwrap();
        teardown_test_db(&db_path);
    }
}
