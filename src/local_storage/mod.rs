pub mod core_local_storage;
pub mod slot_tables;

pub use core_local_storage::{CoreLocalStorage, StorageError};
