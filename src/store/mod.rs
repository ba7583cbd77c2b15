pub mod data_store;
pub mod queries;

pub use data_store::{DataStore, StoreError};
pub use queries::{DeliveryTab, ProductFilter, ProductSort, SortOrder};
