//! Local data backend for the logistics inventory demo app: entity
//! models, seed data, the persistent store, the auth session and scan
//! payload resolution. Everything lives in memory and is mirrored to
//! device-local storage; there is no server behind it.

pub mod config;
pub mod error;
pub mod local_storage;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;


pub use config::Config;
pub use error::{AppError, Result};
pub use local_storage::CoreLocalStorage;
pub use services::AuthService;
pub use store::DataStore;
