pub mod auth_service;
pub mod scanner_service;

pub use auth_service::{AuthError, AuthService};
pub use scanner_service::{ScanError, parse_payload, resolve_product};
