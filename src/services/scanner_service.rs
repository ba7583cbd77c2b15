//! Scanned-payload handling for the QR flow.
//!
//! The camera side is platform territory; what arrives here is the
//! decoded text. Valid payloads carry `product-<digits>` somewhere in
//! the text, and the digit run is the product identifier.

use thiserror::Error;

use crate::models::product::Product;
use crate::store::DataStore;

const PAYLOAD_MARKER: &str = "product-";

/// Extract the product identifier from a scanned payload.
pub fn parse_payload(data: &str) -> Result<String, ScanError> {
    for (index, _) in data.match_indices(PAYLOAD_MARKER) {
        let digits: String = data[index + PAYLOAD_MARKER.len()..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if !digits.is_empty() {
            return Ok(digits);
        }
    }

    Err(ScanError::InvalidFormat)
}

/// Resolve a scanned payload to the product it names.
pub fn resolve_product(store: &DataStore, data: &str) -> Result<Product, ScanError> {
    let id = parse_payload(data)?;
    store
        .get_product_by_id(&id)
        .map_err(|_| ScanError::ProductNotFound { id })
}

/// User-facing scan failures; both are recoverable by scanning again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Invalid QR code format. Please scan a valid product QR code.")]
    InvalidFormat,

    #[error("Product with ID {id} not found.")]
    ProductNotFound { id: String },
}
