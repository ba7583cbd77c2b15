/// Provides constants and utilities for working with the "slots"
/// key-value table that backs collection persistence.
pub struct SlotTable;

impl SlotTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "slots";

    /// The column name for the storage key of a slot.
    pub const COLUMN_KEY: &'static str = "key";

    /// The column name for the serialized slot content.
    pub const COLUMN_VALUE: &'static str = "value";

    /// SQL statement for creating the slots table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT PRIMARY KEY NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_KEY,
            Self::COLUMN_VALUE,
        )
    }
}

/// Storage key for the serialized product catalog.
pub const PRODUCTS_SLOT: &str = "logistics_products";

/// Storage key for the serialized delivery requests.
pub const DELIVERY_REQUESTS_SLOT: &str = "logistics_delivery_requests";

/// Storage key for the serialized delivery personnel.
pub const DELIVERY_PERSONS_SLOT: &str = "logistics_delivery_persons";

/// Storage key for the serialized ratings.
pub const RATINGS_SLOT: &str = "logistics_ratings";

/// Storage key for the persisted session user.
pub const SESSION_SLOT: &str = "user";
