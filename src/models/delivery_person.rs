use serde::{Deserialize, Serialize};

/// A registered delivery person. The rating field is derived: it is the
/// mean of all rating records referencing this person, rounded to one
/// decimal place, and is recomputed by the store whenever a rating lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPerson {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub rating: f64,
    pub total_deliveries: i64,
    pub availability_status: AvailabilityStatus,
    pub current_delivery_id: Option<String>,
}

/// Registration payload; the store fills in the derived and bookkeeping
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryPerson {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Busy,
    Offline,
}
