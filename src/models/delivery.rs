use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer delivery request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRequest {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub product_ids: Vec<String>,
    pub status: DeliveryStatus,
    pub address: String,
    pub request_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_person_id: Option<String>,
    pub payment_status: PaymentStatus,
    pub total_amount: f64,
}

/// Fields a caller supplies when creating a request; the store assigns
/// the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryRequest {
    pub customer_id: String,
    pub customer_name: String,
    pub product_ids: Vec<String>,
    pub status: DeliveryStatus,
    pub address: String,
    pub request_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_person_id: Option<String>,
    pub payment_status: PaymentStatus,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    Pending,
    Assigned,
    InProgress,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    /// Legal forward transitions: pending -> assigned -> in-progress ->
    /// delivered, cancellation from pending or assigned only.
    pub fn can_transition_to(self, next: DeliveryStatus) -> bool {
        use DeliveryStatus::*;

        matches!(
            (self, next),
            (Pending, Assigned)
                | (Assigned, InProgress)
                | (InProgress, Delivered)
                | (Pending, Cancelled)
                | (Assigned, Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Assigned => "assigned",
            DeliveryStatus::InProgress => "in-progress",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}
