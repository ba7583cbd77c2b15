use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer rating for a completed delivery. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub delivery_id: String,
    pub customer_id: String,
    pub delivery_person_id: String,
    #[serde(rename = "rating")]
    pub score: i64,
    pub comment: String,
    pub date: NaiveDate,
}

/// Rating payload; the store assigns the identifier and stamps the date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRating {
    pub delivery_id: String,
    pub customer_id: String,
    pub delivery_person_id: String,
    #[serde(rename = "rating")]
    pub score: i64,
    pub comment: String,
}
