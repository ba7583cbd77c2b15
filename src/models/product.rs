use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog product. Serialized with the camelCase keys the stored
/// collections use, so previously persisted data keeps parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub quantity: i64,
    pub price: f64,
    pub manufacturing_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub description: String,
    pub image: String,
    pub qr_code: String,
    pub low_stock_threshold: i64,
}

impl Product {
    /// A product is low stock once its quantity has fallen to or below
    /// its configured threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }
}

/// The closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Food,
    Clothing,
    Furniture,
    #[serde(rename = "Home Appliances")]
    HomeAppliances,
    Toys,
    Books,
    #[serde(rename = "Health & Beauty")]
    HealthBeauty,
    #[serde(rename = "Sports & Outdoors")]
    SportsOutdoors,
    Automotive,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 10] = [
        ProductCategory::Electronics,
        ProductCategory::Food,
        ProductCategory::Clothing,
        ProductCategory::Furniture,
        ProductCategory::HomeAppliances,
        ProductCategory::Toys,
        ProductCategory::Books,
        ProductCategory::HealthBeauty,
        ProductCategory::SportsOutdoors,
        ProductCategory::Automotive,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Food => "Food",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Furniture => "Furniture",
            ProductCategory::HomeAppliances => "Home Appliances",
            ProductCategory::Toys => "Toys",
            ProductCategory::Books => "Books",
            ProductCategory::HealthBeauty => "Health & Beauty",
            ProductCategory::SportsOutdoors => "Sports & Outdoors",
            ProductCategory::Automotive => "Automotive",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
