use crate::models::product::ProductCategory;

/// Tab filter for the deliveries list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryTab {
    #[default]
    All,
    Pending,
    /// Covers both assigned and in-progress requests.
    InProgress,
    Delivered,
}

/// Sort key for product queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Name,
    Price,
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Product list filter, mirroring the browse screen's controls: free-text
/// search, an optional category, and a sort key with direction.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<ProductCategory>,
    pub sort_by: ProductSort,
    pub order: SortOrder,
}
