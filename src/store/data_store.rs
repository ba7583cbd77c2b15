use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::task;

use crate::local_storage::CoreLocalStorage;
use crate::local_storage::slot_tables::{
    DELIVERY_PERSONS_SLOT, DELIVERY_REQUESTS_SLOT, PRODUCTS_SLOT, RATINGS_SLOT,
};
use crate::models::delivery::{DeliveryRequest, DeliveryStatus, NewDeliveryRequest};
use crate::models::delivery_person::{AvailabilityStatus, DeliveryPerson, NewDeliveryPerson};
use crate::models::product::{Product, ProductCategory};
use crate::models::rating::{NewRating, Rating};
use crate::models::user::{Role, User};
use crate::seed;
use crate::store::queries::{DeliveryTab, ProductFilter, ProductSort, SortOrder};

/// Single source of truth for products, delivery requests, delivery
/// personnel and ratings.
///
/// The store owns its collections outright; consumers read through the
/// accessors and mutate through the operations below, never by holding
/// their own copies. A store only exists once [`DataStore::load`] has
/// finished, so no reader can observe a half-loaded state and no write
/// can clobber storage with not-yet-loaded defaults.
///
/// Every successful mutation schedules a fire-and-forget write of the
/// full affected collection back to its storage slot. Write failures
/// are logged and masked; the in-memory state remains authoritative for
/// the rest of the session.
pub struct DataStore {
    storage: Arc<CoreLocalStorage>,
    products: Vec<Product>,
    delivery_requests: Vec<DeliveryRequest>,
    delivery_persons: Vec<DeliveryPerson>,
    ratings: Vec<Rating>,
}

impl DataStore {
    /// Load all four collections from storage, falling back to seed data
    /// for any slot that is absent or fails to parse.
    ///
    /// There is intentionally no distinction between "first run" and
    /// "corrupted slot": both land on seed data, with the latter logged.
    pub async fn load(storage: Arc<CoreLocalStorage>) -> crate::error::Result<Self> {
        let reader = Arc::clone(&storage);
        let (products, delivery_requests, delivery_persons, ratings) =
            task::spawn_blocking(move || {
                (
                    load_slot(&reader, PRODUCTS_SLOT, seed::products::generate_products),
                    load_slot(
                        &reader,
                        DELIVERY_REQUESTS_SLOT,
                        seed::deliveries::delivery_requests,
                    ),
                    load_slot(
                        &reader,
                        DELIVERY_PERSONS_SLOT,
                        seed::deliveries::delivery_persons,
                    ),
                    load_slot(&reader, RATINGS_SLOT, seed::deliveries::ratings),
                )
            })
            .await?;

        Ok(DataStore {
            storage,
            products,
            delivery_requests,
            delivery_persons,
            ratings,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn delivery_requests(&self) -> &[DeliveryRequest] {
        &self.delivery_requests
    }

    pub fn delivery_persons(&self) -> &[DeliveryPerson] {
        &self.delivery_persons
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Replace the stored product sharing the given product's identifier.
    pub fn update_product(&mut self, product: Product) -> Result<(), StoreError> {
        validate_product(&product)?;

        let existing = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::ProductNotFound {
                id: product.id.clone(),
            })?;
        *existing = product;

        self.persist(PRODUCTS_SLOT, &self.products);
        Ok(())
    }

    /// Replace only the quantity of the matching product.
    pub fn update_product_quantity(&mut self, id: &str, quantity: i64) -> Result<(), StoreError> {
        if quantity < 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound { id: id.to_string() })?;
        product.quantity = quantity;

        self.persist(PRODUCTS_SLOT, &self.products);
        Ok(())
    }

    pub fn get_product_by_id(&self, id: &str) -> Result<Product, StoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::ProductNotFound { id: id.to_string() })
    }

    /// All products whose quantity has fallen to or below their
    /// threshold, in backing-collection order.
    pub fn get_low_stock_products(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.is_low_stock()).cloned().collect()
    }

    /// Products whose identifier appears in `ids`. Order follows the
    /// backing collection, not the requested list.
    pub fn get_products_for_delivery(&self, ids: &[String]) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<ProductCategory> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// Search, filter and sort the catalog for the browse screen.
    pub fn query_products(&self, filter: &ProductFilter) -> Vec<Product> {
        let needle = filter
            .search
            .as_ref()
            .map(|s| s.to_lowercase())
            .filter(|s| !s.is_empty());

        let mut result: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                needle.as_ref().is_none_or(|n| {
                    p.name.to_lowercase().contains(n)
                        || p.category.label().to_lowercase().contains(n)
                        || p.description.to_lowercase().contains(n)
                })
            })
            .filter(|p| filter.category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            let ordering = match filter.sort_by {
                ProductSort::Name => a.name.cmp(&b.name),
                ProductSort::Price => a.price.total_cmp(&b.price),
                ProductSort::Quantity => a.quantity.cmp(&b.quantity),
            };
            match filter.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        result
    }

    /// Append a new delivery request under a fresh identifier.
    pub fn add_delivery_request(&mut self, draft: NewDeliveryRequest) -> DeliveryRequest {
        let id = timestamp_id("request", |candidate| {
            self.delivery_requests.iter().any(|r| r.id == candidate)
        });
        let request = DeliveryRequest {
            id,
            customer_id: draft.customer_id,
            customer_name: draft.customer_name,
            product_ids: draft.product_ids,
            status: draft.status,
            address: draft.address,
            request_date: draft.request_date,
            delivery_date: draft.delivery_date,
            delivery_person_id: draft.delivery_person_id,
            payment_status: draft.payment_status,
            total_amount: draft.total_amount,
        };

        self.delivery_requests.push(request.clone());
        self.persist(DELIVERY_REQUESTS_SLOT, &self.delivery_requests);
        request
    }

    /// Move a delivery request to a new status. Only the legal forward
    /// transitions are accepted; anything else is rejected.
    pub fn update_delivery_status(
        &mut self,
        id: &str,
        status: DeliveryStatus,
    ) -> Result<(), StoreError> {
        let request = self
            .delivery_requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::DeliveryNotFound { id: id.to_string() })?;

        if !request.status.can_transition_to(status) {
            return Err(StoreError::IllegalStatusTransition {
                from: request.status,
                to: status,
            });
        }
        request.status = status;

        self.persist(DELIVERY_REQUESTS_SLOT, &self.delivery_requests);
        Ok(())
    }

    /// Assign a delivery person to a pending request. The request moves
    /// to assigned and the person is marked busy with this delivery.
    pub fn assign_delivery_person(
        &mut self,
        delivery_id: &str,
        person_id: &str,
    ) -> Result<(), StoreError> {
        let request_index = self
            .delivery_requests
            .iter()
            .position(|r| r.id == delivery_id)
            .ok_or_else(|| StoreError::DeliveryNotFound {
                id: delivery_id.to_string(),
            })?;
        let person_index = self
            .delivery_persons
            .iter()
            .position(|p| p.id == person_id)
            .ok_or_else(|| StoreError::DeliveryPersonNotFound {
                id: person_id.to_string(),
            })?;

        let request = &mut self.delivery_requests[request_index];
        if !request.status.can_transition_to(DeliveryStatus::Assigned) {
            return Err(StoreError::IllegalStatusTransition {
                from: request.status,
                to: DeliveryStatus::Assigned,
            });
        }
        request.status = DeliveryStatus::Assigned;
        request.delivery_person_id = Some(person_id.to_string());

        let person = &mut self.delivery_persons[person_index];
        person.availability_status = AvailabilityStatus::Busy;
        person.current_delivery_id = Some(delivery_id.to_string());

        self.persist(DELIVERY_REQUESTS_SLOT, &self.delivery_requests);
        self.persist(DELIVERY_PERSONS_SLOT, &self.delivery_persons);
        Ok(())
    }

    /// Complete an in-progress delivery: stamp the delivery date and
    /// release the assigned person, crediting the delivery to their
    /// counter. This is the one place person-side bookkeeping happens;
    /// `add_rating` never touches it.
    pub fn complete_delivery(&mut self, delivery_id: &str) -> Result<(), StoreError> {
        let request_index = self
            .delivery_requests
            .iter()
            .position(|r| r.id == delivery_id)
            .ok_or_else(|| StoreError::DeliveryNotFound {
                id: delivery_id.to_string(),
            })?;

        let status = self.delivery_requests[request_index].status;
        if !status.can_transition_to(DeliveryStatus::Delivered) {
            return Err(StoreError::IllegalStatusTransition {
                from: status,
                to: DeliveryStatus::Delivered,
            });
        }

        // Resolve the person before mutating anything, so a dangling
        // reference leaves the request untouched.
        let person_index = match &self.delivery_requests[request_index].delivery_person_id {
            Some(person_id) => Some(
                self.delivery_persons
                    .iter()
                    .position(|p| p.id == *person_id)
                    .ok_or_else(|| StoreError::DeliveryPersonNotFound {
                        id: person_id.clone(),
                    })?,
            ),
            None => None,
        };

        let request = &mut self.delivery_requests[request_index];
        request.status = DeliveryStatus::Delivered;
        request.delivery_date = Some(Utc::now().date_naive());

        if let Some(person_index) = person_index {
            let person = &mut self.delivery_persons[person_index];
            person.total_deliveries += 1;
            person.availability_status = AvailabilityStatus::Available;
            person.current_delivery_id = None;
        }

        self.persist(DELIVERY_REQUESTS_SLOT, &self.delivery_requests);
        self.persist(DELIVERY_PERSONS_SLOT, &self.delivery_persons);
        Ok(())
    }

    /// Record a rating for a completed delivery and recompute the rated
    /// person's average, rounded to one decimal place.
    pub fn add_rating(&mut self, draft: NewRating) -> Result<Rating, StoreError> {
        let person_index = self
            .delivery_persons
            .iter()
            .position(|p| p.id == draft.delivery_person_id)
            .ok_or_else(|| StoreError::DeliveryPersonNotFound {
                id: draft.delivery_person_id.clone(),
            })?;

        let id = timestamp_id("rating", |candidate| {
            self.ratings.iter().any(|r| r.id == candidate)
        });
        let rating = Rating {
            id,
            delivery_id: draft.delivery_id,
            customer_id: draft.customer_id,
            delivery_person_id: draft.delivery_person_id,
            score: draft.score,
            comment: draft.comment,
            date: Utc::now().date_naive(),
        };
        self.ratings.push(rating.clone());

        let person = &mut self.delivery_persons[person_index];
        let scores: Vec<i64> = self
            .ratings
            .iter()
            .filter(|r| r.delivery_person_id == person.id)
            .map(|r| r.score)
            .collect();
        person.rating = round_to_tenth(scores.iter().sum::<i64>() as f64 / scores.len() as f64);

        self.persist(RATINGS_SLOT, &self.ratings);
        self.persist(DELIVERY_PERSONS_SLOT, &self.delivery_persons);
        Ok(rating)
    }

    /// Register a new delivery person, starting unrated and available.
    pub fn register_delivery_person(&mut self, draft: NewDeliveryPerson) -> DeliveryPerson {
        let id = timestamp_id("deliverer", |candidate| {
            self.delivery_persons.iter().any(|p| p.id == candidate)
        });
        let person = DeliveryPerson {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            rating: 0.0,
            total_deliveries: 0,
            availability_status: AvailabilityStatus::Available,
            current_delivery_id: None,
        };

        self.delivery_persons.push(person.clone());
        self.persist(DELIVERY_PERSONS_SLOT, &self.delivery_persons);
        person
    }

    pub fn get_delivery_person_by_id(&self, id: &str) -> Result<DeliveryPerson, StoreError> {
        self.delivery_persons
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::DeliveryPersonNotFound { id: id.to_string() })
    }

    /// The delivery requests the given user gets to see: customers only
    /// their own, deliverers only their assignments, staff everything.
    pub fn deliveries_for_user(&self, user: &User, tab: DeliveryTab) -> Vec<DeliveryRequest> {
        self.delivery_requests
            .iter()
            .filter(|request| {
                let visible = match user.role {
                    Role::Customer => request.customer_id == user.id,
                    Role::Deliverer => {
                        request.delivery_person_id.as_deref() == Some(user.id.as_str())
                    }
                    Role::Admin | Role::Worker => true,
                };

                visible
                    && match tab {
                        DeliveryTab::All => true,
                        DeliveryTab::Pending => request.status == DeliveryStatus::Pending,
                        DeliveryTab::InProgress => matches!(
                            request.status,
                            DeliveryStatus::Assigned | DeliveryStatus::InProgress
                        ),
                        DeliveryTab::Delivered => request.status == DeliveryStatus::Delivered,
                    }
            })
            .cloned()
            .collect()
    }

    /// Synchronously write every collection back to storage. Mutations
    /// already persist in the background; this is for orderly shutdown
    /// and for tests that immediately re-read storage.
    pub async fn flush(&self) -> crate::error::Result<()> {
        let payload = vec![
            (PRODUCTS_SLOT, serde_json::to_string(&self.products)?),
            (
                DELIVERY_REQUESTS_SLOT,
                serde_json::to_string(&self.delivery_requests)?,
            ),
            (
                DELIVERY_PERSONS_SLOT,
                serde_json::to_string(&self.delivery_persons)?,
            ),
            (RATINGS_SLOT, serde_json::to_string(&self.ratings)?),
        ];

        let storage = Arc::clone(&self.storage);
        task::spawn_blocking(move || {
            for (key, json) in payload {
                storage.write_slot(key, &json)?;
            }
            Ok::<_, crate::local_storage::StorageError>(())
        })
        .await??;
        Ok(())
    }

    /// Schedule a fire-and-forget write of one collection to its slot.
    fn persist<T: Serialize>(&self, key: &'static str, collection: &[T]) {
        let json = match serde_json::to_string(collection) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(key, %err, "failed to serialize collection");
                return;
            }
        };

        let storage = Arc::clone(&self.storage);
        task::spawn(async move {
            match task::spawn_blocking(move || storage.write_slot(key, &json)).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => tracing::error!(key, %err, "failed to persist collection"),
                Err(err) => tracing::error!(key, %err, "persistence task failed"),
            }
        });
    }
}

fn load_slot<T: DeserializeOwned>(
    storage: &CoreLocalStorage,
    key: &str,
    seed: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match storage.read_slot(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(key, %err, "stored collection failed to parse, using seed data");
                seed()
            }
        },
        Ok(None) => seed(),
        Err(err) => {
            tracing::error!(key, %err, "failed to read stored collection, using seed data");
            seed()
        }
    }
}

/// Time-based identifier, bumped past any collision so it stays unique
/// within the session even when two records land in the same millisecond.
fn timestamp_id(prefix: &str, exists: impl Fn(&str) -> bool) -> String {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let candidate = format!("{prefix}-{millis}");
        if !exists(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}

fn validate_product(product: &Product) -> Result<(), StoreError> {
    if product.quantity < 0 {
        return Err(StoreError::InvalidQuantity(product.quantity));
    }
    if product.price < 0.0 {
        return Err(StoreError::InvalidPrice(product.price));
    }
    if product.low_stock_threshold < 0 {
        return Err(StoreError::InvalidThreshold(product.low_stock_threshold));
    }
    Ok(())
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Product {id} not found")]
    ProductNotFound { id: String },

    #[error("Delivery request {id} not found")]
    DeliveryNotFound { id: String },

    #[error("Delivery person {id} not found")]
    DeliveryPersonNotFound { id: String },

    #[error("Quantity must not be negative, got {0}")]
    InvalidQuantity(i64),

    #[error("Price must not be negative, got {0}")]
    InvalidPrice(f64),

    #[error("Low-stock threshold must not be negative, got {0}")]
    InvalidThreshold(i64),

    #[error("Delivery status cannot change from {from} to {to}")]
    IllegalStatusTransition {
        from: DeliveryStatus,
        to: DeliveryStatus,
    },
}
