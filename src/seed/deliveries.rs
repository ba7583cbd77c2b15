//! Fixed sample deliveries, delivery personnel and ratings used to seed
//! an empty store. Unlike the product catalog these are fully
//! deterministic, so a first run always starts from the same state.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::models::delivery::{DeliveryRequest, DeliveryStatus, PaymentStatus};
use crate::models::delivery_person::{AvailabilityStatus, DeliveryPerson};
use crate::models::rating::Rating;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

static DELIVERY_REQUESTS: Lazy<Vec<DeliveryRequest>> = Lazy::new(|| {
    vec![
        DeliveryRequest {
            id: "1".to_string(),
            customer_id: "customer1".to_string(),
            customer_name: "John Doe".to_string(),
            product_ids: ids(&["1", "5", "10"]),
            status: DeliveryStatus::Pending,
            address: "123 Main St, New York, NY 10001".to_string(),
            request_date: date(2023, 10, 15),
            delivery_date: None,
            delivery_person_id: None,
            payment_status: PaymentStatus::Pending,
            total_amount: 245.98,
        },
        DeliveryRequest {
            id: "2".to_string(),
            customer_id: "customer2".to_string(),
            customer_name: "Jane Smith".to_string(),
            product_ids: ids(&["3", "7"]),
            status: DeliveryStatus::Assigned,
            address: "456 Elm St, Los Angeles, CA 90001".to_string(),
            request_date: date(2023, 10, 14),
            delivery_date: None,
            delivery_person_id: Some("deliverer1".to_string()),
            payment_status: PaymentStatus::Completed,
            total_amount: 132.50,
        },
        DeliveryRequest {
            id: "3".to_string(),
            customer_id: "customer3".to_string(),
            customer_name: "Robert Johnson".to_string(),
            product_ids: ids(&["12", "15", "18"]),
            status: DeliveryStatus::InProgress,
            address: "789 Oak St, Chicago, IL 60007".to_string(),
            request_date: date(2023, 10, 13),
            delivery_date: None,
            delivery_person_id: Some("deliverer2".to_string()),
            payment_status: PaymentStatus::Completed,
            total_amount: 189.75,
        },
        DeliveryRequest {
            id: "4".to_string(),
            customer_id: "customer4".to_string(),
            customer_name: "Emily Davis".to_string(),
            product_ids: ids(&["22", "25"]),
            status: DeliveryStatus::Delivered,
            address: "101 Pine St, Miami, FL 33101".to_string(),
            request_date: date(2023, 10, 10),
            delivery_date: Some(date(2023, 10, 12)),
            delivery_person_id: Some("deliverer1".to_string()),
            payment_status: PaymentStatus::Completed,
            total_amount: 75.99,
        },
        DeliveryRequest {
            id: "5".to_string(),
            customer_id: "customer5".to_string(),
            customer_name: "Michael Wilson".to_string(),
            product_ids: ids(&["30", "35", "40"]),
            status: DeliveryStatus::Delivered,
            address: "202 Maple St, Seattle, WA 98101".to_string(),
            request_date: date(2023, 10, 8),
            delivery_date: Some(date(2023, 10, 11)),
            delivery_person_id: Some("deliverer3".to_string()),
            payment_status: PaymentStatus::Completed,
            total_amount: 312.45,
        },
        DeliveryRequest {
            id: "6".to_string(),
            customer_id: "customer1".to_string(),
            customer_name: "John Doe".to_string(),
            product_ids: ids(&["2", "8"]),
            status: DeliveryStatus::Cancelled,
            address: "123 Main St, New York, NY 10001".to_string(),
            request_date: date(2023, 10, 5),
            delivery_date: None,
            delivery_person_id: None,
            payment_status: PaymentStatus::Pending,
            total_amount: 99.50,
        },
    ]
});

static DELIVERY_PERSONS: Lazy<Vec<DeliveryPerson>> = Lazy::new(|| {
    vec![
        DeliveryPerson {
            id: "deliverer1".to_string(),
            name: "David Thompson".to_string(),
            email: "david.t@logistics.com".to_string(),
            phone: "555-1234".to_string(),
            rating: 4.8,
            total_deliveries: 157,
            availability_status: AvailabilityStatus::Busy,
            current_delivery_id: Some("2".to_string()),
        },
        DeliveryPerson {
            id: "deliverer2".to_string(),
            name: "Sarah Rodriguez".to_string(),
            email: "sarah.r@logistics.com".to_string(),
            phone: "555-5678".to_string(),
            rating: 4.5,
            total_deliveries: 123,
            availability_status: AvailabilityStatus::Busy,
            current_delivery_id: Some("3".to_string()),
        },
        DeliveryPerson {
            id: "deliverer3".to_string(),
            name: "Kevin Chen".to_string(),
            email: "kevin.c@logistics.com".to_string(),
            phone: "555-9012".to_string(),
            rating: 4.9,
            total_deliveries: 89,
            availability_status: AvailabilityStatus::Available,
            current_delivery_id: None,
        },
        DeliveryPerson {
            id: "deliverer4".to_string(),
            name: "Michelle Lee".to_string(),
            email: "michelle.l@logistics.com".to_string(),
            phone: "555-3456".to_string(),
            rating: 4.7,
            total_deliveries: 72,
            availability_status: AvailabilityStatus::Offline,
            current_delivery_id: None,
        },
        DeliveryPerson {
            id: "deliverer5".to_string(),
            name: "James Brown".to_string(),
            email: "james.b@logistics.com".to_string(),
            phone: "555-7890".to_string(),
            rating: 4.6,
            total_deliveries: 54,
            availability_status: AvailabilityStatus::Available,
            current_delivery_id: None,
        },
    ]
});

static RATINGS: Lazy<Vec<Rating>> = Lazy::new(|| {
    vec![
        Rating {
            id: "rating1".to_string(),
            delivery_id: "4".to_string(),
            customer_id: "customer4".to_string(),
            delivery_person_id: "deliverer1".to_string(),
            score: 5,
            comment: "Very professional and delivered on time!".to_string(),
            date: date(2023, 10, 12),
        },
        Rating {
            id: "rating2".to_string(),
            delivery_id: "5".to_string(),
            customer_id: "customer5".to_string(),
            delivery_person_id: "deliverer3".to_string(),
            score: 4,
            comment: "Good service, but was slightly late.".to_string(),
            date: date(2023, 10, 11),
        },
    ]
});

pub fn delivery_requests() -> Vec<DeliveryRequest> {
    DELIVERY_REQUESTS.clone()
}

pub fn delivery_persons() -> Vec<DeliveryPerson> {
    DELIVERY_PERSONS.clone()
}

pub fn ratings() -> Vec<Rating> {
    RATINGS.clone()
}
