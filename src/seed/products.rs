//! Randomized product catalog used to seed an empty store.
//!
//! The catalog shape is deterministic: ten categories with fourteen
//! fixed product names each, identifiers assigned sequentially in
//! category order. Quantities, prices, dates and batch numbers are
//! randomized per generation.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;

use crate::models::product::{Product, ProductCategory};

const LOW_STOCK_THRESHOLD: i64 = 10;

fn product_names(category: ProductCategory) -> &'static [&'static str] {
    match category {
        ProductCategory::Electronics => &[
            "Smartphone", "Smart Watch", "Laptop", "Tablet", "Headphones",
            "Bluetooth Speaker", "Power Bank", "USB Drive", "Wireless Mouse",
            "Keyboard", "Monitor", "Camera", "Printer", "External Hard Drive",
        ],
        ProductCategory::Food => &[
            "Apple", "Banana", "Orange", "Milk", "Bread",
            "Eggs", "Cheese", "Cereal", "Pasta", "Rice",
            "Chocolate", "Coffee Beans", "Tea Bags", "Honey",
        ],
        ProductCategory::Clothing => &[
            "T-shirt", "Jeans", "Dress", "Jacket", "Sweater",
            "Socks", "Underwear", "Hat", "Gloves", "Scarf",
            "Shoes", "Sandals", "Belt", "Sunglasses",
        ],
        ProductCategory::Furniture => &[
            "Chair", "Table", "Sofa", "Bed", "Bookshelf",
            "Desk", "Drawer", "Lamp", "Mirror", "Cabinet",
            "Wardrobe", "Ottoman", "Nightstand", "Dining Set",
        ],
        ProductCategory::HomeAppliances => &[
            "Refrigerator", "Microwave", "Toaster", "Blender", "Coffee Maker",
            "Mixer Grinder", "Air Conditioner", "Vacuum Cleaner", "Iron", "Washing Machine",
            "Dishwasher", "Air Purifier", "Food Processor", "Electric Kettle",
        ],
        ProductCategory::Toys => &[
            "Action Figure", "Doll", "Board Game", "Puzzle", "Teddy Bear",
            "Toy Car", "Building Blocks", "Remote Control Car", "Toy Train", "Kite",
            "Toy Robot", "Art Set", "Toy Kitchen", "Educational Toy",
        ],
        ProductCategory::Books => &[
            "Novel", "Textbook", "Cookbook", "Biography", "Self-Help Book",
            "Children's Book", "Comic Book", "Dictionary", "Magazine", "Encyclopedia",
            "Travel Guide", "Art Book", "Science Book", "History Book",
        ],
        ProductCategory::HealthBeauty => &[
            "Shampoo", "Conditioner", "Toothpaste", "Soap", "Face Wash",
            "Moisturizer", "Perfume", "Deodorant", "Makeup Kit", "Hairdryer",
            "Razor", "Trimmer", "Face Mask", "Hand Sanitizer",
        ],
        ProductCategory::SportsOutdoors => &[
            "Basketball", "Football", "Tennis Racket", "Golf Club", "Bicycle",
            "Yoga Mat", "Dumbbells", "Running Shoes", "Swim Goggles", "Tent",
            "Sleeping Bag", "Fishing Rod", "Cricket Bat", "Hockey Stick",
        ],
        ProductCategory::Automotive => &[
            "Car Battery", "Engine Oil", "Tire", "Windshield Wiper", "Car Seat Cover",
            "Air Freshener", "Car Charger", "GPS Navigator", "Car Cleaning Kit", "Jumper Cable",
            "Fuel Additive", "Car Polish", "Floor Mat", "Steering Wheel Cover",
        ],
    }
}

fn image_slug(category: ProductCategory) -> &'static str {
    match category {
        ProductCategory::Electronics => "gadgets",
        ProductCategory::Food => "food",
        ProductCategory::Clothing => "fashion",
        ProductCategory::Furniture => "furniture",
        ProductCategory::HomeAppliances => "home",
        ProductCategory::Toys => "toys",
        ProductCategory::Books => "books",
        ProductCategory::HealthBeauty => "beauty",
        ProductCategory::SportsOutdoors => "sports",
        ProductCategory::Automotive => "auto",
    }
}

fn product_image(category: ProductCategory, name: &str) -> String {
    let normalized = name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
    format!(
        "https://source.unsplash.com/featured/?{},{}",
        image_slug(category),
        normalized
    )
}

fn random_date<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    start + Duration::days(rng.random_range(0..=span))
}

/// Generate a fresh product catalog.
pub fn generate_products() -> Vec<Product> {
    let mut rng = rand::rng();
    let today = Utc::now().date_naive();
    let three_years_ago = today - Duration::days(3 * 365);
    let two_years_ahead = today + Duration::days(2 * 365);

    let mut products = Vec::new();
    let mut id: u32 = 1;

    for category in ProductCategory::ALL {
        for name in product_names(category) {
            products.push(Product {
                id: id.to_string(),
                name: (*name).to_string(),
                category,
                quantity: rng.random_range(5..105),
                price: (rng.random_range(10.0f64..1000.0) * 100.0).round() / 100.0,
                manufacturing_date: random_date(&mut rng, three_years_ago, today),
                expiry_date: random_date(&mut rng, today, two_years_ahead),
                batch_number: format!("BATCH-{:06}", rng.random_range(0..1_000_000)),
                description: format!("High-quality {} for your needs.", name.to_lowercase()),
                image: product_image(category, name),
                qr_code: format!(
                    "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=product-{}",
                    id
                ),
                low_stock_threshold: LOW_STOCK_THRESHOLD,
            });
            id += 1;
        }
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape_is_deterministic() {
        let products = generate_products();

        assert_eq!(products.len(), 140);
        for category in ProductCategory::ALL {
            assert_eq!(products.iter().filter(|p| p.category == category).count(), 14);
        }

        // Sequential ids in generation order.
        for (index, product) in products.iter().enumerate() {
            assert_eq!(product.id, (index + 1).to_string());
        }
    }

    #[test]
    fn generated_values_stay_in_range() {
        let products = generate_products();
        let today = Utc::now().date_naive();

        for product in &products {
            assert!((5..=104).contains(&product.quantity), "quantity {}", product.quantity);
            assert!(product.price >= 10.0 && product.price < 1000.0);
            assert!(product.manufacturing_date <= today);
            assert!(product.expiry_date >= today);
            assert_eq!(product.low_stock_threshold, 10);
            assert!(product.batch_number.starts_with("BATCH-"));
            assert_eq!(product.batch_number.len(), "BATCH-".len() + 6);
        }
    }

    #[test]
    fn qr_payload_carries_the_product_id() {
        let products = generate_products();
        let product = &products[41];
        assert!(product.qr_code.ends_with(&format!("data=product-{}", product.id)));
    }
}
