pub mod deliveries;
pub mod products;
