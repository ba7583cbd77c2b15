pub mod delivery;
pub mod delivery_person;
pub mod product;
pub mod rating;
pub mod user;

pub use delivery::{DeliveryRequest, DeliveryStatus, NewDeliveryRequest, PaymentStatus};
pub use delivery_person::{AvailabilityStatus, DeliveryPerson, NewDeliveryPerson};
pub use product::{Product, ProductCategory};
pub use rating::{NewRating, Rating};
pub use user::{NewUser, Role, User};
