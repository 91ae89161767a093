pub mod cases;
pub mod models;

pub use cases::OrderLifecycle;
pub use models::{NewOrder, OrderItem, ShippingAddress, PENDING_STATUS};
