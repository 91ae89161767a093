pub mod cases;
pub mod models;

pub use cases::{CartLifecycle, ClearCart};
pub use models::{new_session_id, CartItemRequest, ClearCartRequest};
