pub mod cart;
pub mod catalog;
pub mod error_paths;
pub mod harness;
pub mod health;
pub mod orders;
pub mod users;
