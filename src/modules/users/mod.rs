pub mod cases;
pub mod models;

pub use cases::UserAccount;
pub use models::{Credentials, NewUser};
