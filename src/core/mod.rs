pub mod error;
pub mod expect;
pub mod traits;

pub use error::{HarnessError, Result};
pub use traits::Case;
