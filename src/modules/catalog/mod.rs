pub mod cases;
pub mod models;

pub use cases::{CreateCategory, CreateProduct, ListCategories, ListProducts, ProductPage};
pub use models::{NewCategory, NewProduct, ProductVariant, CATEGORY_NAME, PRODUCT_NAME, SEARCH_TERM};
