use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

pub const CATEGORY_NAME: &str = "Electronics";
pub const SEARCH_TERM: &str = "smartphone";
pub const PRODUCT_NAME: &str = "Bad-Wolf® Smartphone";

/// Smartphone list price, 699.99
pub fn smartphone_price() -> Decimal {
    Decimal::new(69_999, 2)
}

/// Body of POST /categories
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub slug: String,
}

impl NewCategory {
    pub fn electronics() -> Self {
        Self {
            name: CATEGORY_NAME.to_string(),
            description: "Electronic devices and gadgets".to_string(),
            slug: "electronics".to_string(),
        }
    }
}

/// Body of POST /products
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub stock: u32,
    pub variants: Vec<ProductVariant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
}

impl ProductVariant {
    fn new(name: &str, price: Decimal, stock: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price,
            stock,
        }
    }
}

impl NewProduct {
    /// Smartphone in two storage variants; stock is the sum of the variants' stock
    pub fn smartphone() -> Self {
        let variants = vec![
            ProductVariant::new("64GB Black", smartphone_price(), 25),
            ProductVariant::new("128GB White", Decimal::new(79_999, 2), 25),
        ];

        Self {
            name: PRODUCT_NAME.to_string(),
            description: "Latest smartphone with advanced features".to_string(),
            price: smartphone_price(),
            category: CATEGORY_NAME.to_string(),
            image: "https://example.com/smartphone.jpg".to_string(),
            stock: variants.iter().map(|v| v.stock).sum(),
            variants,
        }
    }
}
