use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::core::expect::{require_array, require_field};
use crate::core::{Case, HarnessError, Result};
use crate::modules::harness::{CaseContext, CreatedResource, Creation, ResourceKind};

use super::models::{NewCategory, NewProduct};

/// POST /categories
pub struct CreateCategory {
    category: NewCategory,
}

impl CreateCategory {
    pub fn new(category: NewCategory) -> Self {
        Self { category }
    }
}

#[async_trait]
impl Case for CreateCategory {
    type Output = CreatedResource;

    fn name(&self) -> &str {
        "Create Category"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<CreatedResource> {
        let creation = Creation {
            check: self.name(),
            kind: ResourceKind::Category,
            path: "categories",
            action: "Category creation",
            echo_field: "name",
            echo_value: &self.category.name,
            success_message: "Category created successfully",
        };
        ctx.create(creation, &self.category).await
    }
}

/// GET /categories
pub struct ListCategories;

#[async_trait]
impl Case for ListCategories {
    type Output = Vec<Value>;

    fn name(&self) -> &str {
        "Get Categories"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<Vec<Value>> {
        let check = self.name();
        let body = ctx
            .client()
            .get("categories")
            .await?
            .expect_json(StatusCode::OK, check, "Get categories")?;

        let categories = require_array(&body, check, "Categories response is not a list")?.clone();
        ctx.pass(
            check,
            format!("Retrieved {} categories", categories.len()),
            Some(json!({ "count": categories.len() })),
        );
        Ok(categories)
    }
}

/// POST /products
pub struct CreateProduct {
    product: NewProduct,
}

impl CreateProduct {
    pub fn new(product: NewProduct) -> Self {
        Self { product }
    }
}

#[async_trait]
impl Case for CreateProduct {
    type Output = CreatedResource;

    fn name(&self) -> &str {
        "Create Product"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<CreatedResource> {
        let creation = Creation {
            check: self.name(),
            kind: ResourceKind::Product,
            path: "products",
            action: "Product creation",
            echo_field: "name",
            echo_value: &self.product.name,
            success_message: "Product created successfully",
        };
        ctx.create(creation, &self.product).await
    }
}

/// GET /products, then filtered by category, then by search term
///
/// The unfiltered listing gates the other two; the filtered listings are
/// checked independently of each other.
pub struct ListProducts {
    category: String,
    search: String,
}

/// One page of the product listing
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Value>,
    pub pagination: Value,
}

impl ListProducts {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }
}

async fn fetch_page(ctx: &CaseContext<'_>, check: &str, query: &[(&str, &str)]) -> Result<ProductPage> {
    let body = ctx
        .client()
        .get_with_query("products", query)
        .await?
        .expect_json(StatusCode::OK, check, "Get products")?;

    const MISSING: &str = "Products response missing expected structure";
    let products = require_field(&body, "products", check, MISSING)?;
    let products = require_array(products, check, MISSING)?.clone();
    let pagination = require_field(&body, "pagination", check, MISSING)?.clone();

    if pagination.is_null() {
        return Err(HarnessError::assertion(check, MISSING));
    }

    Ok(ProductPage { products, pagination })
}

#[async_trait]
impl Case for ListProducts {
    type Output = ProductPage;

    fn name(&self) -> &str {
        "Get Products"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<ProductPage> {
        let check = self.name();
        let page = fetch_page(ctx, check, &[]).await?;
        ctx.pass(
            check,
            format!("Retrieved {} products", page.products.len()),
            Some(json!({ "count": page.products.len(), "pagination": page.pagination })),
        );

        const BY_CATEGORY: &str = "Filter Products by Category";
        let filtered = fetch_page(ctx, BY_CATEGORY, &[("category", self.category.as_str())]).await;
        if let Some(filtered) = ctx.settle(filtered)? {
            ctx.pass(
                BY_CATEGORY,
                format!("Retrieved {} {} products", filtered.products.len(), self.category),
                None,
            );
        }

        const SEARCH: &str = "Search Products";
        let searched = fetch_page(ctx, SEARCH, &[("search", self.search.as_str())]).await;
        if let Some(searched) = ctx.settle(searched)? {
            ctx.pass(
                SEARCH,
                format!("Search returned {} products", searched.products.len()),
                None,
            );
        }

        Ok(page)
    }
}
