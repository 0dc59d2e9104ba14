//! Hosted-backend catalog reads.
//!
//! Talks to a PostgREST-style REST endpoint (`/rest/v1/<table>`), the API
//! shape exposed by hosted database services. Every read is an independent,
//! idempotent GET; a later successful fetch simply replaces whatever was
//! displayed before.

use crate::client::FetchClient;
use crate::rows::{CategoryRow, ProductRow};
use crate::FetchError;
use shop_commerce::prelude::*;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g., "https://xyz.supabase.co").
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
}

/// Catalog reads against the hosted backend.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: FetchClient,
}

impl RemoteCatalog {
    /// Create a remote catalog from connection settings.
    pub fn new(config: BackendConfig) -> Self {
        let client = FetchClient::new()
            .with_base_url(config.base_url)
            .with_default_header("apikey", config.api_key.clone())
            .with_default_header("Authorization", format!("Bearer {}", config.api_key));
        Self { client }
    }

    /// Fetch the full product collection.
    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.product_rows("/rest/v1/products?select=*").await
    }

    /// Fetch the full category collection.
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let rows: Vec<CategoryRow> = self
            .client
            .get("/rest/v1/categories?select=*")
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    /// Fetch products carrying the featured flag.
    pub async fn featured_products(&self) -> Result<Vec<Product>, FetchError> {
        self.product_rows("/rest/v1/products?select=*&featured=eq.true")
            .await
    }

    /// Fetch new arrivals.
    pub async fn new_products(&self) -> Result<Vec<Product>, FetchError> {
        self.product_rows("/rest/v1/products?select=*&new=eq.true")
            .await
    }

    /// Fetch products in a category.
    pub async fn products_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Product>, FetchError> {
        self.product_rows(&format!(
            "/rest/v1/products?select=*&category_id=eq.{}",
            category_id
        ))
        .await
    }

    /// Fetch a single product by ID. Absent rows come back as None.
    pub async fn product(&self, id: &ProductId) -> Result<Option<Product>, FetchError> {
        let mut products = self
            .product_rows(&format!("/rest/v1/products?select=*&id=eq.{}", id))
            .await?;
        Ok(if products.is_empty() {
            None
        } else {
            Some(products.remove(0))
        })
    }

    /// Fetch a single category by ID.
    pub async fn category(&self, id: &CategoryId) -> Result<Option<Category>, FetchError> {
        let rows: Vec<CategoryRow> = self
            .client
            .get(format!("/rest/v1/categories?select=*&id=eq.{}", id))
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(rows.into_iter().next().map(CategoryRow::into_category))
    }

    /// Fetch the full catalog (products and categories).
    pub async fn load(&self) -> Result<Catalog, FetchError> {
        let products = self.products().await?;
        let categories = self.categories().await?;
        Ok(Catalog::new(products, categories))
    }

    async fn product_rows(&self, path: &str) -> Result<Vec<Product>, FetchError> {
        let rows: Vec<ProductRow> = self
            .client
            .get(path)
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }
}
