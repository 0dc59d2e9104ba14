//! Catalog data access for the NextCommerce storefront.
//!
//! The storefront is agnostic to where its catalog comes from: a static
//! seed catalog compiled into the binary, or a hosted database backend
//! reached over REST. `CatalogSource` picks between them and degrades a
//! failed remote read to an empty catalog, which the pages render as their
//! empty state.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::{BackendConfig, CatalogSource};
//!
//! let source = match backend_config {
//!     Some(config) => CatalogSource::remote(config),
//!     None => CatalogSource::Static,
//! };
//! let catalog = source.load().await;
//! ```

mod client;
mod error;
mod rows;

pub mod remote;
pub mod seed;

pub use client::{FetchClient, RequestBuilder, Response};
pub use error::FetchError;
pub use remote::{BackendConfig, RemoteCatalog};
pub use rows::{CategoryRow, ProductRow};

use shop_commerce::catalog::Catalog;

/// Where the catalog is read from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// The compiled-in seed catalog.
    Static,
    /// A hosted backend reached over REST.
    Remote(RemoteCatalog),
}

impl CatalogSource {
    /// Create a remote source from connection settings.
    pub fn remote(config: BackendConfig) -> Self {
        CatalogSource::Remote(RemoteCatalog::new(config))
    }

    /// Pick the source: remote when settings are present, static otherwise.
    pub fn from_config(config: Option<BackendConfig>) -> Self {
        match config {
            Some(config) => Self::remote(config),
            None => CatalogSource::Static,
        }
    }

    /// Load the full catalog.
    ///
    /// A failed remote read surfaces as `Err`; callers treat that as an
    /// empty catalog. The static source cannot fail.
    pub async fn load(&self) -> Result<Catalog, FetchError> {
        match self {
            CatalogSource::Static => Ok(seed::catalog()),
            CatalogSource::Remote(remote) => remote.load().await,
        }
    }

    /// Load, degrading failures to an empty catalog.
    pub async fn load_or_empty(&self) -> Catalog {
        self.load().await.unwrap_or_else(|_| Catalog::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection() {
        assert!(matches!(
            CatalogSource::from_config(None),
            CatalogSource::Static
        ));
        let config = BackendConfig {
            base_url: "https://xyz.supabase.co".to_string(),
            api_key: "anon".to_string(),
        };
        assert!(matches!(
            CatalogSource::from_config(Some(config)),
            CatalogSource::Remote(_)
        ));
    }

    #[test]
    fn test_static_load() {
        let catalog = futures::executor::block_on(CatalogSource::Static.load()).unwrap();
        assert_eq!(catalog.products.len(), 8);
    }
}
