//! URL routing and per-route section streaming.

use shop_commerce::catalog::{Catalog, CatalogQuery};
use shop_commerce::ids::{CategoryId, ProductId};
use shop_runtime::{RequestContext, RuntimeError, StreamingSink};

use crate::sections;

/// The storefront's routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - hero, featured products, categories, newsletter.
    Home,
    /// `/products` - the filterable listing.
    Listing,
    /// `/products/category/{id}` - one category's products.
    Category(CategoryId),
    /// `/products/{id}` - product detail with related items.
    Product(ProductId),
    /// `/cart` - the shopping cart.
    Cart,
    /// `/account` - profile and order history.
    Account,
    /// Anything else.
    NotFound,
}

impl Route {
    /// Resolve a request path to a route.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Listing,
            ["products", "category", id] => Route::Category(CategoryId::new(*id)),
            ["products", id] => Route::Product(ProductId::new(*id)),
            ["cart"] => Route::Cart,
            ["account"] => Route::Account,
            _ => Route::NotFound,
        }
    }

    /// HTTP status for the route, known before any data is fetched.
    pub fn status_code(&self) -> u16 {
        match self {
            Route::NotFound => 404,
            _ => 200,
        }
    }

    /// Route name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Listing => "listing",
            Route::Category(_) => "category",
            Route::Product(_) => "product",
            Route::Cart => "cart",
            Route::Account => "account",
            Route::NotFound => "not_found",
        }
    }

    /// Page title for the shell head.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "NextCommerce - Modern Shopping",
            Route::Listing => "All Products | NextCommerce",
            Route::Category(_) => "Shop by Category | NextCommerce",
            Route::Product(_) => "Product Details | NextCommerce",
            Route::Cart => "Shopping Cart | NextCommerce",
            Route::Account => "My Account | NextCommerce",
            Route::NotFound => "Page Not Found | NextCommerce",
        }
    }
}

/// Stream the sections for a route, in page order.
pub async fn render<S, E>(
    route: &Route,
    catalog: &Catalog,
    ctx: &RequestContext,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), RuntimeError>
where
    S: futures::Sink<Vec<u8>, Error = E> + Unpin,
    E: std::fmt::Display,
{
    match route {
        Route::Home => {
            sink.send_section("hero", &sections::render_hero()).await?;
            sink.send_section(
                "featured",
                &sections::render_featured(&catalog.featured_products()),
            )
            .await?;
            sink.send_section(
                "new-arrivals",
                &sections::render_new_arrivals(&catalog.new_products()),
            )
            .await?;
            sink.send_section("categories", &sections::render_category_tiles(&catalog.categories))
                .await?;
            sink.send_section("newsletter", &sections::render_newsletter())
                .await?;
        }
        Route::Listing => {
            let query = CatalogQuery::from_query_string(&ctx.query);
            let products = query.apply(&catalog.products);

            sink.send_section(
                "listing-header",
                &sections::render_listing_header(&query, products.len()),
            )
            .await?;
            sink.send_section("layout-start", r#"<div class="listing-layout">"#)
                .await?;
            sink.send_section("filters", &sections::render_filters(&catalog.categories, &query))
                .await?;
            if products.is_empty() {
                sink.send_section("products", &sections::render_empty_listing())
                    .await?;
            } else {
                sink.send_section("products", &sections::render_product_grid(&products))
                    .await?;
            }
            sink.send_section("layout-end", "</div>").await?;
        }
        Route::Category(id) => match catalog.category(id) {
            Some(category) => {
                let products = catalog.products_in_category(id);
                sink.send_section(
                    "category-header",
                    &sections::render_category_header(category, products.len()),
                )
                .await?;
                sink.send_section("products", &sections::render_category_grid(&products))
                    .await?;
            }
            None => {
                sink.send_section("not-found", &sections::render_category_not_found(id))
                    .await?;
            }
        },
        Route::Product(id) => match catalog.product(id) {
            Some(product) => {
                sink.send_section("product", &sections::render_product_detail(product))
                    .await?;
                let related = sections::related_products(catalog, product);
                sink.send_section("related", &sections::render_related(&related))
                    .await?;
            }
            None => {
                sink.send_section("not-found", &sections::render_product_not_found(id))
                    .await?;
            }
        },
        Route::Cart => {
            let cart = sections::demo_cart(catalog);
            sink.send_section("cart", &sections::render_cart(&cart)).await?;
        }
        Route::Account => {
            sink.send_section("account", &sections::render_account()).await?;
        }
        Route::NotFound => {
            sink.send_section("not-found", &sections::render_not_found(&ctx.path))
                .await?;
        }
    }

    Ok(())
}
