//! NextCommerce storefront - streaming SSR pages.
//!
//! One Spin component serves the whole site: home, product listing with
//! filters, product detail, category pages, cart, and account. Every page
//! follows the shell-first pattern: the HTML shell with site chrome is
//! flushed before the catalog is fetched, then the page sections stream
//! in as they render.

mod routes;
mod sections;
mod styles;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use shop_commerce::catalog::Catalog;
use shop_data::{BackendConfig, CatalogSource};
use shop_runtime::{HeadContent, RequestContext, Shell, StreamingSink, StructuredLogger};

use routes::Route;

/// Storefront page handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    // Only handle GET requests
    if req.method() != Method::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(path_with_query);
    let logger = StructuredLogger::new(ctx.request_id.clone()).with_route(ctx.path.clone());

    let route = Route::from_path(&ctx.path);

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
    ];

    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(route.status_code()).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    // Send shell first (streaming SSR)
    let shell = create_shell(&route);
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger
            .error_builder("failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }

    // Fetch the catalog; a failed read renders as the empty catalog.
    let source = CatalogSource::from_config(backend_config());
    let catalog = match source.load().await {
        Ok(catalog) => catalog,
        Err(e) => {
            logger
                .error_builder("catalog load failed")
                .field("error", e.to_string())
                .emit();
            Catalog::empty()
        }
    };

    if let Err(e) = routes::render(&route, &catalog, &ctx, &mut sink).await {
        logger
            .error_builder("failed to stream page")
            .field("error", e.to_string())
            .emit();
        return;
    }

    let _ = sink.send_section("closing", &shell.render_closing()).await;
    sink.complete();

    logger
        .info_builder("request served")
        .field("route", route.name())
        .field_i64("products", catalog.products.len() as i64)
        .field_i64("sections", sink.sections_sent().len() as i64)
        .emit();
}

/// Read backend connection settings from Spin variables.
///
/// Both `backend_url` and `backend_key` must be set and non-empty; otherwise
/// the storefront falls back to the compiled-in seed catalog.
fn backend_config() -> Option<BackendConfig> {
    let base_url = spin_sdk::variables::get("backend_url").ok()?;
    let api_key = spin_sdk::variables::get("backend_key").ok()?;
    if base_url.is_empty() || api_key.is_empty() {
        return None;
    }
    Some(BackendConfig { base_url, api_key })
}

/// Create the shell with the site chrome for a route.
fn create_shell(route: &Route) -> Shell {
    let head = HeadContent::new(route.title())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "NextCommerce - modern shopping, unbeatable prices")
        .with_style(styles::STOREFRONT_STYLES);

    Shell::new(head)
        .with_body_start(
            r#"<body>
<header class="site-header">
    <a href="/" class="logo">NextCommerce</a>
    <nav class="header-nav">
        <a href="/">Home</a>
        <a href="/products">Products</a>
        <a href="/cart">Cart</a>
        <a href="/account">Account</a>
    </nav>
</header>
<main>
"#,
        )
        .with_body_end(
            r#"</main>
<footer class="site-footer">
    <div class="footer-inner">
        <span class="footer-brand">NextCommerce</span>
        <nav class="footer-nav">
            <a href="/products">Shop</a>
            <a href="/cart">Cart</a>
            <a href="/account">Account</a>
        </nav>
        <span class="footer-note">Modern shopping, unbeatable prices.</span>
    </div>
</footer>
</body>
</html>"#,
        )
}
