//! 404 page section.

use super::common::html_escape;

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Page not found</h1>
    <p>There's nothing at <code>{}</code>.</p>
    <a href="/" class="empty-action">Back to home</a>
</section>"#,
        html_escape(path)
    )
}
