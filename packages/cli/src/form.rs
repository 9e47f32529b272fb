// ABOUTME: Serves the requirement intake form
// ABOUTME: Single HTML page embedded in the binary at compile time

use axum::response::Html;

static FORM_PAGE: &str = include_str!("form.html");

pub async fn serve_form() -> Html<&'static str> {
    Html(FORM_PAGE)
}
