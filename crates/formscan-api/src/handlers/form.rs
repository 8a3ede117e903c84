//! Browser upload form served at `/`.

use axum::response::Html;

const UPLOAD_FORM_HTML: &str = include_str!("../../assets/upload_form.html");

pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM_HTML)
}
