use axum::response::Html;

use crate::spotify::page;

pub async fn home() -> Html<String> {
    Html(page::render_home())
}
