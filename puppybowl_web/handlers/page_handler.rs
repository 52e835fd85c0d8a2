use axum::{extract::State, response::Response};

use crate::{handlers::html_response, http::AppState, render::render_page};

/// GET / – The current document as a full page.
pub async fn page(State(state): State<AppState>) -> Response {
    let document = state.document.lock().await;
    html_response(render_page(&document))
}
