use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use puppybowl_types::Result;

/// Helper: turn rendered HTML into a response, or a 500 on error
pub fn html_response(rendered: Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Template render error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
        }
    }
}
