use axum::{
    Router,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use puppybowl_app::api::RosterApi;
use puppybowl_types::{Result, errors::ApplicationError};

use crate::{
    client::RosterClient,
    dom::{Document, SharedDocument},
    handlers::{click, page, submit_new_player},
};

#[derive(Clone)]
pub struct AppState {
    pub client: RosterClient,
    pub document: SharedDocument,
}

impl AppState {
    pub fn new(api: Arc<dyn RosterApi>) -> AppState {
        AppState {
            client: RosterClient::new(api),
            document: Document::new().shared(),
        }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(page))
            .route("/nodes/{node_id}/{control}", post(click))
            .route("/forms/new-player", post(submit_new_player))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(infra_error)?;

        tracing::info!("HTTP Server started, listening on http://{}", addr);
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
