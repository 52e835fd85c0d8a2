use std::sync::Arc;

use puppybowl_app::{api::HttpRosterApi, config::Config};
use puppybowl_types::errors::ApplicationError;
use puppybowl_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let config = Config::from_env();
    let _log_guard = setup_logging(&config.log_dir);
    tracing::info!("Roster API: {}", config.cohort_url());

    let api = Arc::new(HttpRosterApi::new(&config));
    let state = AppState::new(api);
    state.client.init(&state.document).await;

    WebRouter::serve(state, config.port).await
}
