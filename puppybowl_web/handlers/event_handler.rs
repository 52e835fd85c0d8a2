use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use puppybowl_types::player::PlayerDraft;

use crate::{
    dom::{Control, DomEvent, NodeId},
    http::AppState,
};

/// Fields of the creation form, as typed by the user.
#[derive(Debug, Default, Deserialize)]
pub struct NewPlayerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub status: String,
}

impl From<NewPlayerForm> for PlayerDraft {
    fn from(form: NewPlayerForm) -> Self {
        PlayerDraft {
            name: form.name,
            breed: form.breed,
            status: form.status,
        }
    }
}

/// POST /nodes/{node_id}/{control} – A button click on a rendered node.
pub async fn click(
    State(state): State<AppState>,
    Path((node_id, control)): Path<(u64, String)>,
) -> Response {
    let control = match control.parse::<Control>() {
        Ok(Control::Submit) | Err(_) => {
            return (StatusCode::NOT_FOUND, "Unknown control.").into_response();
        }
        Ok(control) => control,
    };

    let event = DomEvent {
        target: NodeId(node_id),
        control,
    };
    state.client.dispatch(&state.document, event).await;
    Redirect::to("/").into_response()
}

/// POST /forms/new-player – Submit of the creation form.
pub async fn submit_new_player(
    State(state): State<AppState>,
    Form(form): Form<NewPlayerForm>,
) -> Response {
    state.client.submit_form(&state.document, form.into()).await;
    Redirect::to("/").into_response()
}
