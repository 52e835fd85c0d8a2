//! The roster client: fetches from the remote API and re-renders the document.
//!
//! Every operation here is a boundary. Failures are logged and swallowed; the
//! page simply does not update.

use std::sync::Arc;

use puppybowl_app::api::RosterApi;
use puppybowl_types::{
    Result,
    envelope::{NewPlayerEnvelope, RosterEnvelope},
    errors::ApiError,
    player::{Player, PlayerDraft, PlayerId},
};

use crate::{
    dom::{Action, Control, Document, DomEvent, SharedDocument},
    render,
};

#[derive(Clone)]
pub struct RosterClient {
    api: Arc<dyn RosterApi>,
}

impl RosterClient {
    pub fn new(api: Arc<dyn RosterApi>) -> Self {
        Self { api }
    }

    /// Fetches, renders the roster, then the creation form.
    pub async fn init(&self, document: &SharedDocument) {
        let roster = self.fetch_all_players().await;
        if let Some(envelope) = &roster {
            let count = envelope.data.as_ref().map_or(0, |d| d.players.len());
            tracing::info!("Fetched {count} players");
        }

        let mut document = document.lock().await;
        self.render_roster(&mut document, roster.as_ref());
        self.render_creation_form(&mut document);
    }

    pub async fn fetch_all_players(&self) -> Option<RosterEnvelope> {
        match self.api.list_players().await {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                tracing::error!("Uh oh, trouble fetching players! {e}");
                None
            }
        }
    }

    pub async fn fetch_player_by_id(&self, id: PlayerId) -> Option<Player> {
        match self.try_fetch_player(id).await {
            Ok(player) => Some(player),
            Err(e) => {
                tracing::error!("Oh no, trouble fetching player #{id}! {e}");
                None
            }
        }
    }

    async fn try_fetch_player(&self, id: PlayerId) -> Result<Player> {
        let envelope = self.api.get_player(id).await?;
        let data = envelope.data.ok_or(ApiError::MissingData("data.player"))?;
        Ok(data.player)
    }

    /// Sends the draft as typed. The response status is not checked.
    pub async fn create_player(&self, draft: &PlayerDraft) -> Option<NewPlayerEnvelope> {
        match self.api.create_player(draft).await {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                tracing::error!("Uh oh, trouble adding {}! {e}", draft.name);
                None
            }
        }
    }

    /// Removes a player and refreshes the roster whatever the API answered.
    pub async fn delete_player(&self, document: &SharedDocument, id: PlayerId) {
        if let Err(e) = self.api.delete_player(id).await {
            tracing::error!("Whoops, trouble removing player #{id} from the roster! {e}");
            return;
        }
        self.refresh_roster(document).await;
    }

    pub fn render_roster(&self, document: &mut Document, roster: Option<&RosterEnvelope>) {
        if let Err(e) = render::render_roster(document, roster) {
            tracing::error!("Uh oh, trouble rendering players! {e}");
        }
    }

    /// Fetches one player and prepends a detail overlay for it.
    pub async fn render_player_details(&self, document: &SharedDocument, id: PlayerId) {
        let Some(player) = self.fetch_player_by_id(id).await else {
            return;
        };

        let mut document = document.lock().await;
        if let Err(e) = render::prepend_player_details(&mut document, &player) {
            tracing::error!("Oh, can't show details for player #{id}! {e}");
        }
    }

    pub fn render_creation_form(&self, document: &mut Document) {
        if let Err(e) = render::render_creation_form(document) {
            tracing::error!("Uh oh, trouble rendering the new player form! {e}");
        }
    }

    /// Fills the creation form with `draft` and submits it.
    ///
    /// The draft travels with the submission; concurrent posts never read
    /// each other's inputs.
    pub async fn submit_form(&self, document: &SharedDocument, draft: PlayerDraft) {
        let accepted = {
            let mut document = document.lock().await;
            document.fill_form(&draft);
            document
                .form_node()
                .and_then(|id| document.listener(id, Control::Submit))
                .is_some()
        };

        if !accepted {
            tracing::debug!("No creation form on the page, ignoring submit");
            return;
        }
        self.submit_new_player(document, draft).await;
    }

    /// Creates the player and refreshes the roster.
    pub async fn submit_new_player(&self, document: &SharedDocument, draft: PlayerDraft) {
        if self.create_player(&draft).await.is_none() {
            return;
        }
        self.refresh_roster(document).await;
    }

    async fn refresh_roster(&self, document: &SharedDocument) {
        let roster = self.fetch_all_players().await;
        let mut document = document.lock().await;
        self.render_roster(&mut document, roster.as_ref());
    }

    /// Runs whatever listener is attached to the event's target.
    ///
    /// Events aimed at nodes that were re-rendered away are ignored.
    pub async fn dispatch(&self, document: &SharedDocument, event: DomEvent) {
        let (action, draft) = {
            let document = document.lock().await;
            (
                document.listener(event.target, event.control),
                document.draft(),
            )
        };
        let Some(action) = action else {
            tracing::debug!(
                "No {} listener on node {}, ignoring",
                event.control,
                event.target
            );
            return;
        };

        match action {
            Action::ShowDetails(id) => self.render_player_details(document, id).await,
            Action::DeletePlayer(id) => self.delete_player(document, id).await,
            Action::CloseOverlay(node) => {
                if !document.lock().await.remove_overlay(node) {
                    tracing::debug!("Overlay {node} already closed");
                }
            }
            Action::SubmitNewPlayer => self.submit_new_player(document, draft).await,
        }
    }
}
