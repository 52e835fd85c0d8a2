use async_trait::async_trait;
use reqwest::Client;

use puppybowl_types::{
    envelope::{NewPlayerEnvelope, PlayerEnvelope, RosterEnvelope},
    errors::{ApiError, ApplicationError},
    player::{PlayerDraft, PlayerId},
};

use crate::config::Config;

/// Remote roster service, scoped to one cohort.
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// GET /players
    async fn list_players(&self) -> Result<RosterEnvelope, ApplicationError>;

    /// GET /players/{id}
    async fn get_player(&self, id: PlayerId) -> Result<PlayerEnvelope, ApplicationError>;

    /// POST /players
    async fn create_player(
        &self,
        draft: &PlayerDraft,
    ) -> Result<NewPlayerEnvelope, ApplicationError>;

    /// DELETE /players/{id}. The response body and status are ignored.
    async fn delete_player(&self, id: PlayerId) -> Result<(), ApplicationError>;
}

#[derive(Debug, Clone)]
pub struct HttpRosterApi {
    client: Client,
    base_url: String,
}

impl HttpRosterApi {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.cohort_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn players_url(&self) -> String {
        format!("{}/players", self.base_url)
    }

    fn player_url(&self, id: PlayerId) -> String {
        format!("{}/players/{}", self.base_url, id)
    }
}

#[async_trait]
impl RosterApi for HttpRosterApi {
    async fn list_players(&self) -> Result<RosterEnvelope, ApplicationError> {
        let url = self.players_url();
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(transport)?;
        response.json().await.map_err(transport)
    }

    async fn get_player(&self, id: PlayerId) -> Result<PlayerEnvelope, ApplicationError> {
        let url = self.player_url(id);
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(transport)?;
        response.json().await.map_err(transport)
    }

    async fn create_player(
        &self,
        draft: &PlayerDraft,
    ) -> Result<NewPlayerEnvelope, ApplicationError> {
        let url = self.players_url();
        tracing::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        response.json().await.map_err(transport)
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), ApplicationError> {
        let url = self.player_url(id);
        tracing::debug!("DELETE {url}");
        self.client.delete(url).send().await.map_err(transport)?;
        Ok(())
    }
}

fn transport(e: reqwest::Error) -> ApplicationError {
    ApplicationError::Api(ApiError::Transport(e))
}
