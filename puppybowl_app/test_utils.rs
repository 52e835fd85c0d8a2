#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    };

    use puppybowl_types::{
        envelope::{
            ApiResponse, NewPlayerData, NewPlayerEnvelope, PlayerData, PlayerEnvelope, RosterData,
            RosterEnvelope,
        },
        errors::ApplicationError,
        player::{Player, PlayerDraft, PlayerId},
    };

    use crate::api::RosterApi;

    /// A request the mock received, in arrival order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ApiCall {
        ListPlayers,
        GetPlayer(PlayerId),
        CreatePlayer(PlayerDraft),
        DeletePlayer(PlayerId),
    }

    #[derive(Default, Clone)]
    pub struct MockRosterApi {
        players: Arc<Mutex<Vec<Player>>>,
        calls: Arc<Mutex<Vec<ApiCall>>>,
        offline: Arc<AtomicBool>,
        rejecting_creates: Arc<AtomicBool>,
    }

    impl MockRosterApi {
        pub fn new(players: Vec<Player>) -> Self {
            Self {
                players: Arc::new(Mutex::new(players)),
                ..Default::default()
            }
        }

        /// While offline every request fails before reaching the roster.
        pub fn set_offline(&self, offline: bool) {
            self.offline.store(offline, Ordering::SeqCst);
        }

        /// While rejecting, creates answer with a validation error envelope.
        pub fn set_rejecting_creates(&self, rejecting: bool) {
            self.rejecting_creates.store(rejecting, Ordering::SeqCst);
        }

        pub fn calls(&self) -> Vec<ApiCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }

        pub fn players(&self) -> Vec<Player> {
            self.players.lock().unwrap().clone()
        }

        fn record(&self, call: ApiCall) -> Result<(), ApplicationError> {
            self.calls.lock().unwrap().push(call);
            if self.offline.load(Ordering::SeqCst) {
                return Err(ApplicationError::Infrastructure(
                    "mock roster is offline".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl RosterApi for MockRosterApi {
        async fn list_players(&self) -> Result<RosterEnvelope, ApplicationError> {
            self.record(ApiCall::ListPlayers)?;
            Ok(ApiResponse::ok(RosterData {
                players: self.players(),
            }))
        }

        async fn get_player(&self, id: PlayerId) -> Result<PlayerEnvelope, ApplicationError> {
            self.record(ApiCall::GetPlayer(id))?;
            let found = self.players().into_iter().find(|p| p.id == id);
            Ok(match found {
                Some(player) => ApiResponse::ok(PlayerData { player }),
                None => ApiResponse::failed(
                    "NotFoundError",
                    &format!("No player found with id {id}"),
                ),
            })
        }

        async fn create_player(
            &self,
            draft: &PlayerDraft,
        ) -> Result<NewPlayerEnvelope, ApplicationError> {
            self.record(ApiCall::CreatePlayer(draft.clone()))?;
            if self.rejecting_creates.load(Ordering::SeqCst) {
                return Ok(ApiResponse::failed(
                    "ValidationError",
                    "name, breed and status are required",
                ));
            }
            let mut players = self.players.lock().unwrap();
            let next_id = players.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
            let player = Player {
                id: PlayerId(next_id),
                name: draft.name.clone(),
                breed: draft.breed.clone(),
                status: draft.status.clone(),
                team_id: None,
                image_url: None,
                cohort_id: None,
                created_at: None,
                updated_at: None,
            };
            players.push(player.clone());
            Ok(ApiResponse::ok(NewPlayerData { new_player: player }))
        }

        async fn delete_player(&self, id: PlayerId) -> Result<(), ApplicationError> {
            self.record(ApiCall::DeletePlayer(id))?;
            self.players.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }

    pub struct PlayerFactoryOptions<'a> {
        pub id: i64,
        pub name: &'a str,
        pub breed: &'a str,
        pub status: &'a str,
        pub team_id: Option<i64>,
    }

    impl Default for PlayerFactoryOptions<'_> {
        fn default() -> Self {
            Self {
                id: 1,
                name: "Rex",
                breed: "Beagle",
                status: "bench",
                team_id: None,
            }
        }
    }

    pub fn player_factory(options: PlayerFactoryOptions) -> Player {
        Player {
            id: PlayerId(options.id),
            name: options.name.to_string(),
            breed: options.breed.to_string(),
            status: options.status.to_string(),
            team_id: options.team_id,
            image_url: Some(format!("https://images.example/{}.jpg", options.id)),
            cohort_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}
