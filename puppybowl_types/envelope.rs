use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Envelope wrapping every roster API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn failed(name: &str, message: &str) -> Self {
        Self {
            success: false,
            error: Some(ApiErrorBody {
                name: Some(name.to_string()),
                message: Some(message.to_string()),
            }),
            data: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterData {
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerData {
    pub new_player: Player,
}

pub type RosterEnvelope = ApiResponse<RosterData>;
pub type PlayerEnvelope = ApiResponse<PlayerData>;
pub type NewPlayerEnvelope = ApiResponse<NewPlayerData>;
