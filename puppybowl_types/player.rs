use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contestant as reported by the roster API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Player {
    /// Team label as shown on cards; unassigned players show `null`.
    pub fn team_label(&self) -> String {
        match self.team_id {
            Some(team_id) => team_id.to_string(),
            None => "null".to_string(),
        }
    }

    pub fn image_src(&self) -> &str {
        self.image_url.as_deref().unwrap_or_default()
    }
}

/// Body of a creation request. Values are sent as typed, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub breed: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_from_api_json() {
        let json = r#"{
            "id": 7,
            "name": "Crumpet",
            "breed": "American Staffordshire Terrier",
            "status": "bench",
            "imageUrl": "http://r.ddmcdn.com/w_259/s_f/o_1/cx_0/cy_4/cw_259/ch_345/APL/uploads/2019/12/Crumpet-PBXVI.jpg",
            "createdAt": "2023-03-28T18:34:38.066Z",
            "updatedAt": "2023-03-28T18:34:38.066Z",
            "teamId": null,
            "cohortId": 126
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, PlayerId(7));
        assert_eq!(player.name, "Crumpet");
        assert_eq!(player.team_id, None);
        assert_eq!(player.team_label(), "null");
        assert_eq!(player.cohort_id, Some(126));
        assert!(player.created_at.is_some());
        assert!(player.image_src().ends_with("Crumpet-PBXVI.jpg"));
    }

    #[test]
    fn test_player_with_team() {
        let json = r#"{"id":1,"name":"Rex","breed":"Beagle","status":"field","teamId":42}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.team_label(), "42");
        assert_eq!(player.image_src(), "");
    }

    #[test]
    fn test_draft_serializes_only_three_fields() {
        let draft = PlayerDraft {
            name: "Rex".to_string(),
            breed: "Beagle".to_string(),
            status: "bench".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Rex", "breed": "Beagle", "status": "bench"})
        );
    }
}
