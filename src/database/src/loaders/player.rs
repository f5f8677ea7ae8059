use crate::error::{LoadError, LoadResult};
use crate::loaders::TextOrNumber;
use serde::Deserialize;

pub const TRANSFERS_DOCUMENT: &str = "transfers.json";

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntity {
    pub player_name: String,
    #[serde(default)]
    pub player_image_link: String,
    #[serde(default)]
    pub player_transfer_history: Vec<TransferEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferEntity {
    #[serde(with = "text")]
    pub season: String,
    #[serde(rename = "team_left_TM_id", with = "text")]
    pub team_left_id: String,
    #[serde(rename = "team_joined_TM_id", with = "text")]
    pub team_joined_id: String,
    #[serde(default)]
    pub transfer_fee: Option<TextOrNumber>,
}

pub(crate) mod text {
    use crate::loaders::TextOrNumber;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        TextOrNumber::deserialize(deserializer).map(TextOrNumber::into_string)
    }
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn parse(raw: &str) -> LoadResult<Vec<PlayerEntity>> {
        serde_json::from_str(raw).map_err(|source| LoadError::Parse {
            document: TRANSFERS_DOCUMENT.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_players() {
        let raw = r#"[
            {
                "player_name": "Anna Loan",
                "player_image_link": "https://img.example/anna.jpg",
                "player_transfer_history": [
                    {"season": "21/22", "team_left_TM_id": "452", "team_joined_TM_id": 10, "transfer_fee": "Leihe"},
                    {"season": 2023, "team_left_TM_id": "10", "team_joined_TM_id": "452", "transfer_fee": 250000},
                    {"season": "23/24", "team_left_TM_id": "452", "team_joined_TM_id": "11", "transfer_fee": null}
                ]
            }
        ]"#;

        let players = PlayerLoader::parse(raw).unwrap();
        assert_eq!(players.len(), 1);

        let history = &players[0].player_transfer_history;
        assert_eq!(history[0].team_joined_id, "10");
        assert_eq!(history[0].transfer_fee, Some(TextOrNumber::Text("Leihe".to_string())));
        assert_eq!(history[1].season, "2023");
        assert_eq!(
            history[1].transfer_fee.clone().map(TextOrNumber::into_string),
            Some("250000".to_string())
        );
        assert!(history[2].transfer_fee.is_none());
    }

    #[test]
    fn test_parse_rejects_non_list() {
        let result = PlayerLoader::parse(r#"{"player_name": "x"}"#);
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }
}
