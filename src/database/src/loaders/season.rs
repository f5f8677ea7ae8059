use crate::error::{LoadError, LoadResult};
use crate::loaders::PlayerEntity;
use crate::loaders::player::text;
use serde::Deserialize;

pub const SEASONS_DOCUMENT: &str = "seasons.json";

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonEntity {
    #[serde(with = "text")]
    pub season: String,
    #[serde(default)]
    pub players_left: Vec<PlayerEntity>,
    #[serde(default)]
    pub players_joined: Vec<PlayerEntity>,
}

pub struct SeasonLoader;

impl SeasonLoader {
    pub fn parse(raw: &str) -> LoadResult<Vec<SeasonEntity>> {
        serde_json::from_str(raw).map_err(|source| LoadError::Parse {
            document: SEASONS_DOCUMENT.to_string(),
            source,
        })
    }
}
