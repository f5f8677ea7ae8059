use crate::club::ClubCollection;
use crate::error::{MapError, MapResult};
use crate::player::Player;
use crate::season::Season;

/// Everything loaded at startup, read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct TransferData {
    pub players: Vec<Player>,
    pub clubs: ClubCollection,
    pub seasons: Vec<Season>,
}

impl TransferData {
    pub fn new(players: Vec<Player>, clubs: ClubCollection, seasons: Vec<Season>) -> Self {
        TransferData {
            players,
            clubs,
            seasons,
        }
    }

    pub fn season(&self, id: &str) -> MapResult<&Season> {
        self.seasons
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| MapError::NotFound(format!("Season '{}' not found", id)))
    }

    pub fn player(&self, name: &str) -> MapResult<&Player> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| MapError::NotFound(format!("Player '{}' not found", name)))
    }

    /// Season shown when the map first opens: the one before the latest.
    pub fn default_season(&self) -> Option<&Season> {
        match self.seasons.len() {
            0 => None,
            1 => self.seasons.first(),
            len => self.seasons.get(len - 2),
        }
    }

    pub fn season_ids(&self) -> Vec<&str> {
        self.seasons.iter().map(|s| s.id.as_str()).collect()
    }
}
