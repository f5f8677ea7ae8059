use crate::player::Player;
use crate::transfers::TransferSide;
use serde::Serialize;

/// Pre-aggregated movements of the reference club for one season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Season {
    pub id: String,
    pub players_left: Vec<Player>,
    pub players_joined: Vec<Player>,
}

impl Season {
    pub fn new(id: String, players_left: Vec<Player>, players_joined: Vec<Player>) -> Self {
        Season {
            id,
            players_left,
            players_joined,
        }
    }

    pub fn players(&self, side: TransferSide) -> &[Player] {
        match side {
            TransferSide::Left => &self.players_left,
            TransferSide::Joined => &self.players_joined,
        }
    }
}
