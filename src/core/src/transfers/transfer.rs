use serde::Serialize;

/// One move in a player's career between two clubs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferEvent {
    pub season: String,
    pub team_left_id: String,
    pub team_joined_id: String,
    pub fee: Option<String>,
}

impl TransferEvent {
    pub fn new(
        season: String,
        team_left_id: String,
        team_joined_id: String,
        fee: Option<String>,
    ) -> Self {
        TransferEvent {
            season,
            team_left_id,
            team_joined_id,
            fee,
        }
    }

    /// Club on the given side of the move
    pub fn club_id(&self, side: TransferSide) -> &str {
        match side {
            TransferSide::Left => &self.team_left_id,
            TransferSide::Joined => &self.team_joined_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    Left,
    Joined,
}
