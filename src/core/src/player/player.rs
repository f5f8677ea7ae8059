use crate::transfers::{TransferEvent, TransferSide};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub image_link: String,
    pub transfer_history: Vec<TransferEvent>,
}

impl Player {
    pub fn new(name: String, image_link: String, transfer_history: Vec<TransferEvent>) -> Self {
        Player {
            name,
            image_link,
            transfer_history,
        }
    }

    /// First move in `season` where the player crossed `club_id` on the given side
    pub fn transfer_in_season(
        &self,
        season: &str,
        side: TransferSide,
        club_id: &str,
    ) -> Option<&TransferEvent> {
        self.transfer_history
            .iter()
            .find(|t| t.season == season && t.club_id(side) == club_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(season: &str, left: &str, joined: &str) -> TransferEvent {
        TransferEvent::new(
            season.to_string(),
            left.to_string(),
            joined.to_string(),
            Some("-".to_string()),
        )
    }

    #[test]
    fn test_transfer_in_season_takes_first_match() {
        let player = Player::new(
            "Test Player".to_string(),
            String::new(),
            vec![
                transfer("2019", "452", "10"),
                transfer("2021", "11", "452"),
                transfer("2021", "452", "12"),
                transfer("2021", "452", "13"),
            ],
        );

        let left = player.transfer_in_season("2021", TransferSide::Left, "452");
        assert_eq!(left.map(|t| t.team_joined_id.as_str()), Some("12"));

        let joined = player.transfer_in_season("2021", TransferSide::Joined, "452");
        assert_eq!(joined.map(|t| t.team_left_id.as_str()), Some("11"));

        assert!(player.transfer_in_season("2020", TransferSide::Left, "452").is_none());
    }
}
