use crate::loaders::{ClubEntity, PlayerEntity, SeasonEntity, TransferEntity};
use crate::DatabaseEntity;
use log::info;
use map_core::{Club, ClubCollection, LatLng, Player, Season, TransferData, TransferEvent};

/// Builds the read-only domain data from the raw documents.
///
/// The entities are never modified: coordinates are swapped into
/// (latitude, longitude) while copying, so no record can be reversed twice.
pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> TransferData {
        let players: Vec<Player> = data.players.iter().map(Self::player).collect();
        let clubs = ClubCollection::new(data.clubs.iter().map(Self::club).collect());
        let seasons: Vec<Season> = data.seasons.iter().map(Self::season).collect();

        info!(
            "generated {} players, {} clubs, {} seasons",
            players.len(),
            clubs.len(),
            seasons.len()
        );

        TransferData::new(players, clubs, seasons)
    }

    fn club(entity: &ClubEntity) -> Club {
        Club::new(
            entity.id.clone(),
            entity.name.clone(),
            LatLng::from_lon_lat(entity.coordinates),
            entity.players,
        )
    }

    fn season(entity: &SeasonEntity) -> Season {
        Season::new(
            entity.season.clone(),
            entity.players_left.iter().map(Self::player).collect(),
            entity.players_joined.iter().map(Self::player).collect(),
        )
    }

    fn player(entity: &PlayerEntity) -> Player {
        Player::new(
            entity.player_name.clone(),
            entity.player_image_link.clone(),
            entity
                .player_transfer_history
                .iter()
                .map(Self::transfer)
                .collect(),
        )
    }

    fn transfer(entity: &TransferEntity) -> TransferEvent {
        TransferEvent::new(
            entity.season.clone(),
            entity.team_left_id.clone(),
            entity.team_joined_id.clone(),
            entity.transfer_fee.clone().map(String::from),
        )
    }
}
