use crate::data::TransferData;
use crate::error::{MapError, MapResult};
use crate::map::{View, ViewRequest};
use crate::player::Player;
use crate::season::Season;
use crate::reconcile::{IntegrityPolicy, ReconcileOptions};
use crate::transfers::{TransferEvent, TransferSide};
use itertools::Itertools;
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferEntry<'a> {
    pub transfer: &'a TransferEvent,
    pub player: &'a Player,
}

/// Transfers selected for a view, in drawing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferList<'a> {
    entries: Vec<TransferEntry<'a>>,
}

impl<'a> TransferList<'a> {
    pub fn build(
        data: &'a TransferData,
        request: &ViewRequest,
        options: &ReconcileOptions,
    ) -> MapResult<Self> {
        let season = data.season(&request.season)?;

        let candidates = match &request.view {
            View::Left => Self::season_entries(season, TransferSide::Left, options)?,
            View::Joined => Self::season_entries(season, TransferSide::Joined, options)?,
            View::Player(name) => {
                let player = data.player(name)?;

                player
                    .transfer_history
                    .iter()
                    .map(|transfer| TransferEntry { transfer, player })
                    .collect()
            }
        };

        let mut entries = Vec::with_capacity(candidates.len());

        for entry in candidates {
            if !Self::is_drawable(data, entry.transfer) {
                warn!(
                    "transfer of '{}' in {} references an unknown club ({} -> {}), skipped",
                    entry.player.name,
                    entry.transfer.season,
                    entry.transfer.team_left_id,
                    entry.transfer.team_joined_id
                );
                continue;
            }

            if entry.transfer.fee.is_none() {
                let message = format!(
                    "transfer of '{}' in {} has no fee",
                    entry.player.name, entry.transfer.season
                );
                match options.integrity {
                    IntegrityPolicy::Fail => return Err(MapError::InvalidInput(message)),
                    IntegrityPolicy::Skip => {
                        warn!("{}, skipped", message);
                        continue;
                    }
                }
            }

            entries.push(entry);
        }

        Ok(TransferList { entries })
    }

    fn season_entries(
        season: &'a Season,
        side: TransferSide,
        options: &ReconcileOptions,
    ) -> MapResult<Vec<TransferEntry<'a>>> {
        let players = season.players(side);
        let mut entries = Vec::with_capacity(players.len());

        for player in players {
            match player.transfer_in_season(&season.id, side, &options.reference_club_id) {
                Some(transfer) => entries.push(TransferEntry { transfer, player }),
                None => {
                    let message = format!(
                        "player '{}' is listed for season {} ({:?}) without a matching transfer",
                        player.name, season.id, side
                    );
                    match options.integrity {
                        IntegrityPolicy::Fail => return Err(MapError::DataIntegrity(message)),
                        IntegrityPolicy::Skip => warn!("{}, skipped", message),
                    }
                }
            }
        }

        Ok(entries)
    }

    fn is_drawable(data: &TransferData, transfer: &TransferEvent) -> bool {
        data.clubs.contains(&transfer.team_left_id) && data.clubs.contains(&transfer.team_joined_id)
    }

    pub fn entries(&self) -> &[TransferEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct club ids on either side of the listed transfers, in first-seen order
    pub fn club_ids(&self) -> Vec<&'a str> {
        self.entries
            .iter()
            .flat_map(|e| [e.transfer.team_left_id.as_str(), e.transfer.team_joined_id.as_str()])
            .unique()
            .collect()
    }
}
