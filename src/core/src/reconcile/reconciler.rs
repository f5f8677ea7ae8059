use crate::club::Club;
use crate::data::TransferData;
use crate::error::{MapError, MapResult};
use crate::map::{
    ArrowHead, ClubMarker, PlayerMarker, RenderPlan, TransferArrow, ViewRequest, ARROW_HEAD_OFFSET,
    ARROW_HEAD_REPEAT, ARROW_WEIGHT, PLAYER_ICON_SIZE,
};
use crate::reconcile::{ReconcileOptions, TransferEntry, TransferList};
use crate::style::StylePolicy;
use log::debug;
use std::collections::HashSet;

/// Turns a selection into the full set of overlay features.
///
/// Pure with respect to its inputs: the same data and request always yield
/// the same plan. Applying the plan replaces everything previously drawn.
pub struct Reconciler;

impl Reconciler {
    pub fn reconcile(
        data: &TransferData,
        request: &ViewRequest,
        options: &ReconcileOptions,
    ) -> MapResult<RenderPlan> {
        let transfers = TransferList::build(data, request, options)?;

        let club_ids: HashSet<&str> = transfers.club_ids().into_iter().collect();

        let club_markers: Vec<ClubMarker> = data
            .clubs
            .iter()
            .filter(|club| club_ids.contains(club.id.as_str()))
            .map(Self::club_marker)
            .collect();

        let policy = StylePolicy::new(request.view.is_fixed());
        let total = transfers.len();

        let mut arrows = Vec::with_capacity(total);
        let mut player_markers = Vec::with_capacity(total);

        for (index, entry) in transfers.entries().iter().enumerate() {
            let (arrow, marker) = Self::transfer_arrow(data, entry, &policy, index, total, options)?;

            arrows.push(arrow);
            player_markers.push(marker);
        }

        debug!(
            "reconciled season {} view {:?}: {} clubs, {} arrows",
            request.season,
            request.view,
            club_markers.len(),
            arrows.len()
        );

        Ok(RenderPlan {
            request: request.clone(),
            club_markers,
            arrows,
            player_markers,
        })
    }

    fn club_marker(club: &Club) -> ClubMarker {
        let icon_size = club.icon_size();

        ClubMarker {
            club_id: club.id.clone(),
            name: club.name.clone(),
            position: club.location,
            icon_url: club.icon_url(),
            icon_size,
            icon_anchor: icon_size / 2.0,
            z_index_offset: club.players,
            popup: format!("Club Info: {}", club.name),
        }
    }

    fn transfer_arrow(
        data: &TransferData,
        entry: &TransferEntry<'_>,
        policy: &StylePolicy,
        index: usize,
        total: usize,
        options: &ReconcileOptions,
    ) -> MapResult<(TransferArrow, PlayerMarker)> {
        let transfer = entry.transfer;

        let from = Self::club(data, &transfer.team_left_id)?;
        let to = Self::club(data, &transfer.team_joined_id)?;

        let style = policy.arrow_style(transfer.fee.as_deref(), index, total)?;

        let arrow = TransferArrow {
            index,
            player_name: entry.player.name.clone(),
            season: transfer.season.clone(),
            from_club_id: from.id.clone(),
            to_club_id: to.id.clone(),
            path: [from.location, to.location],
            color: style.body_color,
            weight: ARROW_WEIGHT,
            head: ArrowHead {
                color: style.head_color,
                pixel_size: style.head_pixel_size,
                offset: ARROW_HEAD_OFFSET,
                repeat: ARROW_HEAD_REPEAT,
                weight: ARROW_WEIGHT,
                polygon: false,
            },
            style,
        };

        let marker = PlayerMarker {
            index,
            player_name: entry.player.name.clone(),
            image_link: entry.player.image_link.clone(),
            position: options.projection.pixel_midpoint(from.location, to.location),
            border_color: style.body_color,
            icon_size: PLAYER_ICON_SIZE,
            popup: format!("Player Info: {}", entry.player.name),
        };

        Ok((arrow, marker))
    }

    fn club<'d>(data: &'d TransferData, id: &str) -> MapResult<&'d Club> {
        data.clubs
            .get(id)
            .ok_or_else(|| MapError::DataIntegrity(format!("Club '{}' not found", id)))
    }
}
