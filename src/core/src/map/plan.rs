use crate::map::ViewRequest;
use crate::shared::LatLng;
use crate::style::{ArrowStyle, Rgb};
use serde::Serialize;

pub const ARROW_WEIGHT: f64 = 3.0;
pub const ARROW_HEAD_OFFSET: f64 = 0.25;
pub const ARROW_HEAD_REPEAT: f64 = 0.5;
pub const PLAYER_ICON_SIZE: f64 = 32.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubMarker {
    pub club_id: String,
    pub name: String,
    pub position: LatLng,
    pub icon_url: String,
    pub icon_size: f64,
    pub icon_anchor: f64,
    pub z_index_offset: u32,
    pub popup: String,
}

/// Arrowhead decoration repeated along the arrow body.
/// `offset` and `repeat` are fractions of the line length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowHead {
    pub color: Rgb,
    pub pixel_size: f64,
    pub offset: f64,
    pub repeat: f64,
    pub weight: f64,
    pub polygon: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferArrow {
    pub index: usize,
    pub player_name: String,
    pub season: String,
    pub from_club_id: String,
    pub to_club_id: String,
    pub path: [LatLng; 2],
    pub color: Rgb,
    pub weight: f64,
    pub head: ArrowHead,
    pub style: ArrowStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMarker {
    pub index: usize,
    pub player_name: String,
    pub image_link: String,
    pub position: LatLng,
    pub border_color: Rgb,
    pub icon_size: f64,
    pub popup: String,
}

/// Complete overlay content for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub request: ViewRequest,
    pub club_markers: Vec<ClubMarker>,
    pub arrows: Vec<TransferArrow>,
    pub player_markers: Vec<PlayerMarker>,
}

impl RenderPlan {
    pub fn empty(request: ViewRequest) -> Self {
        RenderPlan {
            request,
            club_markers: Vec::new(),
            arrows: Vec::new(),
            player_markers: Vec::new(),
        }
    }

    pub fn feature_count(&self) -> usize {
        self.club_markers.len() + self.arrows.len() + self.player_markers.len()
    }
}
