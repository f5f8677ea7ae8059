use crate::map::{ClubMarker, PlayerMarker, RenderPlan, TransferArrow, View};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum MarkerTarget {
    Club(String),
    Player(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerEventKind {
    Hover,
    Leave,
    Click,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEvent {
    pub target: MarkerTarget,
    pub kind: MarkerEventKind,
}

impl MarkerEvent {
    pub fn new(target: MarkerTarget, kind: MarkerEventKind) -> Self {
        MarkerEvent { target, kind }
    }
}

/// What the surface should do in response to a marker interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum MarkerAction {
    OpenCallout(String),
    CloseCallout,
    SelectView(View),
    Nothing,
}

pub trait MarkerInteractions {
    fn on_hover(&self) -> MarkerAction;
    fn on_leave(&self) -> MarkerAction {
        MarkerAction::CloseCallout
    }
    fn on_click(&self) -> MarkerAction;

    fn handle(&self, kind: &MarkerEventKind) -> MarkerAction {
        match kind {
            MarkerEventKind::Hover => self.on_hover(),
            MarkerEventKind::Leave => self.on_leave(),
            MarkerEventKind::Click => self.on_click(),
        }
    }
}

impl MarkerInteractions for ClubMarker {
    fn on_hover(&self) -> MarkerAction {
        MarkerAction::OpenCallout(self.popup.clone())
    }

    fn on_click(&self) -> MarkerAction {
        // reserved
        MarkerAction::Nothing
    }
}

impl MarkerInteractions for PlayerMarker {
    fn on_hover(&self) -> MarkerAction {
        MarkerAction::OpenCallout(self.popup.clone())
    }

    fn on_click(&self) -> MarkerAction {
        MarkerAction::SelectView(View::Player(self.player_name.clone()))
    }
}

/// Anything able to draw a render plan: a map widget, a test recorder, the in-memory overlay.
pub trait RenderSurface {
    fn clear(&mut self);
    fn add_club_marker(&mut self, marker: &ClubMarker);
    fn add_arrow(&mut self, arrow: &TransferArrow);
    fn add_player_marker(&mut self, marker: &PlayerMarker);
}

impl RenderPlan {
    /// Clears the surface, then draws clubs, arrows and player markers in plan order.
    pub fn apply<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        for marker in &self.club_markers {
            surface.add_club_marker(marker);
        }

        for (arrow, marker) in self.arrows.iter().zip(&self.player_markers) {
            surface.add_arrow(arrow);
            surface.add_player_marker(marker);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "feature", rename_all = "snake_case")]
pub enum OverlayFeature {
    Club(ClubMarker),
    Arrow(TransferArrow),
    Player(PlayerMarker),
}

/// In-memory overlay layer holding the currently drawn features
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeatureGroup {
    features: Vec<OverlayFeature>,
}

impl FeatureGroup {
    pub fn new() -> Self {
        FeatureGroup::default()
    }

    pub fn features(&self) -> &[OverlayFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn club_marker(&self, club_id: &str) -> Option<&ClubMarker> {
        self.features.iter().find_map(|f| match f {
            OverlayFeature::Club(marker) if marker.club_id == club_id => Some(marker),
            _ => None,
        })
    }

    pub fn player_marker(&self, player_name: &str) -> Option<&PlayerMarker> {
        self.features.iter().find_map(|f| match f {
            OverlayFeature::Player(marker) if marker.player_name == player_name => Some(marker),
            _ => None,
        })
    }
}

impl RenderSurface for FeatureGroup {
    fn clear(&mut self) {
        self.features.clear();
    }

    fn add_club_marker(&mut self, marker: &ClubMarker) {
        self.features.push(OverlayFeature::Club(marker.clone()));
    }

    fn add_arrow(&mut self, arrow: &TransferArrow) {
        self.features.push(OverlayFeature::Arrow(arrow.clone()));
    }

    fn add_player_marker(&mut self, marker: &PlayerMarker) {
        self.features.push(OverlayFeature::Player(marker.clone()));
    }
}
