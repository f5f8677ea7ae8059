use crate::transfers::TransferSide;
use serde::{Deserialize, Serialize};

/// What the map is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum View {
    /// Players who left the reference club in the season
    Left,
    /// Players who joined the reference club in the season
    Joined,
    /// Complete career of a single player
    Player(String),
}

impl View {
    /// Direction relative to the reference club, `None` for the player view.
    pub fn side(&self) -> Option<TransferSide> {
        match self {
            View::Left => Some(TransferSide::Left),
            View::Joined => Some(TransferSide::Joined),
            View::Player(_) => None,
        }
    }

    /// Left/Joined render with constant colours, the player view with gradients.
    pub fn is_fixed(&self) -> bool {
        self.side().is_some()
    }

    pub fn buttons(&self) -> ViewButtons {
        match self {
            View::Left => ViewButtons {
                left: ButtonEmphasis::Primary,
                joined: ButtonEmphasis::Secondary,
            },
            View::Joined => ViewButtons {
                left: ButtonEmphasis::Secondary,
                joined: ButtonEmphasis::Primary,
            },
            View::Player(_) => ViewButtons {
                left: ButtonEmphasis::Secondary,
                joined: ButtonEmphasis::Secondary,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewRequest {
    pub season: String,
    pub view: View,
}

impl ViewRequest {
    pub fn new(season: impl Into<String>, view: View) -> Self {
        ViewRequest {
            season: season.into(),
            view,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonEmphasis {
    Primary,
    Secondary,
}

impl ButtonEmphasis {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonEmphasis::Primary => "btn btn-primary",
            ButtonEmphasis::Secondary => "btn btn-secondary",
        }
    }
}

/// Emphasis of the "transfers out" (left) and "transfers in" (joined) toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewButtons {
    pub left: ButtonEmphasis,
    pub joined: ButtonEmphasis,
}
