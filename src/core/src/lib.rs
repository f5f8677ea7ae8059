pub mod club;
pub mod data;
pub mod error;
pub mod map;
pub mod player;
pub mod reconcile;
pub mod season;
pub mod session;
pub mod shared;
pub mod style;
pub mod transfers;
pub mod utils;

#[cfg(test)]
mod test_data;

pub use club::{Club, ClubCollection};
pub use data::TransferData;
pub use error::{MapError, MapResult};
pub use map::{
    ButtonEmphasis, ClubMarker, FeatureGroup, MarkerAction, MarkerEvent, MarkerEventKind,
    MarkerInteractions, MarkerTarget, PlayerMarker, RenderPlan, RenderSurface, TransferArrow,
    View, ViewButtons, ViewRequest, WebMercator,
};
pub use player::Player;
pub use reconcile::{IntegrityPolicy, ReconcileOptions, Reconciler, TransferList};
pub use season::Season;
pub use session::MapSession;
pub use shared::LatLng;
pub use style::{ArrowStyle, ColorRange, Rgb, StylePolicy};
pub use transfers::{FeeKind, TransferEvent, TransferSide};
pub use utils::*;
