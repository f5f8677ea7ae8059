pub mod routes;

pub use routes::map_view_routes;

use crate::{MapAppData, MapViewConfig};
use axum::extract::State;
use axum::Json;

pub async fn map_config_action(State(state): State<MapAppData>) -> Json<MapViewConfig> {
    Json(state.settings.view.clone())
}
