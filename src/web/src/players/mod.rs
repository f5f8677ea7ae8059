pub mod routes;

pub use routes::player_routes;

use crate::{ApiResult, MapAppData};
use axum::extract::{Path, State};
use axum::Json;
use map_core::Player;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerRequest {
    pub player_name: String,
}

pub async fn player_get_action(
    State(state): State<MapAppData>,
    Path(route_params): Path<PlayerRequest>,
) -> ApiResult<Json<Player>> {
    let player = state.data.player(&route_params.player_name)?;

    Ok(Json(player.clone()))
}
