pub mod routes;

pub use routes::season_routes;

use crate::MapAppData;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct SeasonListDto {
    pub seasons: Vec<String>,
    pub default_season: Option<String>,
}

pub async fn season_list_action(State(state): State<MapAppData>) -> Json<SeasonListDto> {
    Json(SeasonListDto {
        seasons: state.data.season_ids().into_iter().map(String::from).collect(),
        default_season: state.data.default_season().map(|s| s.id.clone()),
    })
}
