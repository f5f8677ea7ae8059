pub mod routes;

pub use routes::club_routes;

use crate::MapAppData;
use axum::extract::State;
use axum::Json;
use map_core::Club;

pub async fn club_list_action(State(state): State<MapAppData>) -> Json<Vec<Club>> {
    Json(state.data.clubs.iter().cloned().collect())
}
