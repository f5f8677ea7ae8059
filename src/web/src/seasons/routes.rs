use crate::MapAppData;
use axum::routing::get;
use axum::Router;

pub fn season_routes() -> Router<MapAppData> {
    Router::new().route("/api/seasons", get(super::season_list_action))
}
