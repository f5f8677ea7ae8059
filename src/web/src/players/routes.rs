use crate::MapAppData;
use axum::routing::get;
use axum::Router;

pub fn player_routes() -> Router<MapAppData> {
    Router::new().route("/api/players/{player_name}", get(super::player_get_action))
}
