use crate::MapAppData;
use axum::routing::get;
use axum::Router;

pub fn club_routes() -> Router<MapAppData> {
    Router::new().route("/api/clubs", get(super::club_list_action))
}
