use crate::MapAppData;
use axum::routing::get;
use axum::Router;

pub fn map_view_routes() -> Router<MapAppData> {
    Router::new().route("/api/map/config", get(super::map_config_action))
}
