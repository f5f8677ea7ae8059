use crate::MapAppData;
use axum::routing::get;
use axum::Router;

pub fn plan_routes() -> Router<MapAppData> {
    Router::new()
        .route("/api/plans/{season}/left", get(super::left_plan_action))
        .route("/api/plans/{season}/joined", get(super::joined_plan_action))
        .route(
            "/api/plans/{season}/players/{player_name}",
            get(super::player_plan_action),
        )
}
