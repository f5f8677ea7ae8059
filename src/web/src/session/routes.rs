use crate::MapAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn session_routes() -> Router<MapAppData> {
    Router::new()
        .route("/api/session", get(super::session_get_action))
        .route("/api/session/season/{season}", post(super::session_season_action))
        .route("/api/session/view/left", post(super::session_left_action))
        .route("/api/session/view/joined", post(super::session_joined_action))
        .route("/api/session/markers", post(super::marker_event_action))
        .route(
            "/api/session/markers/player/{player_name}/click",
            post(super::player_marker_click_action),
        )
        .route(
            "/api/session/markers/club/{club_id}/click",
            post(super::club_marker_click_action),
        )
}
