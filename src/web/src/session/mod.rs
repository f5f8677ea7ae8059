pub mod routes;

pub use routes::session_routes;

use crate::{ApiError, ApiResult, MapAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use map_core::{
    MapSession, MarkerAction, MarkerEvent, MarkerEventKind, MarkerTarget, RenderPlan, View,
    ViewButtons,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ButtonsDto {
    pub emphasis: ViewButtons,
    pub left_class: &'static str,
    pub joined_class: &'static str,
}

#[derive(Serialize)]
pub struct SessionDto {
    pub season: String,
    pub view: View,
    pub buttons: ButtonsDto,
    pub plan: RenderPlan,
}

impl SessionDto {
    fn new(session: &MapSession, plan: RenderPlan) -> Self {
        let buttons = session.buttons();

        SessionDto {
            season: session.selection().season.clone(),
            view: session.selection().view.clone(),
            buttons: ButtonsDto {
                emphasis: buttons,
                left_class: buttons.left.css_class(),
                joined_class: buttons.joined.css_class(),
            },
            plan,
        }
    }
}

#[derive(Serialize)]
pub struct MarkerResponseDto {
    pub action: MarkerAction,
    pub session: SessionDto,
}

#[derive(Deserialize)]
pub struct SeasonSelectRequest {
    pub season: String,
}

#[derive(Deserialize)]
pub struct PlayerMarkerRequest {
    pub player_name: String,
}

#[derive(Deserialize)]
pub struct ClubMarkerRequest {
    pub club_id: String,
}

pub async fn session_get_action(State(state): State<MapAppData>) -> ApiResult<Json<SessionDto>> {
    let mut session = state.session.write().await;

    let plan = session.render()?;

    Ok(Json(SessionDto::new(&session, plan)))
}

pub async fn session_season_action(
    State(state): State<MapAppData>,
    Path(route_params): Path<SeasonSelectRequest>,
) -> ApiResult<Json<SessionDto>> {
    let mut session = state.session.write().await;

    let plan = session.select_season(&route_params.season)?;

    Ok(Json(SessionDto::new(&session, plan)))
}

pub async fn session_left_action(State(state): State<MapAppData>) -> ApiResult<Json<SessionDto>> {
    let mut session = state.session.write().await;

    let plan = session.show_transfers_out()?;

    Ok(Json(SessionDto::new(&session, plan)))
}

pub async fn session_joined_action(
    State(state): State<MapAppData>,
) -> ApiResult<Json<SessionDto>> {
    let mut session = state.session.write().await;

    let plan = session.show_transfers_in()?;

    Ok(Json(SessionDto::new(&session, plan)))
}

async fn dispatch(state: &MapAppData, event: MarkerEvent) -> ApiResult<Json<MarkerResponseDto>> {
    let mut session = state.session.write().await;

    let action = session.handle(&event)?;
    let plan = session.render()?;

    Ok(Json(MarkerResponseDto {
        action,
        session: SessionDto::new(&session, plan),
    }))
}

pub async fn player_marker_click_action(
    State(state): State<MapAppData>,
    Path(route_params): Path<PlayerMarkerRequest>,
) -> ApiResult<Json<MarkerResponseDto>> {
    let event = MarkerEvent::new(
        MarkerTarget::Player(route_params.player_name),
        MarkerEventKind::Click,
    );

    dispatch(&state, event).await
}

pub async fn club_marker_click_action(
    State(state): State<MapAppData>,
    Path(route_params): Path<ClubMarkerRequest>,
) -> ApiResult<Json<MarkerResponseDto>> {
    let event = MarkerEvent::new(MarkerTarget::Club(route_params.club_id), MarkerEventKind::Click);

    dispatch(&state, event).await
}

pub async fn marker_event_action(
    State(state): State<MapAppData>,
    payload: Result<Json<MarkerEvent>, JsonRejection>,
) -> ApiResult<Json<MarkerResponseDto>> {
    let Json(event) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    dispatch(&state, event).await
}

#[cfg(test)]
mod tests {
    use crate::test_support::{request, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_session_starts_on_left_view() {
        let (status, body) = request(test_app(), "GET", "/api/session", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["season"], "2021");
        assert_eq!(body["view"]["kind"], "left");
        assert_eq!(body["buttons"]["left_class"], "btn btn-primary");
        assert_eq!(body["buttons"]["joined_class"], "btn btn-secondary");
        assert_eq!(body["plan"]["arrows"].as_array().map(|a| a.len()), Some(1));
    }

    #[tokio::test]
    async fn test_toggle_buttons() {
        let app = test_app();

        let (status, body) = request(app.clone(), "POST", "/api/session/view/joined", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"]["kind"], "joined");
        assert_eq!(body["buttons"]["joined_class"], "btn btn-primary");
        assert_eq!(body["plan"]["arrows"][0]["player_name"], "Carl Join");

        let (_, body) = request(app, "POST", "/api/session/view/left", None).await;
        assert_eq!(body["view"]["kind"], "left");
    }

    #[tokio::test]
    async fn test_player_marker_click_navigates() {
        let app = test_app();

        let (status, body) = request(
            app.clone(),
            "POST",
            "/api/session/markers/player/Anna%20Loan/click",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["action"]["action"], "select_view");
        assert_eq!(body["session"]["view"]["kind"], "player");
        assert_eq!(body["session"]["view"]["name"], "Anna Loan");
        assert_eq!(body["session"]["buttons"]["left_class"], "btn btn-secondary");
        assert_eq!(body["session"]["plan"]["arrows"][0]["color"], "#000000");
    }

    #[tokio::test]
    async fn test_club_marker_click_is_noop() {
        let app = test_app();

        let (status, body) =
            request(app, "POST", "/api/session/markers/club/452/click", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["action"]["action"], "nothing");
        assert_eq!(body["session"]["view"]["kind"], "left");
    }

    #[tokio::test]
    async fn test_hover_event_opens_callout() {
        let app = test_app();

        let (status, body) = request(
            app,
            "POST",
            "/api/session/markers",
            Some(r#"{"target": {"type": "club", "id": "10"}, "kind": "hover"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["action"]["action"], "open_callout");
        assert_eq!(body["action"]["value"], "Club Info: Other");
    }

    #[tokio::test]
    async fn test_malformed_marker_event_is_json_bad_request() {
        let app = test_app();

        let (status, body) = request(
            app.clone(),
            "POST",
            "/api/session/markers",
            Some(r#"{"target": {"type": "stadium"}}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some());

        let (status, body) = request(app, "POST", "/api/session/markers", Some("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_unknown_season_keeps_selection() {
        let app = test_app();

        let (status, body) = request(app.clone(), "POST", "/api/session/season/1900", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().is_some());

        let (_, body) = request(app, "GET", "/api/session", None).await;
        assert_eq!(body["season"], "2021");
    }
}
