pub mod routes;

pub use routes::plan_routes;

use crate::{ApiResult, MapAppData};
use axum::extract::{Path, State};
use axum::Json;
use map_core::{Reconciler, RenderPlan, View, ViewRequest};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SeasonPlanRequest {
    pub season: String,
}

#[derive(Deserialize)]
pub struct PlayerPlanRequest {
    pub season: String,
    pub player_name: String,
}

fn plan(state: &MapAppData, request: ViewRequest) -> ApiResult<Json<RenderPlan>> {
    let plan = Reconciler::reconcile(&state.data, &request, &state.settings.options)?;

    Ok(Json(plan))
}

pub async fn left_plan_action(
    State(state): State<MapAppData>,
    Path(route_params): Path<SeasonPlanRequest>,
) -> ApiResult<Json<RenderPlan>> {
    plan(&state, ViewRequest::new(route_params.season, View::Left))
}

pub async fn joined_plan_action(
    State(state): State<MapAppData>,
    Path(route_params): Path<SeasonPlanRequest>,
) -> ApiResult<Json<RenderPlan>> {
    plan(&state, ViewRequest::new(route_params.season, View::Joined))
}

pub async fn player_plan_action(
    State(state): State<MapAppData>,
    Path(route_params): Path<PlayerPlanRequest>,
) -> ApiResult<Json<RenderPlan>> {
    plan(
        &state,
        ViewRequest::new(route_params.season, View::Player(route_params.player_name)),
    )
}
