use crate::clubs::club_routes;
use crate::common::default_handler::default_handler;
use crate::mapview::map_view_routes;
use crate::players::player_routes;
use crate::plans::plan_routes;
use crate::seasons::season_routes;
use crate::session::session_routes;
use crate::MapAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<MapAppData> {
        Router::<MapAppData>::new()
            .merge(map_view_routes())
            .merge(season_routes())
            .merge(club_routes())
            .merge(player_routes())
            .merge(plan_routes())
            .merge(session_routes())
            .fallback(default_handler)
    }
}
