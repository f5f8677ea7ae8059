mod clubs;
mod common;
mod error;
mod mapview;
mod players;
mod plans;
mod routes;
mod seasons;
mod session;
mod settings;

pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;
pub use settings::{MapSettings, MapViewConfig};

use axum::response::IntoResponse;
use log::{error, info, warn};
use map_core::{MapResult, MapSession, TransferData};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct TransferMapServer {
    data: MapAppData,
}

impl TransferMapServer {
    pub fn new(data: MapAppData) -> Self {
        TransferMapServer { data }
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        ).into_response()
                    }))
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.data.settings.port));

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
            e
        })?;

        info!("listen at: http://localhost:{}", self.data.settings.port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            return Err(e);
        }

        Ok(())
    }
}

pub struct MapAppData {
    pub data: Arc<TransferData>,
    pub session: Arc<RwLock<MapSession>>,
    pub settings: Arc<MapSettings>,
}

impl MapAppData {
    /// Wraps the loaded data and draws the initial selection
    pub fn new(data: TransferData, settings: MapSettings) -> MapResult<Self> {
        let data = Arc::new(data);
        let mut session = MapSession::new(Arc::clone(&data), settings.options.clone())?;

        match session.render() {
            Ok(plan) => info!(
                "initial view: season {}, {} features",
                plan.request.season,
                plan.feature_count()
            ),
            Err(e) => warn!("initial view could not be drawn: {}", e),
        }

        Ok(MapAppData {
            data,
            session: Arc::new(RwLock::new(session)),
            settings: Arc::new(settings),
        })
    }
}

impl Clone for MapAppData {
    fn clone(&self) -> Self {
        MapAppData {
            data: Arc::clone(&self.data),
            session: Arc::clone(&self.session),
            settings: Arc::clone(&self.settings),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
