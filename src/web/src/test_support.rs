use crate::{MapAppData, MapSettings, ServerRoutes};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use map_core::{Club, ClubCollection, LatLng, Player, Season, TransferData, TransferEvent};
use serde_json::Value;
use tower::ServiceExt;

fn player(name: &str, season: &str, left: &str, joined: &str, fee: &str) -> Player {
    Player::new(
        name.to_string(),
        String::new(),
        vec![TransferEvent::new(
            season.to_string(),
            left.to_string(),
            joined.to_string(),
            Some(fee.to_string()),
        )],
    )
}

pub fn test_data() -> TransferData {
    let anna = player("Anna Loan", "2021", "452", "10", "Leihe");
    let carl = player("Carl Join", "2021", "30", "452", "ablösefrei");

    TransferData::new(
        vec![anna.clone(), carl.clone()],
        ClubCollection::new(vec![
            Club::new("452".to_string(), "Reference".to_string(), LatLng::new(0.0, 0.0), 5),
            Club::new("10".to_string(), "Other".to_string(), LatLng::new(2.0, 0.0), 15),
            Club::new("30".to_string(), "Madrid".to_string(), LatLng::new(40.4, -3.7), 8),
        ]),
        vec![
            Season::new("2021".to_string(), vec![anna], vec![carl]),
            Season::new("2022".to_string(), Vec::new(), Vec::new()),
        ],
    )
}

pub fn test_app() -> Router {
    let state = MapAppData::new(test_data(), MapSettings::default()).unwrap();

    ServerRoutes::create().with_state(state)
}

pub async fn request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }

    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
