use crate::error::{LoadError, LoadResult};
use geojson::{Feature, GeoJson, Value};
use log::warn;
use serde_json::Value as JsonValue;
use std::str::FromStr;

pub const CLUBS_DOCUMENT: &str = "clubs.geojson";

/// Club feature as stored in the document: coordinates stay in GeoJSON (longitude, latitude) order
#[derive(Debug, Clone, PartialEq)]
pub struct ClubEntity {
    pub id: String,
    pub name: String,
    pub players: u32,
    pub coordinates: [f64; 2],
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn parse(raw: &str) -> LoadResult<Vec<ClubEntity>> {
        let geojson = GeoJson::from_str(raw).map_err(|source| LoadError::GeoJson {
            document: CLUBS_DOCUMENT.to_string(),
            source: Box::new(source),
        })?;

        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(LoadError::Format {
                document: CLUBS_DOCUMENT.to_string(),
                message: "expected a FeatureCollection".to_string(),
            });
        };

        Ok(collection
            .features
            .iter()
            .filter_map(|feature| {
                let club = Self::club(feature);
                if club.is_none() {
                    warn!("{}: skipping feature without id or point geometry", CLUBS_DOCUMENT);
                }
                club
            })
            .collect())
    }

    fn club(feature: &Feature) -> Option<ClubEntity> {
        let id = feature.property("id").and_then(Self::text)?;

        let coordinates = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(position)) if position.len() >= 2 => [position[0], position[1]],
            _ => return None,
        };

        let name = feature
            .property("name")
            .and_then(Self::text)
            .unwrap_or_else(|| id.clone());

        let players = match feature.property("players") {
            Some(value) => Self::player_count(value).unwrap_or_else(|| {
                warn!(
                    "{}: club '{}' has an invalid player count {}, using 0",
                    CLUBS_DOCUMENT, id, value
                );
                0
            }),
            None => 0,
        };

        Some(ClubEntity {
            id,
            name,
            players,
            coordinates,
        })
    }

    /// Non-negative whole number that fits a `u32`; `12` and `12.0` are both accepted
    fn player_count(value: &JsonValue) -> Option<u32> {
        if let Some(count) = value.as_u64() {
            return u32::try_from(count).ok();
        }

        let count = value.as_f64()?;
        if count.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&count) {
            return Some(count as u32);
        }

        None
    }

    fn text(value: &JsonValue) -> Option<String> {
        match value {
            JsonValue::String(text) => Some(text.clone()),
            JsonValue::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}
