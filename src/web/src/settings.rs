use map_core::{IntegrityPolicy, ReconcileOptions, WebMercator};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DATA_DIR: &str = "Data";
const DEFAULT_PORT: u16 = 18000;
const DEFAULT_ZOOM: f64 = 5.0;

/// Initial view of the base map
#[derive(Debug, Clone, Serialize)]
pub struct MapViewConfig {
    pub center: [f64; 2],
    pub zoom: f64,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl MapViewConfig {
    pub fn with_zoom(zoom: f64) -> Self {
        MapViewConfig {
            center: [50.85, 12.5],
            zoom,
            max_zoom: 19,
            tile_url: "http://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapSettings {
    pub data_dir: PathBuf,
    pub port: u16,
    pub options: ReconcileOptions,
    pub view: MapViewConfig,
}

impl MapSettings {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, String> {
        let defaults = ReconcileOptions::default();

        let zoom = parse_or(&lookup, "MAP_ZOOM", DEFAULT_ZOOM)?;

        let options = ReconcileOptions {
            reference_club_id: lookup("REFERENCE_CLUB_ID").unwrap_or(defaults.reference_club_id),
            integrity: parse_or(&lookup, "INTEGRITY_MODE", IntegrityPolicy::Fail)?,
            projection: WebMercator::new(zoom),
        };

        Ok(MapSettings {
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            options,
            view: MapViewConfig::with_zoom(zoom),
        })
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        MapSettings {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            port: DEFAULT_PORT,
            options: ReconcileOptions::default(),
            view: MapViewConfig::with_zoom(DEFAULT_ZOOM),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| format!("invalid {} '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<MapSettings, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        MapSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();

        assert_eq!(settings.port, 18000);
        assert_eq!(settings.data_dir, PathBuf::from("Data"));
        assert_eq!(settings.options.reference_club_id, "452");
        assert_eq!(settings.options.integrity, IntegrityPolicy::Fail);
        assert_eq!(settings.view.zoom, 5.0);
    }

    #[test]
    fn test_overrides() {
        let settings = settings(&[
            ("PORT", "8080"),
            ("DATA_DIR", "/srv/transfers"),
            ("REFERENCE_CLUB_ID", "27"),
            ("INTEGRITY_MODE", "skip"),
            ("MAP_ZOOM", "6"),
        ])
        .unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.data_dir, PathBuf::from("/srv/transfers"));
        assert_eq!(settings.options.reference_club_id, "27");
        assert_eq!(settings.options.integrity, IntegrityPolicy::Skip);
        assert_eq!(settings.options.projection.zoom, 6.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(settings(&[("PORT", "eighty")]).is_err());
        assert!(settings(&[("INTEGRITY_MODE", "maybe")]).is_err());
    }
}
