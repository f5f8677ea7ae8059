use serde::{Deserialize, Serialize};

/// Geographic position in the (latitude, longitude) order used by the map surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    /// Builds a position from a GeoJSON `[longitude, latitude]` pair.
    ///
    /// This is the only place the axis order is swapped, every loaded
    /// coordinate passes through it exactly once.
    pub fn from_lon_lat(lon_lat: [f64; 2]) -> Self {
        let [lng, lat] = lon_lat;
        LatLng { lat, lng }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}
