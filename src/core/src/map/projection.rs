use crate::shared::LatLng;
use nalgebra::Point2;
use std::f64::consts::PI;

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Spherical (web) Mercator mapping between geographic and pixel space at a fixed zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    pub zoom: f64,
}

impl WebMercator {
    pub fn new(zoom: f64) -> Self {
        WebMercator { zoom }
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    pub fn project(&self, position: LatLng) -> Point2<f64> {
        let size = self.world_size();
        let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x = size * (0.5 + position.lng / 360.0);
        let y = size * (0.5 - (PI / 4.0 + lat / 2.0).tan().ln() / (2.0 * PI));

        Point2::new(x, y)
    }

    pub fn unproject(&self, point: Point2<f64>) -> LatLng {
        let size = self.world_size();

        let lng = (point.x / size - 0.5) * 360.0;
        let lat = (2.0 * ((0.5 - point.y / size) * 2.0 * PI).exp().atan() - PI / 2.0).to_degrees();

        LatLng::new(lat, lng)
    }

    /// Midpoint taken in screen space, so it sits on the straight line drawn between the two positions.
    pub fn pixel_midpoint(&self, from: LatLng, to: LatLng) -> LatLng {
        let a = self.project(from);
        let b = self.project(to);

        self.unproject(nalgebra::center(&a, &b))
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        WebMercator::new(5.0)
    }
}
