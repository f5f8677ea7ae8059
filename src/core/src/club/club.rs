use crate::shared::LatLng;
use serde::Serialize;

const CLUB_ICON_BASE_SIZE: f64 = 38.0;
const CLUB_ICON_URL: &str = "https://tmssl.akamaized.net/images/wappen/head";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub location: LatLng,
    pub players: u32,
}

impl Club {
    pub fn new(id: String, name: String, location: LatLng, players: u32) -> Self {
        Club {
            id,
            name,
            location,
            players,
        }
    }

    /// Grows with the number of players moved through the club, capped at full size.
    pub fn icon_scale(&self) -> f64 {
        (0.5 + 0.05 * self.players as f64).min(1.0)
    }

    /// Edge length of the square club icon in pixels
    pub fn icon_size(&self) -> f64 {
        CLUB_ICON_BASE_SIZE * self.icon_scale()
    }

    pub fn icon_url(&self) -> String {
        format!("{}/{}.png", CLUB_ICON_URL, self.id)
    }
}
