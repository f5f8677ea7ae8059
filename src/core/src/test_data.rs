use crate::club::{Club, ClubCollection};
use crate::data::TransferData;
use crate::player::Player;
use crate::season::Season;
use crate::shared::LatLng;
use crate::transfers::TransferEvent;

pub const REFERENCE: &str = "452";

pub fn transfer(season: &str, left: &str, joined: &str, fee: Option<&str>) -> TransferEvent {
    TransferEvent::new(
        season.to_string(),
        left.to_string(),
        joined.to_string(),
        fee.map(str::to_string),
    )
}

pub fn player(name: &str, history: Vec<TransferEvent>) -> Player {
    Player::new(
        name.to_string(),
        format!("https://img.example/{}.jpg", name.replace(' ', "_")),
        history,
    )
}

pub fn club(id: &str, name: &str, lat: f64, lng: f64, players: u32) -> Club {
    Club::new(id.to_string(), name.to_string(), LatLng::new(lat, lng), players)
}

/// Two clubs, one loan from the reference club in 2021
pub fn minimal() -> TransferData {
    let anna = player("Anna Loan", vec![transfer("2021", REFERENCE, "10", Some("Leihe"))]);

    TransferData::new(
        vec![anna.clone()],
        ClubCollection::new(vec![
            club(REFERENCE, "Reference", 0.0, 0.0, 5),
            club("10", "Other", 2.0, 0.0, 15),
        ]),
        vec![Season::new("2021".to_string(), vec![anna], Vec::new())],
    )
}

pub fn league() -> TransferData {
    let anna = player("Anna Loan", vec![transfer("2021", REFERENCE, "10", Some("Leihe"))]);

    let ben = player(
        "Ben Buy",
        vec![
            transfer("2019", "20", "30", Some("1,00 Mio. €")),
            transfer("2020", "30", REFERENCE, Some("2,00 Mio. €")),
            transfer("2021", REFERENCE, "20", Some("Leihe")),
            transfer("2022", "20", REFERENCE, Some("Leih-Ende")),
            transfer("2023", REFERENCE, "99", Some("ablösefrei")),
        ],
    );

    let carl = player("Carl Join", vec![transfer("2021", "30", REFERENCE, Some("ablösefrei"))]);

    let clubs = ClubCollection::new(vec![
        club(REFERENCE, "Reference", 51.5, 7.45, 12),
        club("10", "Loan Club", 50.9, 6.9, 2),
        club("20", "Munich", 48.1, 11.6, 4),
        club("30", "Madrid", 40.4, -3.7, 8),
        club("40", "Unused", 45.0, 9.2, 1),
    ]);

    let seasons = vec![
        Season::new("2020".to_string(), Vec::new(), vec![ben.clone()]),
        Season::new(
            "2021".to_string(),
            vec![anna.clone(), ben.clone()],
            vec![carl.clone()],
        ),
        Season::new("2022".to_string(), Vec::new(), vec![ben.clone()]),
        Season::new("2023".to_string(), vec![ben.clone()], Vec::new()),
        Season::new("1999".to_string(), vec![carl.clone()], Vec::new()),
    ];

    TransferData::new(vec![anna, ben, carl], clubs, seasons)
}
