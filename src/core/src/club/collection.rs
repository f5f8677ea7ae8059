use crate::club::Club;
use std::collections::HashMap;

/// Clubs in document order with an id lookup
#[derive(Debug, Clone, Default)]
pub struct ClubCollection {
    clubs: Vec<Club>,
    index: HashMap<String, usize>,
}

impl ClubCollection {
    pub fn new(clubs: Vec<Club>) -> Self {
        let mut index = HashMap::with_capacity(clubs.len());

        for (idx, club) in clubs.iter().enumerate() {
            // first occurrence wins, matching a linear find over the features
            index.entry(club.id.clone()).or_insert(idx);
        }

        ClubCollection { clubs, index }
    }

    pub fn get(&self, id: &str) -> Option<&Club> {
        self.index.get(id).map(|&idx| &self.clubs[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Club> {
        self.clubs.iter()
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}
