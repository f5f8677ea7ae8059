use crate::map::WebMercator;
use std::str::FromStr;

pub const DEFAULT_REFERENCE_CLUB_ID: &str = "452";

/// Behaviour when a player listed for a season has no matching transfer
/// or a transfer cannot be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrityPolicy {
    #[default]
    Fail,
    Skip,
}

impl FromStr for IntegrityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(IntegrityPolicy::Fail),
            "skip" => Ok(IntegrityPolicy::Skip),
            other => Err(format!("unknown integrity mode '{}', expected fail or skip", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    pub reference_club_id: String,
    pub integrity: IntegrityPolicy,
    pub projection: WebMercator,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        ReconcileOptions {
            reference_club_id: DEFAULT_REFERENCE_CLUB_ID.to_string(),
            integrity: IntegrityPolicy::default(),
            projection: WebMercator::default(),
        }
    }
}
