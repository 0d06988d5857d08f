use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

mod leaderboard;
mod normalize;
mod scoring;
mod season;
mod tip;


pub use leaderboard::*;
pub use normalize::*;
pub use scoring::*;
pub use season::*;
pub use tip::*;

pub type RaceId = String;
pub type DriverName = String;

/// Only the first ten positions are ever wagered or scored.
pub const TOP_N: usize = 10;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RaceStatus {
    #[default]
    Open,
    Voting,
    Closed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Weather {
    #[default]
    Sunny,
    Cloudy,
    Rain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    pub track: String,
    pub date: Option<NaiveDate>,
    pub weather: Weather,
    pub tyres: Option<String>,
    pub status: RaceStatus,
    /// Official finishing order, index 0 = winner. Empty until the race is
    /// closed and results are entered.
    pub results_order: Vec<DriverName>,
}

impl Race {
    pub fn is_scoreable(&self) -> bool {
        self.status == RaceStatus::Closed && !self.results_order.is_empty()
    }

    pub fn winner(&self) -> Option<&str> {
        self.results_order.first().map(String::as_str)
    }
}

/// One player's predicted finishing order for one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub race_id: RaceId,
    pub order: Vec<DriverName>,
    pub updated_at: Option<DateTime<Utc>>,
}
