use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::instrument;

use shared::{
    aggregate_season, normalize_races, normalize_tips, race_scores, LeaderboardEntry, Race,
    RaceId, RaceScore, SeasonStats, Tip,
};

/// One player as stored in the snapshot: identity, base season points and
/// tips keyed by race id.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub username: String,
    pub display_name: String,
    pub team: String,
    pub country: String,
    pub base_points: u32,
    pub tips: HashMap<RaceId, Tip>,
}

impl PlayerRecord {
    pub fn season_stats(&self, races: &[Race]) -> SeasonStats {
        aggregate_season(self.base_points, races, &self.tips)
    }

    pub fn race_scores(&self, races: &[Race]) -> Vec<RaceScore> {
        race_scores(races, &self.tips)
    }

    /// The player's computed leaderboard row.
    pub fn entry(&self, races: &[Race]) -> LeaderboardEntry {
        let stats = self.season_stats(races);
        LeaderboardEntry {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            team: self.team.clone(),
            country: self.country.clone(),
            points: stats.points,
            form: stats.form,
            last_race_points: stats.last_race_points,
            is_user: false,
        }
    }
}

/// Immutable snapshot of the whole league, loaded once at startup and
/// shared as managed state. Every computation reads from here; nothing
/// writes back.
#[derive(Debug, Clone, Default)]
pub struct Store {
    races: Vec<Race>,
    players: Vec<PlayerRecord>,
}

impl Store {
    #[instrument]
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read league snapshot {}", path.display()))?;
        let snapshot: Value =
            serde_json::from_str(&raw).context("league snapshot is not valid JSON")?;
        let store = Self::from_snapshot(&snapshot);
        tracing::info!(
            races = store.races.len(),
            players = store.players.len(),
            "loaded league snapshot"
        );
        Ok(store)
    }

    /// Every record passes through the shared normalizer; malformed
    /// entries degrade instead of failing the load.
    pub fn from_snapshot(snapshot: &Value) -> Self {
        let races = normalize_races(snapshot.get("races").unwrap_or(&Value::Null));
        let players = snapshot
            .get("players")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(player_record).collect())
            .unwrap_or_default();
        Self { races, players }
    }

    pub fn races(&self) -> &[Race] {
        &self.races
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn player(&self, username: &str) -> Option<&PlayerRecord> {
        self.players
            .iter()
            .find(|player| player.username == username)
    }

    /// Roster rows for everyone except the acting player.
    pub fn opponent_rows(&self, username: &str) -> Vec<LeaderboardEntry> {
        self.players
            .iter()
            .filter(|player| player.username != username)
            .map(|player| player.entry(&self.races))
            .collect()
    }
}

fn player_record(record: &Value) -> Option<PlayerRecord> {
    let username = record
        .get("username")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?
        .to_owned();

    let field = |key: &str| {
        record
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
    };

    Some(PlayerRecord {
        display_name: field("displayName")
            .or_else(|| field("display_name"))
            .unwrap_or_else(|| username.clone()),
        team: field("favoriteTeam")
            .or_else(|| field("team"))
            .unwrap_or_else(|| "team-default".to_owned()),
        country: field("country").unwrap_or_else(|| "CH".to_owned()),
        base_points: record
            .get("basePoints")
            .or_else(|| record.get("base_points"))
            .or_else(|| record.get("points"))
            .and_then(Value::as_u64)
            .unwrap_or(0) as u32,
        tips: normalize_tips(record.get("tips").unwrap_or(&Value::Null)),
        username,
    })
}
