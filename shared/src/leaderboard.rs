use serde::{Deserialize, Serialize};

use crate::season::recent_first;
use crate::Race;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub display_name: String,
    pub team: String,
    pub country: String,
    pub points: u32,
    pub form: u32,
    pub last_race_points: u32,
    pub is_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub username: String,
    pub display_name: String,
    pub team: String,
    pub country: String,
    pub points: u32,
    pub form: u32,
    pub last_race_points: u32,
    pub is_user: bool,
}

impl LeaderboardRow {
    fn new(rank: u32, entry: LeaderboardEntry) -> Self {
        Self {
            rank,
            username: entry.username,
            display_name: entry.display_name,
            team: entry.team,
            country: entry.country,
            points: entry.points,
            form: entry.form,
            last_race_points: entry.last_race_points,
            is_user: entry.is_user,
        }
    }
}

/// Inserts the acting player's computed row into the roster rows. The
/// computed row is never dropped: on a username or display-name collision
/// it is kept alongside the colliding entry, with a suffixed username so
/// both stay addressable.
pub fn merge_player(
    rows: Vec<LeaderboardEntry>,
    mut player: LeaderboardEntry,
) -> Vec<LeaderboardEntry> {
    let collides = rows
        .iter()
        .any(|row| row.username == player.username || row.display_name == player.display_name);
    if collides {
        player.username = format!("{} (you)", player.username);
    }

    let mut merged = rows;
    merged.push(player);
    merged
}

/// Sorts by points descending and assigns 1-based sequential ranks.
/// Equal-point rows keep their insertion order; two equal rows get
/// consecutive distinct ranks.
pub fn rank_leaderboard(mut rows: Vec<LeaderboardEntry>) -> Vec<LeaderboardRow> {
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows.into_iter()
        .enumerate()
        .map(|(index, entry)| LeaderboardRow::new(index as u32 + 1, entry))
        .collect()
}

const SYNTHETIC_ROSTER: [(&str, &str, &str, &str); 4] = [
    ("rival-laurent", "Laurent Vibes", "team-ferrari", "FR"),
    ("rival-smooth", "Smooth Operator", "team-mclaren", "ES"),
    ("rival-kimi", "Iceman Jr.", "team-mercedes", "FI"),
    ("rival-checo", "Minttu Racing", "team-red-bull", "MX"),
];

fn race_seed(race: &Race) -> u32 {
    race.id
        .bytes()
        .chain(race.track.bytes())
        .fold(0u32, |acc, byte| {
            acc.wrapping_mul(31).wrapping_add(byte as u32)
        })
}

/// Reproducible per-race score for one synthetic rival. Derived from the
/// race id and track so repeated evaluations stay stable without any
/// persisted state.
pub fn synthetic_race_score(race: &Race, seed_index: usize) -> u32 {
    let seed = race_seed(race).wrapping_add(seed_index as u32 * 17);
    8 + seed % 48
}

/// Demo-only stand-ins for an empty roster. Callers with real opponent
/// data must not reach this; dropping the call site disables the fallback
/// without touching ranking.
pub fn synthetic_opponents(races: &[Race]) -> Vec<LeaderboardEntry> {
    let mut scoreable: Vec<&Race> = races.iter().filter(|race| race.is_scoreable()).collect();
    scoreable.sort_by(|a, b| recent_first(a.date, b.date));

    SYNTHETIC_ROSTER
        .iter()
        .enumerate()
        .map(|(index, (username, display_name, team, country))| {
            let scores: Vec<u32> = scoreable
                .iter()
                .map(|race| synthetic_race_score(race, index))
                .collect();
            let points = scores.iter().sum();
            let recent = &scores[..scores.len().min(3)];
            let form = if recent.is_empty() {
                0
            } else {
                (recent.iter().sum::<u32>() as f64 / recent.len() as f64).round() as u32
            };

            LeaderboardEntry {
                username: (*username).to_owned(),
                display_name: (*display_name).to_owned(),
                team: (*team).to_owned(),
                country: (*country).to_owned(),
                points,
                form,
                last_race_points: scores.first().copied().unwrap_or(0),
                is_user: false,
            }
        })
        .collect()
}
