use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{score_tip, DriverName, Race, RaceId, ScoreResult, Tip, TOP_N};

/// One closed race evaluated against the player's tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceScore {
    pub race_id: RaceId,
    pub track: String,
    pub date: Option<NaiveDate>,
    pub winner: Option<DriverName>,
    pub tip: Vec<DriverName>,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub points: u32,
    /// Rounded average score of the most recent three evaluated races.
    pub form: u32,
    pub last_race_points: u32,
    pub accuracy: u32,
    pub races_scored: u32,
    pub best_race: Option<RaceScore>,
}

// Most recent first; undated races sort after every dated one.
pub(crate) fn recent_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Evaluates every closed race with official results against the player's
/// tips, most recent first. A closed race without a tip still appears,
/// scored against an empty order.
pub fn race_scores(races: &[Race], tips: &HashMap<RaceId, Tip>) -> Vec<RaceScore> {
    let mut scores: Vec<RaceScore> = races
        .iter()
        .filter(|race| race.is_scoreable())
        .map(|race| {
            let order = tips
                .get(&race.id)
                .map(|tip| tip.order.as_slice())
                .unwrap_or_default();
            RaceScore {
                race_id: race.id.clone(),
                track: race.track.clone(),
                date: race.date,
                winner: race.winner().map(str::to_owned),
                tip: order.iter().take(TOP_N).cloned().collect(),
                result: score_tip(order, &race.results_order),
            }
        })
        .collect();

    scores.sort_by(|a, b| recent_first(a.date, b.date));
    scores
}

pub fn aggregate_season(
    base_points: u32,
    races: &[Race],
    tips: &HashMap<RaceId, Tip>,
) -> SeasonStats {
    season_stats(base_points, &race_scores(races, tips))
}

/// Folds per-race evaluations (most recent first) into season totals.
pub fn season_stats(base_points: u32, scores: &[RaceScore]) -> SeasonStats {
    let points = base_points + scores.iter().map(|s| s.result.score).sum::<u32>();

    let recent = &scores[..scores.len().min(3)];
    let form = rounded_mean(recent.iter().map(|s| s.result.score));
    let accuracy = rounded_mean(scores.iter().map(|s| s.result.accuracy));

    // Without a single closed race there is nothing to show yet; a fifth
    // of the season total stands in as the placeholder.
    let last_race_points = scores
        .first()
        .map(|s| s.result.score)
        .unwrap_or(points / 5);

    let best_race = scores
        .iter()
        .fold(None::<&RaceScore>, |best, race| match best {
            Some(b) if race.result.score <= b.result.score => Some(b),
            _ => Some(race),
        })
        .cloned();

    SeasonStats {
        points,
        form,
        last_race_points,
        accuracy,
        races_scored: scores.len() as u32,
        best_race,
    }
}

fn rounded_mean(values: impl ExactSizeIterator<Item = u32>) -> u32 {
    let len = values.len();
    if len == 0 {
        return 0;
    }
    (values.sum::<u32>() as f64 / len as f64).round() as u32
}
