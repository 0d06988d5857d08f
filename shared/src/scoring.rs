use serde::{Deserialize, Serialize};

use crate::{DriverName, TOP_N};

/// F1-style points for an exact position hit, index 0 = winner.
pub const POSITION_POINTS: [u32; TOP_N] = [25, 18, 15, 12, 10, 8, 6, 4, 3, 2];

const WINNER_BONUS: u32 = 5;
const PODIUM_BONUS: u32 = 6;
const IN_TOP_POINTS: u32 = 3;
const NEAR_MISS_FLOOR: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPick {
    pub driver: DriverName,
    /// 1-based predicted position.
    pub predicted: u32,
    /// 1-based official position.
    pub official: u32,
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub exact: u32,
    pub near: u32,
    pub in_top: u32,
    /// Exact hits as a percentage of the compared length.
    pub accuracy: u32,
    pub best_pick: Option<BestPick>,
}

fn position_points(index: usize) -> u32 {
    POSITION_POINTS.get(index).copied().unwrap_or(2)
}

/// Scores one predicted order against the official finishing order.
///
/// Exact hits earn the full position points (the winner slot carries an
/// extra 5), one-off misses earn half points with a floor of 6, any other
/// driver inside the official top ten earns a flat 3. Drivers absent from
/// the official top ten contribute nothing. Getting the winner right adds
/// a flat 5, naming the complete podium in any order adds a flat 6.
pub fn score_tip(tip_order: &[DriverName], results_order: &[DriverName]) -> ScoreResult {
    let tip = &tip_order[..tip_order.len().min(TOP_N)];
    let official = &results_order[..results_order.len().min(TOP_N)];

    let mut result = ScoreResult::default();

    for (index, driver) in tip.iter().enumerate() {
        let Some(official_index) = official.iter().position(|name| name == driver) else {
            continue;
        };

        let points = if official_index == index {
            result.exact += 1;
            position_points(index) + if index == 0 { WINNER_BONUS } else { 0 }
        } else if official_index.abs_diff(index) == 1 {
            result.near += 1;
            NEAR_MISS_FLOOR.max((position_points(index) as f64 * 0.5).round() as u32)
        } else {
            result.in_top += 1;
            IN_TOP_POINTS
        };

        result.score += points;
        // First entry wins ties: replace only on strictly greater points.
        if result
            .best_pick
            .as_ref()
            .map_or(true, |best| points > best.points)
        {
            result.best_pick = Some(BestPick {
                driver: driver.clone(),
                predicted: index as u32 + 1,
                official: official_index as u32 + 1,
                points,
            });
        }
    }

    if matches!((tip.first(), official.first()), (Some(t), Some(o)) if t == o) {
        result.score += WINNER_BONUS;
    }

    let podium = &official[..official.len().min(3)];
    let podium_hits = tip
        .iter()
        .take(3)
        .filter(|driver| podium.contains(driver))
        .count();
    if podium_hits == 3 {
        result.score += PODIUM_BONUS;
    }

    let compared = official.len().min(tip.len()).max(1);
    result.accuracy = (result.exact as f64 / compared as f64 * 100.0).round() as u32;

    result
}
