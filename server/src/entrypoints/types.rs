use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{BestPick, LeaderboardRow, Race, RaceScore, SeasonStats};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, Default, ToSchema)]
#[aliases(PaginatedLeaderboardResponse = PaginatedResponse<LeaderboardRowResponse>)]
pub struct PaginatedResponse<T: Serialize> {
    pub records: Vec<T>,
    pub page: u64,
    pub total_pages: u64,
    pub limit: u64,
    pub total_records: u64,
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn new(records: Vec<T>, page: u64, limit: u64, total_records: u64) -> Self {
        let extra_page = if total_records % limit == 0 { 0 } else { 1 };
        let total_pages = (total_records / limit) + extra_page;
        Self {
            records,
            page,
            total_pages,
            limit,
            total_records,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRowResponse {
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

impl From<LeaderboardRow> for LeaderboardRowResponse {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            rank: row.rank,
            username: row.username,
            display_name: row.display_name,
            team: row.team,
            country: row.country,
            points: row.points,
            form: row.form,
            last_race_points: row.last_race_points,
            is_user: row.is_user,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RaceResponse {
    pub id: String,
    pub name: String,
    pub track: String,
    pub date: Option<NaiveDate>,
    pub weather: String,
    pub tyres: Option<String>,
    pub status: String,
    pub results_order: Vec<String>,
}

impl From<&Race> for RaceResponse {
    fn from(race: &Race) -> Self {
        Self {
            id: race.id.clone(),
            name: race.name.clone(),
            track: race.track.clone(),
            date: race.date,
            weather: race.weather.to_string(),
            tyres: race.tyres.clone(),
            status: race.status.to_string(),
            results_order: race.results_order.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BestPickResponse {
    pub driver: String,
    pub predicted: u32,
    pub official: u32,
    pub points: u32,
}

impl From<BestPick> for BestPickResponse {
    fn from(pick: BestPick) -> Self {
        Self {
            driver: pick.driver,
            predicted: pick.predicted,
            official: pick.official,
            points: pick.points,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RaceScoreResponse {
    pub race_id: String,
    pub track: String,
    pub date: Option<NaiveDate>,
    pub winner: Option<String>,
    pub tip: Vec<String>,
    pub score: u32,
    pub exact: u32,
    pub near: u32,
    pub in_top: u32,
    pub accuracy: u32,
    pub best_pick: Option<BestPickResponse>,
}

impl From<RaceScore> for RaceScoreResponse {
    fn from(score: RaceScore) -> Self {
        Self {
            race_id: score.race_id,
            track: score.track,
            date: score.date,
            winner: score.winner,
            tip: score.tip,
            score: score.result.score,
            exact: score.result.exact,
            near: score.result.near,
            in_top: score.result.in_top,
            accuracy: score.result.accuracy,
            best_pick: score.result.best_pick.map(Into::into),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SeasonStatsResponse {
    pub points: u32,
    pub form: u32,
    pub last_race_points: u32,
    pub accuracy: u32,
    pub races_scored: u32,
    pub best_race: Option<RaceScoreResponse>,
}

impl From<SeasonStats> for SeasonStatsResponse {
    fn from(stats: SeasonStats) -> Self {
        Self {
            points: stats.points,
            form: stats.form,
            last_race_points: stats.last_race_points,
            accuracy: stats.accuracy,
            races_scored: stats.races_scored,
            best_race: stats.best_race.map(Into::into),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserProfileResponse {
    pub username: String,
    pub display_name: String,
    pub team: String,
    pub country: String,
    pub base_points: u32,
    pub season: SeasonStatsResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_rounds_partial_pages_up() {
        let full = PaginatedResponse::<u32>::new(vec![1, 2], 1, 2, 4);
        assert_eq!(full.total_pages, 2);

        let partial = PaginatedResponse::<u32>::new(vec![1, 2], 1, 2, 5);
        assert_eq!(partial.total_pages, 3);
    }
}
