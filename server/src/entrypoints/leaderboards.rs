use gridtip_server::{store::Store, AppConfig};
use rocket::{serde::json::Json, State};
use shared::{merge_player, rank_leaderboard, synthetic_opponents, LeaderboardRow};

use super::types::{LeaderboardRowResponse, PaginatedResponse};

/// Ranked rows for the whole league, or for one acting player merged with
/// the rest of the roster. An empty roster falls back to the synthetic
/// rivals unless that is disabled.
fn leaderboard_rows(store: &Store, config: &AppConfig, username: Option<&str>) -> Vec<LeaderboardRow> {
    match username.and_then(|name| store.player(name)) {
        Some(player) => {
            let mut opponents = store.opponent_rows(&player.username);
            if opponents.is_empty() && config.synthetic_opponents {
                opponents = synthetic_opponents(store.races());
            }
            let mut entry = player.entry(store.races());
            entry.is_user = true;
            rank_leaderboard(merge_player(opponents, entry))
        }
        None => rank_leaderboard(
            store
                .players()
                .iter()
                .map(|player| player.entry(store.races()))
                .collect(),
        ),
    }
}

#[utoipa::path(context_path = "/leaderboard", responses(
    (status = 200, description = "Get the ranked season leaderboard", body = PaginatedLeaderboardResponse)
))]
#[get("/users?<username>&<page>&<limit>")]
async fn get_leaderboard(
    store: &State<Store>,
    config: &State<AppConfig>,
    username: Option<String>,
    page: Option<u64>,
    limit: Option<u64>,
) -> Json<PaginatedResponse<LeaderboardRowResponse>> {
    let page = page.unwrap_or(0);
    let limit = limit.unwrap_or(50).max(1);

    let rows = leaderboard_rows(store, config, username.as_deref());
    let total = rows.len() as u64;
    let records = rows
        .into_iter()
        .skip((page * limit) as usize)
        .take(limit as usize)
        .map(Into::into)
        .collect();

    Json(PaginatedResponse::new(records, page + 1, limit, total))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing leaderboard entrypoints", |rocket| async {
        rocket.mount("/leaderboard", rocket::routes![get_leaderboard])
    })
}
