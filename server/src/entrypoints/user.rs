use gridtip_server::store::Store;
use rocket::{serde::json::Json, State};

use super::types::{RaceScoreResponse, SeasonStatsResponse, UserProfileResponse};

#[utoipa::path(context_path = "/users", responses(
    (status = 200, description = "Get a player's profile and season stats", body = UserProfileResponse),
    (status = 404, description = "Unknown player")
))]
#[get("/<username>")]
async fn get_user(store: &State<Store>, username: &str) -> Option<Json<UserProfileResponse>> {
    let player = store.player(username)?;
    let season: SeasonStatsResponse = player.season_stats(store.races()).into();

    Some(Json(UserProfileResponse {
        username: player.username.clone(),
        display_name: player.display_name.clone(),
        team: player.team.clone(),
        country: player.country.clone(),
        base_points: player.base_points,
        season,
    }))
}

#[utoipa::path(context_path = "/users", responses(
    (status = 200, description = "Get a player's per-race evaluations, most recent first", body = Vec<RaceScoreResponse>),
    (status = 404, description = "Unknown player")
))]
#[get("/<username>/races")]
async fn get_user_races(
    store: &State<Store>,
    username: &str,
) -> Option<Json<Vec<RaceScoreResponse>>> {
    let player = store.player(username)?;
    let scores = player
        .race_scores(store.races())
        .into_iter()
        .map(Into::into)
        .collect();
    Some(Json(scores))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing user entrypoints", |rocket| async {
        rocket.mount("/users", rocket::routes![get_user, get_user_races])
    })
}
