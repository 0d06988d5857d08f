use gridtip_server::store::Store;
use itertools::Itertools;
use rocket::{serde::json::Json, State};

use super::types::RaceResponse;

#[utoipa::path(context_path = "/races", responses(
    (status = 200, description = "Get the season calendar, oldest race first", body = Vec<RaceResponse>)
))]
#[get("/")]
async fn get_races(store: &State<Store>) -> Json<Vec<RaceResponse>> {
    let races = store
        .races()
        .iter()
        .sorted_by_key(|race| race.date)
        .map(Into::into)
        .collect();
    Json(races)
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing race entrypoints", |rocket| async {
        rocket.mount("/races", rocket::routes![get_races])
    })
}
