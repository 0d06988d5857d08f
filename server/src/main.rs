#[macro_use]
extern crate rocket;

mod entrypoints;

use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use gridtip_server::{store::Store, AppConfig};

#[derive(Debug, serde::Deserialize)]
pub struct Env {
    data_file: PathBuf,
    synthetic_opponents: Option<bool>,
}

#[launch]
async fn rocket() -> _ {
    dotenv::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty());
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let env = envy::from_env::<Env>().expect("Failed to load environment variables");
    let config = AppConfig {
        synthetic_opponents: env.synthetic_opponents.unwrap_or(true),
    };
    let store = Store::load(&env.data_file).expect("Failed to load league snapshot");

    let cors = rocket_cors::CorsOptions::default()
        .to_cors()
        .expect("Failed to build CORS options");

    rocket::build()
        .manage(store)
        .manage(config)
        .attach(cors)
        .attach(entrypoints::stage())
}
