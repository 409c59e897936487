mod bot;
mod config;
mod ctftime;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    let db = startup::connect_to_database(&config).await?;
    let ctftime = CtftimeClient::new(
        startup::ctftime_http_client()?,
        config.ctftime_api_url.clone(),
    );

    tracing::info!("starting bot");

    let (mut client, http) =
        bot::start::init_bot(db.clone(), ctftime.clone(), config.clone()).await?;

    scheduler::start_scheduler(db, http, ctftime, config).await?;

    client.start().await?;
    Ok(())
}
