//! Scheduled background jobs.
//!
//! Three independent cron jobs share the database pool, the bot's `Http`
//! handle, and the CTFtime client. Tick failures are logged inside the job
//! closure and never cancel the schedule.

pub mod announcements;
pub mod archival;
pub mod team_stats;

use sea_orm::DatabaseConnection;
use serenity::all::Http;
use std::sync::Arc;
use tokio_cron_scheduler::JobScheduler;

use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::error::AppError;

pub async fn start_scheduler(
    db: DatabaseConnection,
    http: Arc<Http>,
    ctftime: CtftimeClient,
    config: Arc<Config>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler
        .add(announcements::announce_job(
            db.clone(),
            http.clone(),
            ctftime.clone(),
            config.clone(),
        )?)
        .await?;
    scheduler
        .add(archival::archive_job(
            db.clone(),
            http.clone(),
            ctftime.clone(),
            config.clone(),
        )?)
        .await?;
    scheduler
        .add(team_stats::team_stats_job(db, http, ctftime, config)?)
        .await?;

    scheduler.start().await?;
    tracing::info!("scheduler started");
    Ok(())
}
