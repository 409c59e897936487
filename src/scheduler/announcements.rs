//! Daily CTF announcement job.

use sea_orm::DatabaseConnection;
use serenity::all::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobSchedulerError};

use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::service::CtfLifecycleService;

/// Runs every day at 09:00 UTC; the tick itself decides whether today is an
/// announcement day.
const ANNOUNCE_CRON: &str = "0 0 9 * * *";

pub fn announce_job(
    db: DatabaseConnection,
    http: Arc<Http>,
    ctftime: CtftimeClient,
    config: Arc<Config>,
) -> Result<Job, JobSchedulerError> {
    Job::new_async(ANNOUNCE_CRON, move |_uuid, _lock| {
        let db = db.clone();
        let http = http.clone();
        let ctftime = ctftime.clone();
        let config = config.clone();
        Box::pin(async move {
            let lifecycle = CtfLifecycleService::new(&db, http, &ctftime, &config);
            if let Err(err) = lifecycle.run_announce_tick().await {
                tracing::error!(error = %err, "announcement tick failed");
            }
        })
    })
}
