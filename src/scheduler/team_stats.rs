//! Daily CTFtime team standing refresh job.

use sea_orm::DatabaseConnection;
use serenity::all::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobSchedulerError};

use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::service::TeamStatsService;

const TEAM_STATS_CRON: &str = "0 30 9 * * *";

pub fn team_stats_job(
    db: DatabaseConnection,
    http: Arc<Http>,
    ctftime: CtftimeClient,
    config: Arc<Config>,
) -> Result<Job, JobSchedulerError> {
    Job::new_async(TEAM_STATS_CRON, move |_uuid, _lock| {
        let db = db.clone();
        let http = http.clone();
        let ctftime = ctftime.clone();
        let config = config.clone();
        Box::pin(async move {
            let service = TeamStatsService::new(&db, &http, &ctftime, &config);
            if let Err(err) = service.refresh().await {
                tracing::error!(error = %err, "team stats refresh failed");
            }
        })
    })
}
