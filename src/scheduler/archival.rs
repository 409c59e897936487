//! Periodic archival sweep job.

use sea_orm::DatabaseConnection;
use serenity::all::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobSchedulerError};

use crate::config::Config;
use crate::ctftime::CtftimeClient;
use crate::service::CtfLifecycleService;

/// Every 30 minutes; frequent enough that channels close shortly after an
/// event ends.
const ARCHIVE_CRON: &str = "0 */30 * * * *";

pub fn archive_job(
    db: DatabaseConnection,
    http: Arc<Http>,
    ctftime: CtftimeClient,
    config: Arc<Config>,
) -> Result<Job, JobSchedulerError> {
    Job::new_async(ARCHIVE_CRON, move |_uuid, _lock| {
        let db = db.clone();
        let http = http.clone();
        let ctftime = ctftime.clone();
        let config = config.clone();
        Box::pin(async move {
            let lifecycle = CtfLifecycleService::new(&db, http, &ctftime, &config);
            if let Err(err) = lifecycle.run_archive_tick().await {
                tracing::error!(error = %err, "archival sweep failed");
            }
        })
    })
}
