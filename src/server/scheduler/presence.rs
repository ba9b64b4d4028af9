use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, ShardManager};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{bot::command::truncate, error::AppError, service::phrase::PhraseService};

/// Every ten minutes, on the minute.
const PRESENCE_SCHEDULE: &str = "0 */10 * * * *";

/// Discord cuts custom statuses at 128 characters.
const STATUS_MAX_LENGTH: usize = 128;

/// Starts the presence rotation scheduler
///
/// Every run picks a random stored phrase and shows it as the bot's custom status on
/// every shard. Without stored phrases the current status is left alone.
///
/// # Arguments
/// - `db`: Database connection
/// - `shard_manager`: Shard manager of the running bot client
pub async fn start_scheduler(
    db: DatabaseConnection,
    shard_manager: Arc<ShardManager>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(PRESENCE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let shard_manager = shard_manager.clone();

        Box::pin(async move {
            if let Err(e) = rotate_presence(&db, &shard_manager).await {
                tracing::error!("Error rotating bot presence: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence scheduler started");

    Ok(())
}

async fn rotate_presence(
    db: &DatabaseConnection,
    shard_manager: &ShardManager,
) -> Result<(), AppError> {
    let Some(phrase) = PhraseService::new(db).random().await? else {
        tracing::debug!("No phrases stored, keeping current presence");
        return Ok(());
    };

    let status = status_text(&phrase.content);

    let runners = shard_manager.runners.lock().await;
    for runner in runners.values() {
        runner
            .runner_tx
            .set_activity(Some(ActivityData::custom(status.clone())));
    }

    tracing::debug!("Presence set on {} shards", runners.len());

    Ok(())
}

/// Collapses line breaks, a custom status is a single line.
fn status_text(content: &str) -> String {
    let single_line = content.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&single_line, STATUS_MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_single_line() {
        assert_eq!(status_text("Stay\n  hydrated\tfriends"), "Stay hydrated friends");
    }

    #[test]
    fn long_status_is_truncated() {
        let status = status_text(&"a".repeat(500));
        assert_eq!(status.chars().count(), STATUS_MAX_LENGTH);
        assert!(status.ends_with('…'));
    }
}
