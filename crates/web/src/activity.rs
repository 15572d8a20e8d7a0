use storage::Database;
use storage::repository::activity_log::ActivityLogRepository;

/// Record an audit entry without blocking the mutation that triggered it.
/// A failed insert is reported in the server log and otherwise swallowed.
pub fn log_activity(
    db: &Database,
    user_id: i32,
    action: &'static str,
    entity_type: &'static str,
    entity_id: Option<i32>,
    details: String,
) {
    let pool = db.pool().clone();
    tokio::spawn(async move {
        let repo = ActivityLogRepository::new(&pool);
        if let Err(e) = repo
            .record(user_id, action, Some(entity_type), entity_id, Some(&details))
            .await
        {
            tracing::warn!("Failed to record activity ({action}): {e}");
        }
    });
}
