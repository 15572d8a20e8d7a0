use sqlx::PgPool;

use crate::error::Result;
use crate::models::ProgressStatus;

/// Status of an individual event given how many podium places are filled.
pub fn status_for_result_count(count: i64) -> ProgressStatus {
    match count {
        0 => ProgressStatus::Upcoming,
        1 | 2 => ProgressStatus::Live,
        _ => ProgressStatus::Completed,
    }
}

/// Roll-up status for a sport from its events' cached statuses.
pub fn sport_status(live: i64, completed: i64, total: i64) -> ProgressStatus {
    if live > 0 {
        ProgressStatus::Live
    } else if total > 0 && completed == total {
        ProgressStatus::Completed
    } else {
        ProgressStatus::Upcoming
    }
}

/// Recompute and persist an event's status after a result row changed.
pub async fn refresh_after_result_change(
    pool: &PgPool,
    event_id: i32,
) -> Result<ProgressStatus> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM results WHERE event_id = $1",
    )
    .bind(event_id)
    .fetch_one(pool)
    .await?;

    let status = status_for_result_count(count);

    sqlx::query("UPDATE events SET status = $2 WHERE id = $1")
        .bind(event_id)
        .bind(status)
        .execute(pool)
        .await?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_event_progression() {
        assert_eq!(status_for_result_count(0), ProgressStatus::Upcoming);
        assert_eq!(status_for_result_count(1), ProgressStatus::Live);
        assert_eq!(status_for_result_count(2), ProgressStatus::Live);
        assert_eq!(status_for_result_count(3), ProgressStatus::Completed);
    }

    #[test]
    fn test_sport_with_live_event_is_live() {
        assert_eq!(sport_status(1, 4, 5), ProgressStatus::Live);
    }

    #[test]
    fn test_sport_completed_only_when_all_events_done() {
        assert_eq!(sport_status(0, 5, 5), ProgressStatus::Completed);
        assert_eq!(sport_status(0, 4, 5), ProgressStatus::Upcoming);
    }

    #[test]
    fn test_sport_without_events_is_upcoming() {
        assert_eq!(sport_status(0, 0, 0), ProgressStatus::Upcoming);
    }
}
