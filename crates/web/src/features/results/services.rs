use sqlx::PgPool;
use storage::dto::result::{
    CreateResultRequest, EventResultsResponse, ResultWithContext, UpdateResultRequest,
};
use storage::error::Result;
use storage::models::{EventResult, ProgressStatus};
use storage::repository::event::EventRepository;
use storage::repository::matches::MatchRepository;
use storage::repository::result::ResultRepository;
use storage::services::event_status;

/// One event with results and matches, unfiltered (the organiser edit view)
pub async fn event_bundle(pool: &PgPool, event_id: i32) -> Result<EventResultsResponse> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;
    let results = ResultRepository::new(pool).list_for_event(event_id).await?;
    let matches = MatchRepository::new(pool).list_for_event(event_id).await?;

    Ok(EventResultsResponse {
        event,
        results,
        matches,
    })
}

pub async fn list_results(pool: &PgPool) -> Result<Vec<ResultWithContext>> {
    let repo = ResultRepository::new(pool);
    repo.list_with_context().await
}

/// Record a result and pull the event's cached status along with it
pub async fn create_result(
    pool: &PgPool,
    req: &CreateResultRequest,
    updated_by: i32,
) -> Result<EventResult> {
    let repo = ResultRepository::new(pool);
    let result = repo.create(req, updated_by).await?;

    event_status::refresh_after_result_change(pool, req.event_id).await?;

    Ok(result)
}

pub async fn update_result(
    pool: &PgPool,
    id: i32,
    req: &UpdateResultRequest,
    updated_by: i32,
) -> Result<EventResult> {
    let repo = ResultRepository::new(pool);
    repo.update(id, req, updated_by).await
}

/// Delete a result; the event status drops back to live or upcoming
pub async fn delete_result(pool: &PgPool, id: i32) -> Result<EventResult> {
    let repo = ResultRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    repo.delete(id).await?;

    event_status::refresh_after_result_change(pool, existing.event_id).await?;

    Ok(existing)
}

pub async fn set_event_status(
    pool: &PgPool,
    event_id: i32,
    status: ProgressStatus,
) -> Result<()> {
    let repo = EventRepository::new(pool);
    repo.set_status(event_id, status).await
}
