use sqlx::PgPool;
use storage::dto::matches::{
    CreateMatchRequest, QualificationQuery, QualifiedTeam, UpdateMatchRequest,
};
use storage::error::Result;
use storage::models::Match;
use storage::repository::matches::MatchRepository;
use storage::services::match_lifecycle::{self, MatchUpdateOutcome};
use storage::services::qualification;

pub async fn create_match(
    pool: &PgPool,
    req: &CreateMatchRequest,
    updated_by: i32,
) -> Result<Match> {
    match_lifecycle::create_match(pool, req, updated_by).await
}

pub async fn update_match(
    pool: &PgPool,
    id: i32,
    req: &UpdateMatchRequest,
    updated_by: i32,
) -> Result<MatchUpdateOutcome> {
    match_lifecycle::update_match(pool, id, req, updated_by).await
}

/// Delete a match; derived results go with it via the cascade
pub async fn delete_match(pool: &PgPool, id: i32) -> Result<Match> {
    let repo = MatchRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    repo.delete(id).await?;
    Ok(existing)
}

/// Departments eligible for pairing into the target round of an event
pub async fn qualified_teams(
    pool: &PgPool,
    query: &QualificationQuery,
) -> Result<Vec<QualifiedTeam>> {
    let matches = MatchRepository::new(pool)
        .list_for_event(query.event_id)
        .await?;

    Ok(qualification::qualified_teams(
        &matches,
        query.source_round,
        query.target_round,
    ))
}
