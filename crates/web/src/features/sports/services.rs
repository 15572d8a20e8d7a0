use sqlx::PgPool;
use storage::dto::sport::{
    CreateSportRequest, EventsByCategory, SportDetailResponse, SportSummary,
    SportsByDayResponse, UpdateSportRequest,
};
use storage::dto::event::EventDetail;
use storage::error::Result;
use storage::models::{EventCategory, Sport};
use storage::repository::event::EventRepository;
use storage::repository::matches::MatchRepository;
use storage::repository::result::ResultRepository;
use storage::repository::sport::SportRepository;
use storage::services::{event_status, visibility};

/// List all sports with rolled-up status, grouped by tournament day
pub async fn list_sports(pool: &PgPool) -> Result<SportsByDayResponse> {
    let repo = SportRepository::new(pool);
    let rows = repo.list_with_counts().await?;

    let (day1, day2): (Vec<SportSummary>, Vec<SportSummary>) = rows
        .into_iter()
        .map(|row| {
            let status =
                event_status::sport_status(row.live_events, row.completed_events, row.total_events);
            SportSummary::new(row, status)
        })
        .partition(|sport| sport.day == 1);

    Ok(SportsByDayResponse { day1, day2 })
}

/// One sport with its events, results, and publicly visible matches.
/// Matches pass through the sport's visibility gate; results never do.
pub async fn sport_detail(pool: &PgPool, sport_id: i32) -> Result<SportDetailResponse> {
    let sport = SportRepository::new(pool).find_by_id(sport_id).await?;
    let events = EventRepository::new(pool).list_for_sport(sport_id).await?;

    let result_repo = ResultRepository::new(pool);
    let match_repo = MatchRepository::new(pool);

    let mut grouped = EventsByCategory {
        boys: Vec::new(),
        girls: Vec::new(),
        mixed: Vec::new(),
    };

    for event in events {
        let results = result_repo.list_for_event(event.id).await?;

        // Skip the match query outright when the gate is shut
        let matches = if sport.fixtures_visible && !sport.visible_rounds.is_empty() {
            visibility::public_matches(&sport, match_repo.list_for_event(event.id).await?)
        } else {
            Vec::new()
        };

        let bucket = match event.category {
            EventCategory::Boys => &mut grouped.boys,
            EventCategory::Girls => &mut grouped.girls,
            EventCategory::Mixed => &mut grouped.mixed,
        };
        bucket.push(EventDetail {
            event,
            results,
            matches,
        });
    }

    Ok(SportDetailResponse {
        sport,
        events: grouped,
    })
}

pub async fn create_sport(pool: &PgPool, req: &CreateSportRequest) -> Result<Sport> {
    let repo = SportRepository::new(pool);
    repo.create(req).await
}

pub async fn update_sport(pool: &PgPool, id: i32, req: &UpdateSportRequest) -> Result<Sport> {
    let repo = SportRepository::new(pool);
    repo.update(id, req).await
}

pub async fn delete_sport(pool: &PgPool, id: i32) -> Result<Sport> {
    let repo = SportRepository::new(pool);
    let sport = repo.find_by_id(id).await?;
    repo.delete(id).await?;
    Ok(sport)
}
