use sqlx::PgPool;
use storage::dto::activity::ActivityLogEntry;
use storage::dto::event::{CreateEventRequest, EventWithSport};
use storage::dto::matches::MatchDetail;
use storage::dto::user::{CreateUserRequest, UpdateUserRequest};
use storage::dto::visibility::UpdateVisibilityRequest;
use storage::error::Result;
use storage::models::{Department, Event, RoundSet, Sport, User};
use storage::repository::activity_log::ActivityLogRepository;
use storage::repository::department::DepartmentRepository;
use storage::repository::event::EventRepository;
use storage::repository::matches::MatchRepository;
use storage::repository::sport::SportRepository;
use storage::repository::user::UserRepository;

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list().await
}

pub async fn create_user(
    pool: &PgPool,
    req: &CreateUserRequest,
    password_hash: &str,
) -> Result<User> {
    let repo = UserRepository::new(pool);
    let display_name = req.display_name.as_deref().unwrap_or(&req.username);
    repo.create(&req.username, password_hash, req.role, display_name)
        .await
}

pub async fn update_user(
    pool: &PgPool,
    id: i32,
    req: &UpdateUserRequest,
    password_hash: Option<&str>,
) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.update(id, req, password_hash).await
}

pub async fn delete_user(pool: &PgPool, id: i32) -> Result<User> {
    let repo = UserRepository::new(pool);
    let user = repo.find_by_id(id).await?;
    repo.delete(id).await?;
    Ok(user)
}

pub async fn list_departments(pool: &PgPool) -> Result<Vec<Department>> {
    let repo = DepartmentRepository::new(pool);
    repo.list().await
}

pub async fn create_department(
    pool: &PgPool,
    name: &str,
    short_code: &str,
) -> Result<Department> {
    let repo = DepartmentRepository::new(pool);
    repo.create(name, short_code).await
}

pub async fn update_department(
    pool: &PgPool,
    id: i32,
    name: Option<&str>,
    short_code: Option<&str>,
) -> Result<Department> {
    let repo = DepartmentRepository::new(pool);
    repo.update(id, name, short_code).await
}

pub async fn delete_department(pool: &PgPool, id: i32) -> Result<Department> {
    let repo = DepartmentRepository::new(pool);
    let department = repo.find_by_id(id).await?;
    repo.delete(id).await?;
    Ok(department)
}

pub async fn list_events(pool: &PgPool) -> Result<Vec<EventWithSport>> {
    let repo = EventRepository::new(pool);
    repo.list_with_sport().await
}

pub async fn create_event(pool: &PgPool, req: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.create(req).await
}

pub async fn list_logs(pool: &PgPool, limit: i64) -> Result<Vec<ActivityLogEntry>> {
    let repo = ActivityLogRepository::new(pool);
    repo.list(limit).await
}

pub async fn list_sports(pool: &PgPool) -> Result<Vec<Sport>> {
    let repo = SportRepository::new(pool);
    repo.list().await
}

pub async fn list_matches(pool: &PgPool) -> Result<Vec<MatchDetail>> {
    let repo = MatchRepository::new(pool);
    repo.list_with_context().await
}

/// Apply a visibility update: set the round list when given, set the
/// master flag when given, and toggle the flag when the request carries
/// neither. Returns the sport as persisted afterwards.
pub async fn update_visibility(
    pool: &PgPool,
    sport_id: i32,
    req: &UpdateVisibilityRequest,
) -> Result<Sport> {
    let repo = SportRepository::new(pool);
    let sport = repo.find_by_id(sport_id).await?;

    if let Some(rounds) = &req.visible_rounds {
        let set: RoundSet = rounds.iter().copied().collect();
        repo.set_visible_rounds(sport_id, &set).await?;
    }

    if let Some(visible) = req.visible {
        repo.set_fixtures_visible(sport_id, visible).await?;
    } else if req.visible_rounds.is_none() {
        repo.set_fixtures_visible(sport_id, !sport.fixtures_visible)
            .await?;
    }

    repo.find_by_id(sport_id).await
}
