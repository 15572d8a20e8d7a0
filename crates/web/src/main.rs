use std::time::Duration;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod activity;
mod cache;
mod config;
mod error;
mod features;
mod middleware;
mod notify;
mod state;

use cache::ResponseCache;
use config::Config;
use middleware::auth::AuthTokens;
use notify::ChangeNotifier;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::sports::handlers::list_sports,
        features::sports::handlers::get_sport,
        features::sports::handlers::create_sport,
        features::sports::handlers::update_sport,
        features::sports::handlers::delete_sport,
        features::results::handlers::get_event_results,
        features::results::handlers::list_results,
        features::results::handlers::create_result,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
        features::results::handlers::set_event_status,
        features::matches::handlers::create_match,
        features::matches::handlers::update_match,
        features::matches::handlers::delete_match,
        features::matches::handlers::qualification,
        features::medals::handlers::get_tally,
        features::medals::handlers::get_winners,
        features::medals::handlers::get_sport_medals,
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::auth::handlers::me,
        features::admin::handlers::list_users,
        features::admin::handlers::create_user,
        features::admin::handlers::update_user,
        features::admin::handlers::delete_user,
        features::admin::handlers::list_departments,
        features::admin::handlers::create_department,
        features::admin::handlers::update_department,
        features::admin::handlers::delete_department,
        features::admin::handlers::list_events,
        features::admin::handlers::create_event,
        features::admin::handlers::list_logs,
        features::admin::handlers::list_sports,
        features::admin::handlers::update_visibility,
        features::admin::handlers::list_matches,
    ),
    components(
        schemas(
            storage::dto::sport::CreateSportRequest,
            storage::dto::sport::UpdateSportRequest,
            storage::dto::sport::SportSummary,
            storage::dto::sport::SportsByDayResponse,
            storage::dto::sport::EventsByCategory,
            storage::dto::sport::SportDetailResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventStatusRequest,
            storage::dto::event::EventWithSport,
            storage::dto::event::EventDetail,
            storage::dto::result::CreateResultRequest,
            storage::dto::result::UpdateResultRequest,
            storage::dto::result::ResultDetail,
            storage::dto::result::ResultWithContext,
            storage::dto::result::EventResultsResponse,
            storage::dto::matches::CreateMatchRequest,
            storage::dto::matches::UpdateMatchRequest,
            storage::dto::matches::MatchDetail,
            storage::dto::matches::QualifiedTeam,
            storage::dto::medal::MedalTallyEntry,
            storage::dto::medal::WinnerEntry,
            storage::dto::medal::MedalWinnersResponse,
            storage::dto::medal::SportMedalsResponse,
            storage::dto::user::LoginRequest,
            storage::dto::user::LoginResponse,
            storage::dto::user::UserResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::department::CreateDepartmentRequest,
            storage::dto::department::UpdateDepartmentRequest,
            storage::dto::activity::ActivityLogEntry,
            storage::dto::visibility::UpdateVisibilityRequest,
            storage::dto::visibility::VisibilityResponse,
            storage::models::Sport,
            storage::models::Event,
            storage::models::Department,
            storage::models::Match,
            storage::models::EventResult,
            storage::models::RoundTag,
            storage::models::ProgressStatus,
            storage::models::EventCategory,
            storage::models::EventType,
            storage::models::Role,
        )
    ),
    tags(
        (name = "sports", description = "Public sport listings and admin sport management"),
        (name = "results", description = "Individual-event results"),
        (name = "matches", description = "Bracket matches and next-round qualification"),
        (name = "medals", description = "Medal tally and winners"),
        (name = "auth", description = "Authentication"),
        (name = "admin", description = "Users, departments, events, visibility, audit log"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting tournament API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        cache: ResponseCache::new(Duration::from_secs(config.cache_ttl_secs)),
        notifier: ChangeNotifier::new(),
        auth: AuthTokens::new(config.jwt_secret.clone()),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", features::auth::routes::routes(state.clone()))
        .nest("/api/sports", features::sports::routes::routes(state.clone()))
        .nest(
            "/api/results",
            features::results::routes::routes(state.clone()),
        )
        .nest(
            "/api/matches",
            features::matches::routes::routes(state.clone()),
        )
        .nest("/api/medals", features::medals::routes::routes())
        .nest("/api/admin", features::admin::routes::routes(state.clone()))
        .route("/api/sse", get(notify::sse_handler))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
