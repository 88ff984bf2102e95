use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::ConnectionTrait;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, HealthDto},
        stats::AdminStatsDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping admin and health endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Platform statistics for the admin dashboard.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Users by role, active listings, bookings by status, review and favorite totals
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Platform statistics", body = ApiResponse<AdminStatsDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = StatsService::new(&state.db).platform().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(stats.into_dto()))))
}

/// Liveness probe.
///
/// Reports whether the database answers; the endpoint itself always returns 200.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.db.execute_unprepared("SELECT 1").await.is_ok();

    (
        StatusCode::OK,
        Json(ApiResponse::ok(HealthDto {
            status: "ok".to_string(),
            database,
        })),
    )
}
