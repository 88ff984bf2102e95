use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageQuery, PaginatedDto},
        favorite::{AddFavoriteDto, FavoriteDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::favorite::FavoriteListing,
        service::favorite::FavoriteService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List the caller's favorites, most recent first.
///
/// Favorites of deleted listings are hidden.
///
/// # Access Control
/// - Authenticated
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated favorites", body = ApiResponse<PaginatedDto<FavoriteDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let page = query.request();
    let (favorites, total) = FavoriteService::new(&state.db)
        .get_paginated(&user, page)
        .await?;
    let items = favorites
        .into_iter()
        .map(FavoriteListing::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(PaginatedDto::new(items, total, page))),
    ))
}

/// Add a listing to the caller's favorites.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - The favorite
/// - `404 Not Found` - No such listing
/// - `409 Conflict` - Already a favorite
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite added", body = ApiResponse<FavoriteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 409, description = "Already a favorite", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<AddFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let favorite = FavoriteService::new(&state.db)
        .add(&user, payload.kos_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(favorite.into_dto()))))
}

/// Remove a listing from the caller's favorites.
///
/// # Access Control
/// - Authenticated
#[utoipa::path(
    delete,
    path = "/api/favorites/{kos_id}",
    tag = FAVORITE_TAG,
    params(("kos_id" = i32, Path, description = "Kos ID")),
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Not a favorite", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kos_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    FavoriteService::new(&state.db).remove(&user, kos_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message((), "Favorite removed")),
    ))
}
