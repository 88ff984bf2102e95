use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageQuery, PaginatedDto},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::Review,
        service::review::ReviewService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// List reviews of a listing, newest first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/kos/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Kos ID"), PageQuery),
    responses(
        (status = 200, description = "Paginated reviews", body = ApiResponse<PaginatedDto<ReviewDto>>),
        (status = 404, description = "Kos not found", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(kos_id): Path<i32>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.request();
    let (reviews, total) = ReviewService::new(&state.db)
        .get_paginated_by_kos(kos_id, page)
        .await?;
    let items = reviews.into_iter().map(Review::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(PaginatedDto::new(items, total, page))),
    ))
}

/// Review a listing.
///
/// # Access Control
/// - Authenticated, not the owner of the listing; one review per user and listing
///
/// # Returns
/// - `201 Created` - The review
/// - `403 Forbidden` - Caller owns the listing
/// - `409 Conflict` - Caller already reviewed it
#[utoipa::path(
    post,
    path = "/api/kos/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid rating or comment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot review own kos", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 409, description = "Already reviewed", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kos_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(&user, kos_id, payload.rating, payload.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review.into_dto()))))
}

/// Edit a review.
///
/// # Access Control
/// - Author of the review, or `Admin`
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid rating or comment", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .update(&user, id, payload.rating, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(review.into_dto()))))
}

/// Delete a review.
///
/// # Access Control
/// - Author of the review, or `Admin`
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ReviewService::new(&state.db).delete(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message((), "Review deleted")),
    ))
}
