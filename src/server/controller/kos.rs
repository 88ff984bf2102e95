use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageRequest, PaginatedDto},
        kos::{CreateKosDto, KosDetailDto, KosDto, KosListQuery, UpdateKosDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::kos::{CreateKosParam, KosFilter, KosListing},
        service::kos::KosService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping kos endpoints in OpenAPI documentation
pub static KOS_TAG: &str = "kos";

/// Search kos listings.
///
/// Filters by free text, city, type, price range and free rooms. Deleted listings
/// and listings of deleted owners never appear.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Paginated listings in the requested order
/// - `400 Bad Request` - Invalid filter values
#[utoipa::path(
    get,
    path = "/api/kos",
    tag = KOS_TAG,
    params(KosListQuery),
    responses(
        (status = 200, description = "Paginated listings", body = ApiResponse<PaginatedDto<KosDto>>),
        (status = 400, description = "Invalid filter values", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_kos(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<KosListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::new(query.page, query.per_page);
    let filter = KosFilter::from(query);

    listing_page(&state, &filter, page).await
}

/// List the caller's own listings.
///
/// # Access Control
/// - `Seller` or `Admin`
#[utoipa::path(
    get,
    path = "/api/kos/mine",
    tag = KOS_TAG,
    params(KosListQuery),
    responses(
        (status = 200, description = "Caller's listings", body = ApiResponse<PaginatedDto<KosDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a seller", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn my_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<KosListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Seller])
        .await?;

    let page = PageRequest::new(query.page, query.per_page);
    let filter = KosFilter {
        owner_id: Some(user.id),
        ..KosFilter::from(query)
    };

    listing_page(&state, &filter, page).await
}

/// Get a listing with all its photos.
///
/// Every call counts one view. Authenticated callers also learn whether they
/// favorited the listing.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Listing detail
/// - `404 Not Found` - No such listing, or it was deleted
#[utoipa::path(
    get,
    path = "/api/kos/{id}",
    tag = KOS_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    responses(
        (status = 200, description = "Listing detail", body = ApiResponse<KosDetailDto>),
        (status = 404, description = "Kos not found", body = ErrorDto)
    ),
)]
pub async fn get_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .optional()
        .await?;

    let detail = KosService::new(&state.db)
        .get_detail(id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(detail.into_dto()))))
}

/// Create a listing.
///
/// # Access Control
/// - `Seller` or `Admin`; the caller becomes the owner
///
/// # Returns
/// - `201 Created` - The new listing
/// - `400 Bad Request` - Invalid listing data
#[utoipa::path(
    post,
    path = "/api/kos",
    tag = KOS_TAG,
    request_body = CreateKosDto,
    responses(
        (status = 201, description = "Listing created", body = ApiResponse<KosDto>),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a seller", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateKosDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Seller])
        .await?;

    let listing = KosService::new(&state.db)
        .create(CreateKosParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(listing.into_dto()))))
}

/// Update a listing.
///
/// # Access Control
/// - Owner of the listing, or `Admin`
#[utoipa::path(
    put,
    path = "/api/kos/{id}",
    tag = KOS_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    request_body = UpdateKosDto,
    responses(
        (status = 200, description = "Listing updated", body = ApiResponse<KosDto>),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateKosDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let listing = KosService::new(&state.db)
        .update(&user, id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(listing.into_dto()))))
}

/// Soft-delete a listing.
///
/// # Access Control
/// - Owner of the listing, or `Admin`
#[utoipa::path(
    delete,
    path = "/api/kos/{id}",
    tag = KOS_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    responses(
        (status = 200, description = "Listing deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    KosService::new(&state.db).delete(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message((), "Kos deleted")),
    ))
}

async fn listing_page(
    state: &AppState,
    filter: &KosFilter,
    page: PageRequest,
) -> Result<(StatusCode, Json<ApiResponse<PaginatedDto<KosDto>>>), AppError> {
    let (listings, total) = KosService::new(&state.db).search(filter, page).await?;
    let items = listings.into_iter().map(KosListing::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(PaginatedDto::new(items, total, page))),
    ))
}
