use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        photo::{AddPhotoUrlDto, PhotoDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::photo::Photo,
        service::photo::{PhotoService, PhotoUpload},
        state::AppState,
        util::extract::ValidatedJson,
    },
};

/// Tag for grouping photo endpoints in OpenAPI documentation
pub static PHOTO_TAG: &str = "photo";

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// List the photos of a listing, primary first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/kos/{id}/photos",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    responses(
        (status = 200, description = "Photos of the listing", body = ApiResponse<Vec<PhotoDto>>),
        (status = 404, description = "Kos not found", body = ErrorDto)
    ),
)]
pub async fn get_photos(
    State(state): State<AppState>,
    Path(kos_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let photos = photo_service(&state).list(kos_id).await?;
    let photos: Vec<PhotoDto> = photos.into_iter().map(Photo::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(photos))))
}

/// Upload a photo to the image CDN.
///
/// Expects `multipart/form-data` with the image in the `file` field. JPEG, PNG and
/// WebP up to 5 MiB are accepted, at most 10 photos per listing.
///
/// # Access Control
/// - Owner of the listing, or `Admin`
///
/// # Returns
/// - `201 Created` - The stored photo
/// - `400 Bad Request` - Missing, empty, oversized or unsupported file, or photo limit reached
/// - `503 Service Unavailable` - CDN not configured or failing
#[utoipa::path(
    post,
    path = "/api/kos/{id}/photos",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 201, description = "Photo uploaded", body = ApiResponse<PhotoDto>),
        (status = 400, description = "Invalid file", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 503, description = "Image CDN unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kos_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let upload = read_upload(multipart).await?;
    let photo = photo_service(&state).upload(&user, kos_id, upload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(photo.into_dto()))))
}

/// Attach an externally hosted image by URL.
///
/// # Access Control
/// - Owner of the listing, or `Admin`
#[utoipa::path(
    post,
    path = "/api/kos/{id}/photos/url",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    request_body = AddPhotoUrlDto,
    responses(
        (status = 201, description = "Photo attached", body = ApiResponse<PhotoDto>),
        (status = 400, description = "Invalid URL or photo limit reached", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_photo_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kos_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<AddPhotoUrlDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let photo = photo_service(&state)
        .add_url(&user, kos_id, payload.url, payload.is_primary)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(photo.into_dto()))))
}

/// Make a photo the primary photo of its listing.
///
/// # Access Control
/// - Owner of the listing, or `Admin`
#[utoipa::path(
    put,
    path = "/api/photos/{id}/primary",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo is now primary", body = ApiResponse<PhotoDto>),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn set_primary_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let photo = photo_service(&state).set_primary(&user, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(photo.into_dto()))))
}

/// Delete a photo, removing the CDN asset as well when there is one.
///
/// # Access Control
/// - Owner of the listing, or `Admin`
#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    photo_service(&state).delete(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message((), "Photo deleted")),
    ))
}

fn photo_service(state: &AppState) -> PhotoService<'_> {
    PhotoService::new(&state.db, &state.http_client, state.cdn.as_ref())
}

/// Pulls the `file` field out of the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<PhotoUpload, AppError> {
    let bad_request = |e: axum::extract::multipart::MultipartError| {
        AppError::BadRequest(format!("Invalid multipart body: {}", e.body_text()))
    };

    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(bad_request)?;

        return Ok(PhotoUpload {
            bytes: bytes.to_vec(),
            file_name,
            content_type,
        });
    }

    Err(AppError::BadRequest(format!(
        "Missing '{}' field in multipart body",
        FILE_FIELD
    )))
}
