use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        geocode::{GeocodeResultDto, GeocodeSearchQuery, ReverseGeocodeQuery},
    },
    server::{
        error::AppError, integration::geocoding::Place, service::geocode::GeocodeService,
        state::AppState, util::extract::ValidatedQuery,
    },
};

/// Tag for grouping geocoding endpoints in OpenAPI documentation
pub static GEOCODE_TAG: &str = "geocode";

/// Look up places in Indonesia matching a free-text address.
///
/// # Access Control
/// - Public, rate limited per client
///
/// # Returns
/// - `200 OK` - Up to five matches
/// - `429 Too Many Requests` - Client exceeded the rate limit
/// - `503 Service Unavailable` - Geocoding service failed
#[utoipa::path(
    get,
    path = "/api/geocode/search",
    tag = GEOCODE_TAG,
    params(GeocodeSearchQuery),
    responses(
        (status = 200, description = "Matching places", body = ApiResponse<Vec<GeocodeResultDto>>),
        (status = 400, description = "Query too short or too long", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 503, description = "Geocoding service unavailable", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<GeocodeSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.geocode_limiter.check(&headers).await?;

    let places = GeocodeService::new(&state.http_client, &state.geocode)
        .search(&query.q)
        .await?;
    let places: Vec<GeocodeResultDto> = places.into_iter().map(Place::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(places))))
}

/// Resolve coordinates to an address.
///
/// # Access Control
/// - Public, rate limited per client
#[utoipa::path(
    get,
    path = "/api/geocode/reverse",
    tag = GEOCODE_TAG,
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Place at the coordinates", body = ApiResponse<GeocodeResultDto>),
        (status = 400, description = "Coordinates out of range", body = ErrorDto),
        (status = 404, description = "No place found", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 503, description = "Geocoding service unavailable", body = ErrorDto)
    ),
)]
pub async fn reverse(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<ReverseGeocodeQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.geocode_limiter.check(&headers).await?;

    let place = GeocodeService::new(&state.http_client, &state.geocode)
        .reverse(query.lat, query.lon)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(place.into_dto()))))
}
