//! HTTP routes and the OpenAPI document.
//!
//! Routes are registered through `OpenApiRouter` so every handler's
//! `#[utoipa::path]` lands in the generated document served at `/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, booking, favorite, geocode, kos, photo, review, user},
    integration::cdn::MAX_UPLOAD_BYTES,
    state::AppState,
};

/// Room for the multipart boundaries and headers around the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

struct BearerAddon;

impl Modify for BearerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.security_schemes.insert(
            "bearer".to_string(),
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Session token from `/api/auth/login`. Browsers may send the \
                         `kosera_token` cookie instead.",
                    ))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Kosera API", description = "Kos rental marketplace"),
    modifiers(&BearerAddon),
    tags(
        (name = "auth", description = "Registration, login and the session"),
        (name = "user", description = "User profiles and administration"),
        (name = "kos", description = "Kos listings"),
        (name = "photo", description = "Listing photos"),
        (name = "review", description = "Listing reviews"),
        (name = "favorite", description = "Saved listings"),
        (name = "booking", description = "Bookings and their lifecycle"),
        (name = "geocode", description = "Address lookup"),
        (name = "admin", description = "Platform statistics and health"),
    )
)]
pub struct ApiDoc;

/// Builds the API routes together with the OpenAPI document.
pub fn api_router() -> OpenApiRouter<AppState> {
    let photo_uploads = OpenApiRouter::new()
        .routes(routes!(photo::get_photos, photo::upload_photo))
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
        ));

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(admin::health))
        .routes(routes!(admin::get_stats))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(auth::change_password))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::restore_user))
        .routes(routes!(kos::search_kos, kos::create_kos))
        .routes(routes!(kos::my_kos))
        .routes(routes!(kos::get_kos, kos::update_kos, kos::delete_kos))
        .merge(photo_uploads)
        .routes(routes!(photo::add_photo_url))
        .routes(routes!(photo::set_primary_photo))
        .routes(routes!(photo::delete_photo))
        .routes(routes!(review::get_reviews, review::create_review))
        .routes(routes!(review::update_review, review::delete_review))
        .routes(routes!(favorite::get_favorites, favorite::add_favorite))
        .routes(routes!(favorite::remove_favorite))
        .routes(routes!(booking::get_bookings, booking::create_booking))
        .routes(routes!(booking::get_booking))
        .routes(routes!(booking::update_booking_status))
        .routes(routes!(geocode::search))
        .routes(routes!(geocode::reverse))
}

/// API routes plus Swagger UI at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api/openapi.json", api))
}
