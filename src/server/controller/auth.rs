use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{AuthResponseDto, ChangePasswordDto, LoginDto, RegisterDto, UserDto, UserRole},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{clear_token_cookie, token_cookie},
        },
        service::auth::{AuthService, RegisterParam},
        state::AppState,
        util::extract::ValidatedJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a renter or seller account.
///
/// Creates the account and signs it in. The token is returned in the body and
/// stored in the `kosera_token` cookie for the browser UI.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Account created, token issued
/// - `400 Bad Request` - Invalid payload or `ADMIN` role requested
/// - `409 Conflict` - Username already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service
        .register(RegisterParam {
            name: payload.name,
            username: payload.username,
            password: payload.password,
            contact: payload.contact,
            role: payload.role.unwrap_or(UserRole::Renter),
        })
        .await?;
    let cookie = token_cookie(&session.token, session.expires_at)?;

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(ApiResponse::ok(session.into_dto())),
    ))
}

/// Log in with username and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token issued and session cookie set
/// - `401 Unauthorized` - Unknown username, wrong password or deleted account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service.login(&payload.username, &payload.password).await?;
    let cookie = token_cookie(&session.token, session.expires_at)?;

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(ApiResponse::ok(session.into_dto())),
    ))
}

/// Clear the session cookie.
///
/// Tokens are stateless, so API clients log out by discarding their token.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cookie cleared")
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(SET_COOKIE, clear_token_cookie())],
        Json(ApiResponse::with_message((), "Logged out")),
    )
}

/// Get the currently authenticated user.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Change the caller's password.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Current password wrong or new password invalid
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Current password is incorrect", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .change_password(&user, &payload.old_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message((), "Password changed")),
    ))
}
