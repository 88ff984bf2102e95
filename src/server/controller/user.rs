use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageRequest, PaginatedDto},
        user::{UpdateUserDto, UserDto, UserListQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::user::UserService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Paginated users, optionally filtered by `q`, `role` and `include_deleted`
/// - `401 Unauthorized` / `403 Forbidden` - Not an authenticated admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Paginated users", body = ApiResponse<PaginatedDto<UserDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = PageRequest::new(query.page, query.per_page);
    let (users, total) = UserService::new(&state.db)
        .get_paginated(&query.into(), page)
        .await?;
    let items = users.into_iter().map(User::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(PaginatedDto::new(items, total, page))),
    ))
}

/// Get a user.
///
/// # Access Control
/// - The user themselves, or `Admin`
///
/// # Returns
/// - `200 OK` - The user
/// - `403 Forbidden` - Another user's profile
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to view this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get(&actor, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Update a user's name and contact. Admins may also change the role.
///
/// # Access Control
/// - The user themselves, or `Admin`; `role` only by `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to edit this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db)
        .update(&actor, id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Soft-delete a user.
///
/// # Access Control
/// - `Admin`; admins cannot delete themselves
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - Attempt to delete own account
/// - `404 Not Found` - No such user
/// - `409 Conflict` - Already deleted
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User already deleted", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(&actor, id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message((), "User deleted")),
    ))
}

/// Restore a soft-deleted user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/users/{id}/restore",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Restored user", body = ApiResponse<UserDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User is not deleted", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn restore_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).restore(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}
