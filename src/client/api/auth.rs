use crate::{
    client::{
        api::helper::{
            get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::user::{AuthResponseDto, LoginDto, RegisterDto, UserDto},
};

/// Current user, or `None` without a valid session.
pub async fn get_current_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/me")).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

pub async fn login(payload: LoginDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/auth/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn register(payload: RegisterDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/auth/register").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_empty_response(response).await
}
