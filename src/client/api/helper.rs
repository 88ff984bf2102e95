use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::{
    client::model::error::ApiError,
    model::api::{ApiResponse, ErrorDto},
};

/// Unwraps the success envelope, or turns the failure envelope into an `ApiError`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<ApiResponse<T>>()
            .await
            .map(|body| body.data)
            .map_err(|e| ApiError {
                status: 500,
                message: format!("Failed to parse response: {}", e),
            })
    } else {
        Err(parse_error(status, response).await)
    }
}

/// Parses success responses whose `data` is empty.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(parse_error(status, response).await)
    }
}

async fn parse_error(status: u64, response: Response) -> ApiError {
    let message = match response.json::<ErrorDto>().await {
        // Surface the first field message for validation failures
        Ok(error_dto) => error_dto
            .details
            .and_then(|details| details.into_values().flatten().next())
            .unwrap_or(error_dto.message),
        Err(_) => format!("Request failed with status {}", status),
    };

    ApiError { status, message }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PATCH request with credentials and JSON content type
pub fn patch(url: &str) -> Request {
    Request::patch(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

/// Appends the set query parameters to `path`.
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        if let Some(value) = value {
            query.append_pair(name, value);
        }
    }

    let query = query.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
