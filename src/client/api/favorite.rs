use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        favorite::{AddFavoriteDto, FavoriteDto},
    },
};

pub async fn get_favorites(page: u64, per_page: u64) -> Result<PaginatedDto<FavoriteDto>, ApiError> {
    let url = format!("/api/favorites?page={}&per_page={}", page, per_page);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn add_favorite(kos_id: i32) -> Result<FavoriteDto, ApiError> {
    let body = serialize_json(&AddFavoriteDto { kos_id })?;
    let response = send_request(post("/api/favorites").body(body)).await?;
    parse_response(response).await
}

pub async fn remove_favorite(kos_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/favorites/{}", kos_id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
