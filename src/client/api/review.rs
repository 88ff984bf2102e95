use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        review::{CreateReviewDto, ReviewDto},
    },
};

pub async fn get_reviews(
    kos_id: i32,
    page: u64,
    per_page: u64,
) -> Result<PaginatedDto<ReviewDto>, ApiError> {
    let url = format!(
        "/api/kos/{}/reviews?page={}&per_page={}",
        kos_id, page, per_page
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_review(kos_id: i32, payload: CreateReviewDto) -> Result<ReviewDto, ApiError> {
    let url = format!("/api/kos/{}/reviews", kos_id);
    let body = serialize_json(&payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}
