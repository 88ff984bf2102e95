use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::stats::AdminStatsDto,
};

pub async fn get_stats() -> Result<AdminStatsDto, ApiError> {
    let response = send_request(get("/api/admin/stats")).await?;
    parse_response(response).await
}
