use crate::{
    client::{
        api::helper::{get, parse_response, send_request, with_query},
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        kos::{KosDetailDto, KosDto, KosListQuery},
    },
};

pub async fn search_kos(query: KosListQuery) -> Result<PaginatedDto<KosDto>, ApiError> {
    let url = with_query(
        "/api/kos",
        &[
            ("page", query.page.map(|p| p.to_string())),
            ("per_page", query.per_page.map(|p| p.to_string())),
            ("q", query.q),
            ("city", query.city),
            ("kos_type", query.kos_type.map(|t| t.as_str().to_string())),
            ("min_price", query.min_price.map(|p| p.to_string())),
            ("max_price", query.max_price.map(|p| p.to_string())),
            ("available_only", query.available_only.map(|a| a.to_string())),
            ("sort", query.sort.map(|s| s.as_str().to_string())),
        ],
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_kos(id: i32) -> Result<KosDetailDto, ApiError> {
    let url = format!("/api/kos/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
