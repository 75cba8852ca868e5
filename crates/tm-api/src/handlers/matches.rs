use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use metrics::counter;
use tracing::info;

use tm_common::api::{MatchRequest, MatchResponse};
use tm_metrics::{MATCH_REQUESTS_TOTAL, MATCH_RESULTS_TOTAL};

use super::pagination::validate_pagination;
use crate::SharedState;
use crate::error::ApiError;

pub const QUERY_REQUIRED: &str = "Search query is required";

/// フリーテキストのクエリを解析し、人材ランキングをページ単位で返す
pub async fn run_match(
    State(state): State<SharedState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let query = request
        .query()
        .ok_or_else(|| ApiError::BadRequest(QUERY_REQUIRED.into()))?;

    let (page, page_size) = validate_pagination(
        request.page.unwrap_or(1),
        request.page_size.unwrap_or(state.config.default_page_size),
    )?;

    let parsed_gig = state.parser.parse(query);
    let ranked = state.engine.match_intent(&parsed_gig, &state.dataset.talents);

    counter!(MATCH_REQUESTS_TOTAL).increment(1);
    counter!(MATCH_RESULTS_TOTAL).increment(ranked.len() as u64);
    info!(
        category = parsed_gig.category.as_deref().unwrap_or(""),
        city = parsed_gig.city.as_deref().unwrap_or(""),
        style_tags = parsed_gig.style_tags.len(),
        budget = parsed_gig.budget,
        matched = ranked.len(),
        page,
        page_size,
        "query matched"
    );

    Ok(Json(MatchResponse::paginated(ranked, parsed_gig, page, page_size)).into_response())
}
