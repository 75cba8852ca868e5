use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use metrics::counter;
use tracing::info;

use tm_common::api::{GigDetailResponse, GigMatchResponse};
use tm_common::matching::MatchError;
use tm_metrics::GIG_MATCH_REQUESTS_TOTAL;

use crate::SharedState;
use crate::error::ApiError;

pub async fn list_gigs(State(state): State<SharedState>) -> Response {
    Json(&state.dataset.gigs).into_response()
}

pub async fn get_gig(
    State(state): State<SharedState>,
    Path(gig_id): Path<String>,
) -> Result<Response, ApiError> {
    let gig = state
        .dataset
        .gig(&gig_id)
        .ok_or_else(|| MatchError::GigNotFound(gig_id.clone()))?;

    let response = GigDetailResponse {
        gig,
        client: state.dataset.client_for_gig(gig),
    };

    Ok(Json(response).into_response())
}

/// 登録案件に対する人材ランキング（スコア 0 も含めた全件）
pub async fn gig_matches(
    State(state): State<SharedState>,
    Path(gig_id): Path<String>,
) -> Result<Response, ApiError> {
    let dataset = &state.dataset;
    let gig = dataset
        .gig(&gig_id)
        .ok_or_else(|| MatchError::GigNotFound(gig_id.clone()))?;
    let client = dataset.client_for_gig(gig);
    let ranked_talents = state.engine.rank_for_gig(gig, client, &dataset.talents);

    counter!(GIG_MATCH_REQUESTS_TOTAL).increment(1);
    info!(
        gig_id = %gig_id,
        client_found = client.is_some(),
        candidates = ranked_talents.len(),
        "gig matched"
    );

    Ok(Json(GigMatchResponse {
        gig,
        client,
        ranked_talents,
    })
    .into_response())
}
