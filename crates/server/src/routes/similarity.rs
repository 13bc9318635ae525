use actix_web::{post, web, HttpMessage, HttpRequest, HttpResponse};
use docsim_common::DocSimError;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::payload;
use crate::state::AppState;
use crate::types::SimilarityResponse;

/// Score two documents sent as JSON or as form fields `doc1` / `doc2`
#[post("/similarity")]
pub async fn similarity(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let request = payload::parse_request(req.content_type(), &body).map_err(|e| {
        warn!("Rejected similarity request: {}", e);
        e
    })?;

    let doc1_len = request.doc1.len();
    let doc2_len = request.doc2.len();

    // Scoring is CPU-bound; keep it off the async workers
    let worker_state = Arc::clone(state.get_ref());
    let comparison = web::block(move || worker_state.pipeline.compare(&request.doc1, &request.doc2))
        .await
        .map_err(|e| {
            error!("Similarity worker failed: {}", e);
            DocSimError::internal(format!("similarity worker failed: {}", e))
        })?;

    info!(
        "Similarity computed - {} / {} bytes, score={:.4}",
        doc1_len, doc2_len, comparison.score
    );

    Ok(HttpResponse::Ok().json(SimilarityResponse {
        similarity: comparison.score.rounded(state.config.score_precision),
        doc1_tokens: comparison.first_tokens,
        doc2_tokens: comparison.second_tokens,
        vocabulary_size: comparison.vocabulary_size,
    }))
}
