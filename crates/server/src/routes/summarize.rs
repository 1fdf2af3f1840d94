use actix_web::{post, web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{compression_ratio, SummarizeRequest, SummarizeResponse};

#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    let summary = state.summarizer.summarize(&req.text, req.mode).await?;

    let original_chars = req.text.chars().count();
    let summary_chars = summary.chars().count();

    Ok(HttpResponse::Ok().json(SummarizeResponse {
        compression: compression_ratio(original_chars, summary_chars),
        mode: req.mode,
        original_chars,
        summary_chars,
        summary,
    }))
}
