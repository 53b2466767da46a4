use crate::scorer::Sentiment;
use crate::services::sentiment::SentimentError;
use actix_web::{web, HttpResponse, Responder};
use common::model::sentiment::SentimentAnalysis;
use common::requests::AnalyzeSentimentRequest;
use log::error;
use std::sync::Arc;

/// Actix web handler for `POST /api/analyze-sentiment`.
///
/// A body that is missing or not JSON is treated like a request without `text`.
pub async fn process(
    scorer: web::Data<Sentiment>,
    payload: Option<web::Json<AnalyzeSentimentRequest>>,
) -> impl Responder {
    let text = payload.and_then(|p| p.into_inner().text);
    match analyze_text(scorer.into_inner(), text).await {
        Ok(analysis) => HttpResponse::Ok().json(analysis),
        Err(e) => e.to_response(),
    }
}

/// Scores `text` on the blocking thread pool.
///
/// Fails with `MissingText` when the text is absent or empty, and with
/// `Internal` when the scoring task does not complete.
pub async fn analyze_text(
    scorer: Arc<Sentiment>,
    text: Option<String>,
) -> Result<SentimentAnalysis, SentimentError> {
    let text = text
        .filter(|t| !t.is_empty())
        .ok_or(SentimentError::MissingText)?;

    web::block(move || scorer.analyze(&text))
        .await
        .map_err(|e| {
            error!("Sentiment analysis failed: {}", e);
            SentimentError::Internal
        })
}
