//! # Sentiment Service Module
//!
//! `POST /api/analyze-sentiment` scores a piece of text with the lexicon
//! scorer and labels it `Positive`, `Negative` or `Neutral` from the sign of
//! the score.

mod analyze;

use actix_web::web::{post, resource};
use actix_web::{HttpResponse, Resource};
use serde_json::json;
use thiserror::Error;

const API_PATH: &str = "/api/analyze-sentiment";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentimentError {
    #[error("Text is required")]
    MissingText,
    #[error("Error analyzing sentiment")]
    Internal,
}

impl SentimentError {
    pub fn to_response(&self) -> HttpResponse {
        let body = json!({ "error": self.to_string() });
        match self {
            SentimentError::MissingText => HttpResponse::BadRequest().json(body),
            SentimentError::Internal => HttpResponse::InternalServerError().json(body),
        }
    }
}

/// Configures the Actix `Resource` for the sentiment endpoint.
pub fn configure_routes() -> Resource {
    resource(API_PATH).route(post().to(analyze::process))
}
