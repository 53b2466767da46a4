//! # Review Submission
//!
//! Backs `POST /api/dealers/{id}/reviews`. The body is `{user, rating, comment}`;
//! none of the fields is validated, and a missing or unreadable body yields a
//! review with every field `null`. The store assigns the review id and the
//! current time as `date`, appends it after the existing reviews and saves the
//! dealer in a single transaction.

use crate::db::Database;
use crate::services::dealers::DealerError;
use actix_web::{web, HttpResponse, Responder};
use common::model::review::{NewReview, Review};
use log::info;

/// Actix web handler for the `POST /api/dealers/{id}/reviews` endpoint.
///
/// # Returns
/// - `200 OK` with the complete, updated list of reviews.
/// - `404 Not Found` if the dealer does not exist.
/// - `500 Internal Server Error` if the store fails.
pub async fn process(
    id: web::Path<String>,
    db: web::Data<Database>,
    payload: Option<web::Json<NewReview>>,
) -> impl Responder {
    let review = payload.map(web::Json::into_inner).unwrap_or_default();
    match submit_review(&db, &id, review).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => e.to_response(),
    }
}

/// Appends `review` to the dealer and returns the updated review list.
pub async fn submit_review(
    db: &Database,
    id: &str,
    review: NewReview,
) -> Result<Vec<Review>, DealerError> {
    let reviews = db
        .append_review(id, review)
        .await?
        .ok_or(DealerError::NotFound)?;
    info!("Review added to dealer {} ({} total)", id, reviews.len());
    Ok(reviews)
}
