use crate::db::Database;
use crate::services::dealers::get::get_dealer;
use crate::services::dealers::DealerError;
use actix_web::{web, HttpResponse, Responder};
use common::model::review::Review;

/// Actix web handler for `GET /api/dealers/{id}/reviews`.
pub async fn process(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match dealer_reviews(&db, &id).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => e.to_response(),
    }
}

/// The reviews of one dealer in display order. Same not-found rules as `get_dealer`.
pub async fn dealer_reviews(db: &Database, id: &str) -> Result<Vec<Review>, DealerError> {
    let dealer = get_dealer(db, id).await?;
    Ok(dealer.reviews)
}
