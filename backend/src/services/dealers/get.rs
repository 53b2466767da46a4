//! # Dealer Retrieval
//!
//! Backs `GET /api/dealers/{id}`. A well-formed id without a record and an id
//! that is not a valid store id both answer `404 Not Found` with
//! `{"message": "Dealer not found"}`; clients cannot tell the two apart.

use crate::db::Database;
use crate::services::dealers::DealerError;
use actix_web::{web, HttpResponse, Responder};
use common::model::dealer::Dealer;

/// Actix web handler for the `GET /api/dealers/{id}` endpoint.
///
/// # Returns
/// - `200 OK` with the `Dealer` as JSON.
/// - `404 Not Found` if the dealer cannot be resolved.
pub async fn process(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match get_dealer(&db, &id).await {
        Ok(dealer) => HttpResponse::Ok().json(dealer),
        Err(e) => e.to_response(),
    }
}

/// Fetches one dealer by id.
pub async fn get_dealer(db: &Database, id: &str) -> Result<Dealer, DealerError> {
    db.find_by_id(id)
        .await
        .map_err(DealerError::from_lookup)?
        .ok_or(DealerError::NotFound)
}
