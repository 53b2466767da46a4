use crate::db::Database;
use crate::services::dealers::DealerError;
use actix_web::{web, HttpResponse, Responder};
use common::model::dealer::Dealer;

/// Actix web handler for `GET /api/dealers/state/{state}`.
///
/// A state without dealers is not an error: it answers `200 OK` with `[]`.
pub async fn process(state: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match dealers_in_state(&db, &state).await {
        Ok(dealers) => HttpResponse::Ok().json(dealers),
        Err(e) => e.to_response(),
    }
}

pub async fn dealers_in_state(db: &Database, state: &str) -> Result<Vec<Dealer>, DealerError> {
    Ok(db.find_by_state(state).await?)
}
