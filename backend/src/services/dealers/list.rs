use crate::db::Database;
use crate::services::dealers::DealerError;
use actix_web::{web, HttpResponse, Responder};
use common::model::dealer::Dealer;

/// Actix web handler for `GET /api/dealers`.
pub async fn process(db: web::Data<Database>) -> impl Responder {
    match list_dealers(&db).await {
        Ok(dealers) => HttpResponse::Ok().json(dealers),
        Err(e) => e.to_response(),
    }
}

/// Every dealer, in store order.
pub async fn list_dealers(db: &Database) -> Result<Vec<Dealer>, DealerError> {
    Ok(db.find_all().await?)
}
