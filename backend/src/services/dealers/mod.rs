//! # Dealer Service Module
//!
//! All endpoints under `/api/dealers`. Each sub-module pairs an Actix handler
//! (`process`) with a plain async function holding the actual logic, so the
//! logic can be exercised without going through HTTP.
//!
//! ## Sub-modules:
//! - `list`: every dealer in store order.
//! - `by_state`: dealers whose `location.state` matches exactly.
//! - `get`: a single dealer by id.
//! - `reviews`: the embedded reviews of a dealer.
//! - `submit_review`: appends a review and returns the updated list.

mod by_state;
mod get;
mod list;
mod reviews;
mod submit_review;

use crate::db::StoreError;
use actix_web::web::{get, post, scope};
use actix_web::{HttpResponse, Scope};
use log::{debug, error};
use serde_json::json;
use thiserror::Error;

/// The base path for all dealer-related API endpoints.
const API_PATH: &str = "/api/dealers";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealerError {
    /// The id matches no dealer or is not a valid id at all.
    #[error("Dealer not found")]
    NotFound,
    #[error("{0}")]
    Storage(String),
}

impl DealerError {
    /// Lookups by id report every store failure as `NotFound`.
    pub fn from_lookup(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(id) => debug!("Rejected malformed dealer id `{}`", id),
            other => error!("Dealer lookup failed: {}", other),
        }
        DealerError::NotFound
    }

    pub fn to_response(&self) -> HttpResponse {
        let body = json!({ "message": self.to_string() });
        match self {
            DealerError::NotFound => HttpResponse::NotFound().json(body),
            DealerError::Storage(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}

impl From<StoreError> for DealerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => DealerError::NotFound,
            other => {
                error!("Dealer store failure: {}", other);
                DealerError::Storage(other.to_string())
            }
        }
    }
}

/// Configures and returns the Actix `Scope` for all dealer routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: every dealer (`list::process`).
/// *   **`GET /state/{state}`**: dealers in one state (`by_state::process`). Registered
///     before `/{id}` so that `state` is never taken for an id.
/// *   **`GET /{id}`**: one dealer, 404 when absent or malformed (`get::process`).
/// *   **`GET /{id}/reviews`**: that dealer's reviews (`reviews::process`).
/// *   **`POST /{id}/reviews`**: appends a `{user, rating, comment}` review and
///     returns the full updated list (`submit_review::process`).
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/state/{state}", get().to(by_state::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}/reviews", get().to(reviews::process))
        .route("/{id}/reviews", post().to(submit_review::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::seed;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use chrono::{DateTime, Utc};
    use common::model::dealer::Dealer;
    use common::model::review::Review;
    use serde_json::Value;

    async fn seeded_db() -> web::Data<Database> {
        let db = Database::new(":memory:").unwrap();
        db.create_schema().await.unwrap();
        seed::reseed(&db).await.unwrap();
        web::Data::new(db)
    }

    #[actix_web::test]
    async fn store_errors_map_to_status_codes() {
        assert_eq!(
            DealerError::from(StoreError::InvalidId("x".into())),
            DealerError::NotFound
        );
        let storage = DealerError::Storage("disk I/O error".into());
        assert_eq!(
            storage.to_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            DealerError::NotFound.to_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn lists_every_dealer() {
        let db = seeded_db().await;
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/dealers").to_request();
        let dealers: Vec<Dealer> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dealers.len(), 7);
        assert_eq!(dealers[0].name, "Kansas City Motors");
    }

    #[actix_web::test]
    async fn gets_dealer_by_id() {
        let db = seeded_db().await;
        let all = db.find_all().await.unwrap();
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        for expected in &all {
            let req = test::TestRequest::get()
                .uri(&format!("/api/dealers/{}", expected.id))
                .to_request();
            let dealer: Dealer = test::call_and_read_body_json(&app, req).await;
            assert_eq!(&dealer, expected);
        }
    }

    #[actix_web::test]
    async fn unknown_and_malformed_ids_are_not_found() {
        let db = seeded_db().await;
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let unknown = uuid::Uuid::new_v4().to_string();
        for id in [unknown.as_str(), "12345", "not-a-dealer"] {
            for path in [format!("/api/dealers/{id}"), format!("/api/dealers/{id}/reviews")] {
                let req = test::TestRequest::get().uri(&path).to_request();
                let resp = test::call_service(&app, req).await;
                assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{path}");
                let body: Value = test::read_body_json(resp).await;
                assert_eq!(body, serde_json::json!({ "message": "Dealer not found" }));
            }
        }
    }

    #[actix_web::test]
    async fn filters_by_state() {
        let db = seeded_db().await;
        let all = db.find_all().await.unwrap();
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        for state in ["Kansas", "California", "Texas", "texas", "Ohio"] {
            let req = test::TestRequest::get()
                .uri(&format!("/api/dealers/state/{state}"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let dealers: Vec<Dealer> = test::read_body_json(resp).await;

            let expected: Vec<Dealer> = all
                .iter()
                .filter(|d| d.location.state == state)
                .cloned()
                .collect();
            assert_eq!(dealers, expected, "{state}");
        }
    }

    #[actix_web::test]
    async fn returns_reviews_of_a_dealer() {
        let db = seeded_db().await;
        let texas = db.find_by_state("Texas").await.unwrap().remove(0);
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/dealers/{}/reviews", texas.id))
            .to_request();
        let reviews: Vec<Review> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reviews, texas.reviews);
        assert_eq!(reviews.len(), 3);
    }

    #[actix_web::test]
    async fn submitted_review_is_appended_last() {
        let db = seeded_db().await;
        let target = db.find_all().await.unwrap().remove(3);
        let app = test::init_service(
            App::new()
                .app_data(db.clone())
                .service(configure_routes()),
        )
        .await;

        let before: DateTime<Utc> = Utc::now();
        let req = test::TestRequest::post()
            .uri(&format!("/api/dealers/{}/reviews", target.id))
            .set_json(serde_json::json!({
                "user": "Pat Kim",
                "rating": 2,
                "comment": "Slow paperwork"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let reviews: Vec<Review> = test::read_body_json(resp).await;

        assert_eq!(reviews.len(), target.reviews.len() + 1);
        assert_eq!(&reviews[..target.reviews.len()], &target.reviews[..]);
        let last = reviews.last().unwrap();
        assert_eq!(last.user.as_deref(), Some("Pat Kim"));
        assert_eq!(last.rating, Some(serde_json::Number::from(2)));
        assert_eq!(last.comment.as_deref(), Some("Slow paperwork"));
        assert!(last.date >= before && last.date <= Utc::now());

        let stored = db.find_by_id(&target.id).await.unwrap().unwrap();
        assert_eq!(stored.reviews, reviews);
    }

    #[actix_web::test]
    async fn review_fields_are_stored_as_given() {
        let db = seeded_db().await;
        let target = db.find_all().await.unwrap().remove(0);
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/dealers/{}/reviews", target.id))
            .set_json(serde_json::json!({ "rating": -40 }))
            .to_request();
        let reviews: Vec<Review> = test::call_and_read_body_json(&app, req).await;
        let last = reviews.last().unwrap();
        assert_eq!(last.user, None);
        assert_eq!(last.comment, None);
        assert_eq!(last.rating, Some(serde_json::Number::from(-40)));

        let req = test::TestRequest::post()
            .uri(&format!("/api/dealers/{}/reviews", target.id))
            .to_request();
        let reviews: Vec<Review> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reviews.len(), target.reviews.len() + 2);
        assert_eq!(reviews.last().unwrap().rating, None);
    }

    #[actix_web::test]
    async fn review_for_missing_dealer_is_not_found() {
        let db = seeded_db().await;
        let app = test::init_service(
            App::new()
                .app_data(db.clone())
                .service(configure_routes()),
        )
        .await;

        let unknown = uuid::Uuid::new_v4().to_string();
        for id in [unknown.as_str(), "bogus"] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/dealers/{id}/reviews"))
                .set_json(serde_json::json!({ "user": "Ghost", "rating": 1, "comment": "?" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }

        let total: usize = db
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|d| d.reviews.len())
            .sum();
        assert_eq!(total, 15);
    }

    #[actix_web::test]
    async fn store_failures_are_server_errors() {
        let db = seeded_db().await;
        let id = db.find_all().await.unwrap().remove(0).id;
        db.execute_batch("DROP TABLE dealers").await.unwrap();
        let app = test::init_service(App::new().app_data(db).service(configure_routes())).await;

        let requests = [
            test::TestRequest::get().uri("/api/dealers").to_request(),
            test::TestRequest::get().uri("/api/dealers/state/Kansas").to_request(),
            test::TestRequest::post()
                .uri(&format!("/api/dealers/{id}/reviews"))
                .set_json(serde_json::json!({ "user": "Ann", "rating": 4, "comment": "ok" }))
                .to_request(),
        ];
        for req in requests {
            let path = req.path().to_string();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{path}");
            let body: Value = test::read_body_json(resp).await;
            assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "{path}");
        }

        // Lookups by id still answer "not found".
        for uri in [format!("/api/dealers/{id}"), format!("/api/dealers/{id}/reviews")] {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Dealer not found");
        }
    }
}
