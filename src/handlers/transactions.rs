use actix_web::{web, HttpResponse, Scope};

use super::crud::soft_delete_scope;
use super::response;
use crate::application::transaction_service::TransactionService;
use crate::domain::ports::WritableRepository;
use crate::domain::transaction::{NewTransaction, Transaction, TransactionRequest};
use crate::errors::AppError;

/// Generic transaction routes. Writes go through the payment flow instead of
/// the plain create and update.
pub fn transaction_scope<R>(path: &str) -> Scope
where
    R: WritableRepository<Record = Transaction, Input = NewTransaction>,
{
    soft_delete_scope::<R>(path)
        .route("", web::post().to(create_transaction::<R>))
        .route("/{id}", web::put().to(update_transaction::<R>))
}

/// POST /api/transactions
pub async fn create_transaction<R>(
    service: web::Data<TransactionService<R>>,
    body: web::Json<TransactionRequest>,
) -> Result<HttpResponse, AppError>
where
    R: WritableRepository<Record = Transaction, Input = NewTransaction>,
{
    let request = body.into_inner();
    let transaction = web::block(move || service.create(&request)).await??;
    Ok(response::created("Successfully created transaction", transaction))
}

/// PUT /api/transactions/{id}
pub async fn update_transaction<R>(
    service: web::Data<TransactionService<R>>,
    path: web::Path<i32>,
    body: web::Json<TransactionRequest>,
) -> Result<HttpResponse, AppError>
where
    R: WritableRepository<Record = Transaction, Input = NewTransaction>,
{
    let id = path.into_inner();
    let request = body.into_inner();
    let transaction = web::block(move || service.update(id, &request)).await??;
    Ok(response::ok("Successfully updated transaction", transaction))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::infrastructure::cache::NullCache;
    use crate::testing::{transactions, FakePaymentLookup, RecordingPublisher, TransactionRepository};

    fn payment(amount: i32) -> Value {
        json!({
            "order_id": 1,
            "merchant_id": 1,
            "user_id": 1,
            "payment_method": "bank_transfer",
            "amount": amount
        })
    }

    #[actix_web::test]
    async fn payments_settle_or_ask_for_more() {
        let repo = Arc::new(transactions());
        let publisher = Arc::new(RecordingPublisher::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TransactionService::new(
                    repo.clone(),
                    Arc::new(FakePaymentLookup::with_order(&[(100, 2), (50, 1)], 20)),
                    publisher.clone(),
                    Arc::new(NullCache),
                )))
                .service(transaction_scope::<TransactionRepository>("/api/transactions")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/transactions")
            .set_json(payment(340))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "insufficient balance");

        let req = test::TestRequest::post()
            .uri("/api/transactions")
            .set_json(payment(1000))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["amount"], 341);
        assert_eq!(body["data"]["payment_status"], "success");
        assert_eq!(repo.len(), 1);
        assert_eq!(publisher.sent().len(), 1);

        let id = body["data"]["id"].as_i64().unwrap();
        let req = test::TestRequest::put()
            .uri(&format!("/api/transactions/{}", id))
            .set_json(payment(1000))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }
}
