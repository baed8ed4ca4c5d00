use actix_web::{web, HttpResponse, Scope};

use super::crud::soft_delete_scope;
use super::response;
use crate::application::order_service::OrderService;
use crate::domain::order::{PlaceOrderRequest, ReviseOrderRequest};
use crate::domain::ports::OrderRepository;
use crate::errors::AppError;

/// Generic order routes plus placement, revision and item listing.
pub fn order_scope<R: OrderRepository>(path: &str) -> Scope {
    soft_delete_scope::<R>(path)
        .route("", web::post().to(place_order::<R>))
        .route("/{id}", web::put().to(revise_order::<R>))
        .route("/{id}/items", web::get().to(order_items::<R>))
}

/// POST /api/orders
///
/// Stock is reserved and prices are captured in the same database
/// transaction that writes the order.
pub async fn place_order<R: OrderRepository>(
    service: web::Data<OrderService<R>>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let order = web::block(move || service.place(&request)).await??;
    Ok(response::created("Successfully created order", order))
}

/// PUT /api/orders/{id}
pub async fn revise_order<R: OrderRepository>(
    service: web::Data<OrderService<R>>,
    path: web::Path<i32>,
    body: web::Json<ReviseOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let request = body.into_inner();
    let order = web::block(move || service.revise(id, &request)).await??;
    Ok(response::ok("Successfully updated order", order))
}

/// GET /api/orders/{id}/items
pub async fn order_items<R: OrderRepository>(
    service: web::Data<OrderService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let items = web::block(move || service.items(id)).await??;
    Ok(response::ok("Successfully fetched order items", items))
}
