use actix_web::{web, HttpResponse, Scope};
use serde::de::DeserializeOwned;

use super::crud::writable_scope;
use super::response;
use crate::application::query::QueryService;
use crate::domain::order::ShippingAddress;
use crate::domain::ports::{ShippingAddressLookup, WritableRepository};
use crate::errors::AppError;

pub fn shipping_scope<R>(path: &str) -> Scope
where
    R: WritableRepository<Record = ShippingAddress> + ShippingAddressLookup,
    R::Input: DeserializeOwned,
{
    writable_scope::<R>(path).route("/order/{order_id}", web::get().to(find_by_order::<R>))
}

/// GET /api/shipping-addresses/order/{order_id}
pub async fn find_by_order<R>(
    service: web::Data<QueryService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError>
where
    R: WritableRepository<Record = ShippingAddress> + ShippingAddressLookup,
{
    let order_id = path.into_inner();
    let address = web::block(move || service.find_by_order(order_id)).await??;
    Ok(response::ok("Successfully fetched shipping address", address))
}
