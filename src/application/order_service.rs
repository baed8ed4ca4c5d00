use std::sync::Arc;

use validator::Validate;

use super::caching::invalidate;
use super::command::write_failure;
use super::instrument::{Call, Instrument};
use crate::domain::errors::{Entity, Operation, PlacementError, RepositoryError, ServiceError};
use crate::domain::order::{Order, OrderItem, PlaceOrderRequest, ReviseOrderRequest};
use crate::domain::ports::{Cache, OrderRepository};

/// Entities whose cached views change when an order is written.
const TOUCHED: [Entity; 4] = [
    Entity::Order,
    Entity::OrderItem,
    Entity::ShippingAddress,
    Entity::Product,
];

pub struct OrderService<R> {
    repo: Arc<R>,
    cache: Arc<dyn Cache>,
    instrument: Instrument,
}

fn placement_failure(call: &Call<'_>, op: Operation, err: PlacementError) -> ServiceError {
    match err {
        PlacementError::Rejected(reason) => call.reject(reason, reason.into()),
        PlacementError::Repository(err) => write_failure(call, Entity::Order, op, err),
    }
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: Arc<R>, cache: Arc<dyn Cache>) -> Self {
        Self {
            repo,
            cache,
            instrument: Instrument::new("order_command_service"),
        }
    }

    pub fn place(&self, request: &PlaceOrderRequest) -> Result<Order, ServiceError> {
        let op = Operation::Create;
        self.instrument.observe(op.name(), |call| {
            request
                .validate()
                .map_err(|err| call.reject(err, ServiceError::InvalidRequest(Entity::Order)))?;
            let order = self
                .repo
                .place(request)
                .map_err(|err| placement_failure(call, op, err))?;
            invalidate(&*self.cache, call, &TOUCHED);
            Ok(order)
        })
    }

    pub fn revise(&self, id: i32, request: &ReviseOrderRequest) -> Result<Order, ServiceError> {
        let op = Operation::Update;
        self.instrument.observe(op.name(), |call| {
            request
                .validate()
                .map_err(|err| call.reject(err, ServiceError::InvalidRequest(Entity::Order)))?;
            let order = self
                .repo
                .revise(id, request)
                .map_err(|err| placement_failure(call, op, err))?
                .ok_or(ServiceError::NotFound(Entity::Order))?;
            invalidate(&*self.cache, call, &TOUCHED);
            Ok(order)
        })
    }

    pub fn items(&self, order_id: i32) -> Result<Vec<OrderItem>, ServiceError> {
        self.instrument.observe("find_items", |call| {
            let failed = |err: RepositoryError| {
                call.fail(err, ServiceError::Failed(Entity::OrderItem, Operation::FindAll))
            };
            self.repo
                .find_by_id(order_id)
                .map_err(failed)?
                .ok_or(ServiceError::NotFound(Entity::Order))?;
            self.repo.find_items(order_id).map_err(failed)
        })
    }
}
