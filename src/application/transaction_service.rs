use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use super::caching::invalidate;
use super::command::write_failure;
use super::instrument::{Call, Instrument};
use crate::domain::account::User;
use crate::domain::errors::{Entity, Operation, RepositoryError, ServiceError, TransactionError};
use crate::domain::payment::{ensure_payable_items, PaymentQuote};
use crate::domain::ports::{Cache, EventPublisher, PaymentLookup, Record, WritableRepository};
use crate::domain::transaction::{NewTransaction, PaymentStatus, Transaction, TransactionRequest};

pub const TOPIC_TRANSACTION_CREATE: &str = "email-service-topic-transaction-create";
pub const TOPIC_TRANSACTION_UPDATE: &str = "email-service-topic-transaction-update";

/// Message consumed by the email service.
#[derive(Debug, Serialize)]
pub struct EmailMessage {
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    fn for_transaction(user: &User, transaction: &Transaction, action: &str) -> Self {
        let body = format!(
            "<html><body>\
             <h1>Transaction {action}</h1>\
             <p>Hello {name},</p>\
             <p>Your transaction #{id} for order #{order} has been {action}.</p>\
             <ul>\
             <li>Amount: {amount}</li>\
             <li>Payment method: {method}</li>\
             <li>Status: {status}</li>\
             </ul>\
             </body></html>",
            action = action,
            name = user.full_name(),
            id = transaction.id,
            order = transaction.order_id,
            amount = transaction.amount,
            method = transaction.payment_method,
            status = transaction.payment_status,
        );
        Self {
            email: user.email.clone(),
            subject: format!("Transaction #{} {}", transaction.id, action),
            body,
        }
    }
}

/// Creates and updates transactions. The persisted amount is always the
/// computed one, never the amount the caller supplied.
pub struct TransactionService<R> {
    repo: Arc<R>,
    lookup: Arc<dyn PaymentLookup>,
    publisher: Arc<dyn EventPublisher>,
    cache: Arc<dyn Cache>,
    instrument: Instrument,
}

impl<R> TransactionService<R>
where
    R: WritableRepository<Record = Transaction, Input = NewTransaction>,
{
    pub fn new(
        repo: Arc<R>,
        lookup: Arc<dyn PaymentLookup>,
        publisher: Arc<dyn EventPublisher>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            repo,
            lookup,
            publisher,
            cache,
            instrument: Instrument::new("transaction_command_service"),
        }
    }

    pub fn create(&self, request: &TransactionRequest) -> Result<Transaction, ServiceError> {
        let op = Operation::Create;
        self.instrument.observe(op.name(), |call| {
            request
                .validate()
                .map_err(|err| call.reject(err, ServiceError::InvalidRequest(Entity::Transaction)))?;
            let (user, settled) = self.settle(call, op, request)?;

            let transaction = self
                .repo
                .create(&settled)
                .map_err(|err| write_failure(call, Entity::Transaction, op, err))?;
            invalidate(&*self.cache, call, &[Entity::Transaction]);

            self.notify(call, TOPIC_TRANSACTION_CREATE, &user, &transaction, "created")?;
            Ok(transaction)
        })
    }

    /// Recomputes an unsettled transaction.
    pub fn update(&self, id: i32, request: &TransactionRequest) -> Result<Transaction, ServiceError> {
        let op = Operation::Update;
        self.instrument.observe(op.name(), |call| {
            request
                .validate()
                .map_err(|err| call.reject(err, ServiceError::InvalidRequest(Entity::Transaction)))?;
            let existing = self
                .repo
                .find_by_id(id)
                .map_err(|err| call.fail(err, ServiceError::Failed(Entity::Transaction, op)))?
                .filter(|transaction| !transaction.is_trashed())
                .ok_or(ServiceError::NotFound(Entity::Transaction))?;
            if existing.status().is_some_and(PaymentStatus::is_settled) {
                return Err(TransactionError::AlreadySettled.into());
            }

            let (user, settled) = self.settle(call, op, request)?;
            let transaction = self
                .repo
                .update(id, &settled)
                .map_err(|err| write_failure(call, Entity::Transaction, op, err))?
                .ok_or(ServiceError::NotFound(Entity::Transaction))?;
            invalidate(&*self.cache, call, &[Entity::Transaction]);

            self.notify(call, TOPIC_TRANSACTION_UPDATE, &user, &transaction, "updated")?;
            Ok(transaction)
        })
    }

    /// Runs the precondition checks in order and prices the order.
    fn settle(
        &self,
        call: &Call<'_>,
        op: Operation,
        request: &TransactionRequest,
    ) -> Result<(User, NewTransaction), ServiceError> {
        let lookup_failed =
            |err: RepositoryError| call.fail(err, ServiceError::Failed(Entity::Transaction, op));

        let user = self
            .lookup
            .find_user(request.user_id)
            .map_err(lookup_failed)?
            .ok_or(TransactionError::UserNotFound)?;
        self.lookup
            .find_merchant(request.merchant_id)
            .map_err(lookup_failed)?
            .ok_or(TransactionError::MerchantNotFound)?;
        let order = self
            .lookup
            .find_order(request.order_id)
            .map_err(lookup_failed)?
            .ok_or(TransactionError::OrderNotFound)?;
        let items = self
            .lookup
            .find_order_items(order.id)
            .map_err(lookup_failed)?;
        ensure_payable_items(&items)?;
        let shipping = self
            .lookup
            .find_shipping_address(order.id)
            .map_err(lookup_failed)?
            .ok_or(TransactionError::ShippingAddressNotFound)?;

        let quote = PaymentQuote::compute(&items, shipping.shipping_cost);
        let amount = quote.settle(request.amount)?;
        log::info!(
            "trace_id={} order_id={} subtotal={} tax={} total={}",
            call.trace_id(),
            order.id,
            quote.subtotal,
            quote.tax,
            quote.total
        );

        Ok((
            user,
            NewTransaction {
                order_id: order.id,
                merchant_id: request.merchant_id,
                payment_method: request.payment_method.clone(),
                amount,
                payment_status: PaymentStatus::Success.as_str().to_string(),
            },
        ))
    }

    fn notify(
        &self,
        call: &Call<'_>,
        topic: &str,
        user: &User,
        transaction: &Transaction,
        action: &str,
    ) -> Result<(), ServiceError> {
        let message = EmailMessage::for_transaction(user, transaction, action);
        let payload = serde_json::to_vec(&message)
            .map_err(|err| call.fail(err, TransactionError::NotifyFailed.into()))?;
        self.publisher
            .publish(topic, &transaction.id.to_string(), &payload)
            .map_err(|err| call.fail(err, TransactionError::NotifyFailed.into()))
    }
}
