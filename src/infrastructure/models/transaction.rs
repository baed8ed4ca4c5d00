use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::transaction::{NewTransaction, Transaction};
use crate::schema::transactions;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = transactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TransactionRow {
    pub id: i32,
    pub order_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i32,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(TransactionRow => Transaction {
    id, order_id, merchant_id, payment_method, amount, payment_status,
    created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = transactions)]
pub struct TransactionValues {
    pub order_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i32,
    pub payment_status: String,
    pub updated_at: DateTime<Utc>,
}

values_from!(NewTransaction => TransactionValues {
    order_id, merchant_id, payment_method, amount, payment_status,
});
