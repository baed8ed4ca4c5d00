use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
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

record!(Transaction => Transaction);

impl Transaction {
    pub fn status(&self) -> Option<PaymentStatus> {
        PaymentStatus::parse(&self.payment_status)
    }
}

/// A payment attempt as submitted by the caller. `amount` is what the caller
/// pays, not what is persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TransactionRequest {
    #[validate(range(min = 1))]
    pub order_id: i32,
    #[validate(range(min = 1))]
    pub merchant_id: i32,
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub payment_method: String,
    #[validate(range(min = 0))]
    pub amount: i32,
}

/// The row written once the amount has been settled.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewTransaction {
    pub order_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i32,
    pub payment_status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(PaymentStatus::Pending),
            "success" => Some(PaymentStatus::Success),
            "failed" => Some(PaymentStatus::Failed),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    /// Settled transactions can no longer be updated.
    pub fn is_settled(self) -> bool {
        matches!(self, PaymentStatus::Success | PaymentStatus::Refunded)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
