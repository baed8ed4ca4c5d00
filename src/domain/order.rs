use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub merchant_id: i32,
    pub user_id: i32,
    pub total_price: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(Order => Order, cascades: [OrderItem, ShippingAddress, Transaction]);

/// A line of an order; `price` is the product's unit price when the order was
/// placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(OrderItem => OrderItem);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub id: i32,
    pub order_id: i32,
    pub address: String,
    pub province: String,
    pub city: String,
    pub country: String,
    pub courier: String,
    pub shipping_method: String,
    pub shipping_cost: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(ShippingAddress => ShippingAddress);

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShippingDetails {
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub province: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(length(min = 1, max = 100))]
    pub courier: String,
    #[validate(length(min = 1, max = 100))]
    pub shipping_method: String,
    #[validate(range(min = 0))]
    pub shipping_cost: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShippingAddressRequest {
    #[validate(range(min = 1))]
    pub order_id: i32,
    #[serde(flatten)]
    #[validate(nested)]
    pub details: ShippingDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderLineRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(range(min = 1))]
    pub merchant_id: i32,
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderLineRequest>,
    #[validate(nested)]
    pub shipping_address: ShippingDetails,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviseOrderRequest {
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderLineRequest>,
    #[validate(nested)]
    pub shipping_address: ShippingDetails,
}
