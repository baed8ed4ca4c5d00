use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::{
    Order, OrderItem, ShippingAddress, ShippingAddressRequest, ShippingDetails,
};
use crate::schema::{order_items, orders, shipping_addresses};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub merchant_id: i32,
    pub user_id: i32,
    pub total_price: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(OrderRow => Order {
    id, merchant_id, user_id, total_price, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub merchant_id: i32,
    pub user_id: i32,
    pub total_price: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(OrderItemRow => OrderItem {
    id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = shipping_addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShippingAddressRow {
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

row_into!(ShippingAddressRow => ShippingAddress {
    id, order_id, address, province, city, country, courier, shipping_method,
    shipping_cost, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = shipping_addresses)]
pub struct ShippingAddressValues {
    pub order_id: i32,
    pub address: String,
    pub province: String,
    pub city: String,
    pub country: String,
    pub courier: String,
    pub shipping_method: String,
    pub shipping_cost: i32,
    pub updated_at: DateTime<Utc>,
}

impl ShippingAddressValues {
    pub fn for_order(order_id: i32, details: &ShippingDetails) -> Self {
        Self {
            order_id,
            address: details.address.clone(),
            province: details.province.clone(),
            city: details.city.clone(),
            country: details.country.clone(),
            courier: details.courier.clone(),
            shipping_method: details.shipping_method.clone(),
            shipping_cost: details.shipping_cost,
            updated_at: Utc::now(),
        }
    }
}

impl From<&ShippingAddressRequest> for ShippingAddressValues {
    fn from(request: &ShippingAddressRequest) -> Self {
        Self::for_order(request.order_id, &request.details)
    }
}
