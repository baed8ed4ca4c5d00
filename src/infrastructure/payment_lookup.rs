use diesel::prelude::*;

use super::models::account::UserRow;
use super::models::merchant::MerchantRow;
use super::models::order::{OrderItemRow, OrderRow, ShippingAddressRow};
use crate::db::DbPool;
use crate::domain::account::User;
use crate::domain::errors::RepositoryError;
use crate::domain::merchant::Merchant;
use crate::domain::order::{Order, OrderItem, ShippingAddress};
use crate::domain::ports::PaymentLookup;
use crate::schema::{merchants, order_items, orders, shipping_addresses, users};

/// Active-row reads used while settling a transaction.
pub struct DieselPaymentLookup {
    pool: DbPool,
}

impl DieselPaymentLookup {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PaymentLookup for DieselPaymentLookup {
    fn find_user(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let row = users::table
            .find(id)
            .filter(users::deleted_at.is_null())
            .select(UserRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Into::into))
    }

    fn find_merchant(&self, id: i32) -> Result<Option<Merchant>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let row = merchants::table
            .find(id)
            .filter(merchants::deleted_at.is_null())
            .select(MerchantRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Into::into))
    }

    fn find_order(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let row = orders::table
            .find(id)
            .filter(orders::deleted_at.is_null())
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Into::into))
    }

    fn find_order_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .filter(order_items::deleted_at.is_null())
            .order(order_items::id.asc())
            .select(OrderItemRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn find_shipping_address(
        &self,
        order_id: i32,
    ) -> Result<Option<ShippingAddress>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let row = shipping_addresses::table
            .filter(shipping_addresses::order_id.eq(order_id))
            .filter(shipping_addresses::deleted_at.is_null())
            .order(shipping_addresses::id.desc())
            .select(ShippingAddressRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Into::into))
    }
}
