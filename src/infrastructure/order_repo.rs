use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::domain::errors::{OrderError, PlacementError, RepositoryError};
use crate::domain::order::{
    Order, OrderItem, OrderLineRequest, PlaceOrderRequest, ReviseOrderRequest,
};
use crate::domain::ports::OrderRepository;
use crate::schema::{merchants, order_items, orders, products, shipping_addresses, users};

use super::models::order::{
    NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow, ShippingAddressValues,
};

impl From<diesel::result::Error> for PlacementError {
    fn from(e: diesel::result::Error) -> Self {
        PlacementError::Repository(e.into())
    }
}

soft_delete_repository!(DieselOrderRepository, orders, OrderRow => Order, search: []);

/// An order line with the unit price read from the product.
struct PricedLine {
    product_id: i32,
    quantity: i32,
    price: i32,
}

fn ensure_parties(
    conn: &mut PgConnection,
    user_id: i32,
    merchant_id: i32,
) -> Result<(), PlacementError> {
    users::table
        .find(user_id)
        .filter(users::deleted_at.is_null())
        .select(users::id)
        .first::<i32>(conn)
        .optional()?
        .ok_or(OrderError::UserNotFound)?;
    merchants::table
        .find(merchant_id)
        .filter(merchants::deleted_at.is_null())
        .select(merchants::id)
        .first::<i32>(conn)
        .optional()?
        .ok_or(OrderError::MerchantNotFound)?;
    Ok(())
}

/// Takes each line's quantity out of stock. The decrement only applies when
/// enough stock is left, so concurrent orders cannot oversell.
fn reserve_stock(
    conn: &mut PgConnection,
    lines: &[OrderLineRequest],
) -> Result<Vec<PricedLine>, PlacementError> {
    if lines.is_empty() {
        return Err(OrderError::NoItems.into());
    }
    let mut priced = Vec::with_capacity(lines.len());
    for line in lines {
        let price = products::table
            .find(line.product_id)
            .filter(products::deleted_at.is_null())
            .select(products::price)
            .first::<i32>(conn)
            .optional()?
            .ok_or(OrderError::ProductNotFound)?;
        let reserved = diesel::update(
            products::table
                .filter(products::id.eq(line.product_id))
                .filter(products::count_in_stock.ge(line.quantity)),
        )
        .set((
            products::count_in_stock.eq(products::count_in_stock - line.quantity),
            products::updated_at.eq(Utc::now()),
        ))
        .execute(conn)?;
        if reserved == 0 {
            return Err(OrderError::InsufficientStock.into());
        }
        priced.push(PricedLine {
            product_id: line.product_id,
            quantity: line.quantity,
            price,
        });
    }
    Ok(priced)
}

fn total_price(lines: &[PricedLine]) -> Result<i32, PlacementError> {
    let total: i64 = lines
        .iter()
        .map(|line| i64::from(line.price) * i64::from(line.quantity))
        .sum();
    i32::try_from(total).map_err(|_| {
        PlacementError::Repository(RepositoryError::Database(format!(
            "order total {} out of range",
            total
        )))
    })
}

fn insert_items(
    conn: &mut PgConnection,
    order_id: i32,
    lines: &[PricedLine],
) -> Result<(), PlacementError> {
    let rows: Vec<NewOrderItemRow> = lines
        .iter()
        .map(|line| NewOrderItemRow {
            order_id,
            product_id: line.product_id,
            quantity: line.quantity,
            price: line.price,
        })
        .collect();
    diesel::insert_into(order_items::table)
        .values(&rows)
        .execute(conn)?;
    Ok(())
}

impl OrderRepository for DieselOrderRepository {
    fn place(&self, request: &PlaceOrderRequest) -> Result<Order, PlacementError> {
        let mut conn = self.pool.get().map_err(RepositoryError::from)?;

        conn.transaction::<_, PlacementError, _>(|conn| {
            ensure_parties(conn, request.user_id, request.merchant_id)?;
            let lines = reserve_stock(conn, &request.items)?;

            let order = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    merchant_id: request.merchant_id,
                    user_id: request.user_id,
                    total_price: total_price(&lines)?,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            insert_items(conn, order.id, &lines)?;
            diesel::insert_into(shipping_addresses::table)
                .values(&ShippingAddressValues::for_order(
                    order.id,
                    &request.shipping_address,
                ))
                .execute(conn)?;

            Ok(order.into())
        })
    }

    fn revise(
        &self,
        id: i32,
        request: &ReviseOrderRequest,
    ) -> Result<Option<Order>, PlacementError> {
        let mut conn = self.pool.get().map_err(RepositoryError::from)?;

        conn.transaction::<_, PlacementError, _>(|conn| {
            let existing = orders::table
                .find(id)
                .filter(orders::deleted_at.is_null())
                .select(OrderRow::as_select())
                .first(conn)
                .optional()?;
            let Some(existing) = existing else {
                return Ok(None);
            };

            // 1. Put the previous items back in stock
            let previous = OrderItemRow::belonging_to(&existing)
                .select(OrderItemRow::as_select())
                .load(conn)?;
            for item in &previous {
                diesel::update(products::table.find(item.product_id))
                    .set(products::count_in_stock.eq(products::count_in_stock + item.quantity))
                    .execute(conn)?;
            }
            diesel::delete(order_items::table.filter(order_items::order_id.eq(id)))
                .execute(conn)?;

            // 2. Reserve the new items
            let lines = reserve_stock(conn, &request.items)?;
            insert_items(conn, id, &lines)?;

            // 3. Replace the shipping address
            let values = ShippingAddressValues::for_order(id, &request.shipping_address);
            let updated = diesel::update(
                shipping_addresses::table.filter(shipping_addresses::order_id.eq(id)),
            )
            .set(&values)
            .execute(conn)?;
            if updated == 0 {
                diesel::insert_into(shipping_addresses::table)
                    .values(&values)
                    .execute(conn)?;
            }

            let order = diesel::update(orders::table.find(id))
                .set((
                    orders::total_price.eq(total_price(&lines)?),
                    orders::updated_at.eq(Utc::now()),
                ))
                .returning(OrderRow::as_returning())
                .get_result(conn)?;
            Ok(Some(order.into()))
        })
    }

    fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .filter(order_items::deleted_at.is_null())
            .order(order_items::id.asc())
            .select(OrderItemRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
