use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Nullable, Text};

use crate::db::DbPool;
use crate::domain::errors::RepositoryError;
use crate::domain::ports::RevenueRepository;
use crate::domain::stats::{CategoryRevenue, MonthlyRevenue, RevenueFilter, YearlyRevenue};

// Every report joins active orders with their active items; trashed rows never count.

const ORDER_MONTHLY: &str = "
    SELECT EXTRACT(YEAR FROM o.created_at)::int4 AS year,
           EXTRACT(MONTH FROM o.created_at)::int4 AS month,
           COUNT(DISTINCT o.id) AS order_count,
           COALESCE(SUM(oi.quantity), 0)::int8 AS items_sold,
           COALESCE(SUM(oi.quantity * oi.price), 0)::int8 AS total_revenue
    FROM orders o
    JOIN order_items oi ON oi.order_id = o.id AND oi.deleted_at IS NULL
    WHERE o.deleted_at IS NULL
      AND EXTRACT(YEAR FROM o.created_at) = $1
      AND ($2::int4 IS NULL OR o.merchant_id = $2)
    GROUP BY 1, 2
    ORDER BY 1, 2";

const ORDER_YEARLY: &str = "
    SELECT EXTRACT(YEAR FROM o.created_at)::int4 AS year,
           COUNT(DISTINCT o.id) AS order_count,
           COALESCE(SUM(oi.quantity), 0)::int8 AS items_sold,
           COALESCE(SUM(oi.quantity * oi.price), 0)::int8 AS total_revenue
    FROM orders o
    JOIN order_items oi ON oi.order_id = o.id AND oi.deleted_at IS NULL
    WHERE o.deleted_at IS NULL
      AND EXTRACT(YEAR FROM o.created_at) BETWEEN $1 AND $2
      AND ($3::int4 IS NULL OR o.merchant_id = $3)
    GROUP BY 1
    ORDER BY 1";

const CATEGORY_MONTHLY: &str = "
    SELECT EXTRACT(YEAR FROM o.created_at)::int4 AS year,
           EXTRACT(MONTH FROM o.created_at)::int4 AS month,
           c.id AS category_id,
           c.name AS category_name,
           COUNT(DISTINCT o.id) AS order_count,
           COALESCE(SUM(oi.quantity), 0)::int8 AS items_sold,
           COALESCE(SUM(oi.quantity * oi.price), 0)::int8 AS total_revenue
    FROM orders o
    JOIN order_items oi ON oi.order_id = o.id AND oi.deleted_at IS NULL
    JOIN products p ON p.id = oi.product_id
    JOIN categories c ON c.id = p.category_id
    WHERE o.deleted_at IS NULL
      AND EXTRACT(YEAR FROM o.created_at) = $1
      AND ($2::int4 IS NULL OR o.merchant_id = $2)
      AND ($3::int4 IS NULL OR c.id = $3)
    GROUP BY 1, 2, 3, 4
    ORDER BY 1, 2, 3";

const CATEGORY_YEARLY: &str = "
    SELECT EXTRACT(YEAR FROM o.created_at)::int4 AS year,
           NULL::int4 AS month,
           c.id AS category_id,
           c.name AS category_name,
           COUNT(DISTINCT o.id) AS order_count,
           COALESCE(SUM(oi.quantity), 0)::int8 AS items_sold,
           COALESCE(SUM(oi.quantity * oi.price), 0)::int8 AS total_revenue
    FROM orders o
    JOIN order_items oi ON oi.order_id = o.id AND oi.deleted_at IS NULL
    JOIN products p ON p.id = oi.product_id
    JOIN categories c ON c.id = p.category_id
    WHERE o.deleted_at IS NULL
      AND EXTRACT(YEAR FROM o.created_at) BETWEEN $1 AND $2
      AND ($3::int4 IS NULL OR o.merchant_id = $3)
      AND ($4::int4 IS NULL OR c.id = $4)
    GROUP BY 1, 2, 3, 4
    ORDER BY 1, 3";

#[derive(QueryableByName)]
struct MonthlyRow {
    #[diesel(sql_type = Integer)]
    year: i32,
    #[diesel(sql_type = Integer)]
    month: i32,
    #[diesel(sql_type = BigInt)]
    order_count: i64,
    #[diesel(sql_type = BigInt)]
    items_sold: i64,
    #[diesel(sql_type = BigInt)]
    total_revenue: i64,
}

impl From<MonthlyRow> for MonthlyRevenue {
    fn from(row: MonthlyRow) -> Self {
        Self {
            year: row.year,
            month: row.month,
            order_count: row.order_count,
            items_sold: row.items_sold,
            total_revenue: row.total_revenue,
        }
    }
}

#[derive(QueryableByName)]
struct YearlyRow {
    #[diesel(sql_type = Integer)]
    year: i32,
    #[diesel(sql_type = BigInt)]
    order_count: i64,
    #[diesel(sql_type = BigInt)]
    items_sold: i64,
    #[diesel(sql_type = BigInt)]
    total_revenue: i64,
}

impl From<YearlyRow> for YearlyRevenue {
    fn from(row: YearlyRow) -> Self {
        Self {
            year: row.year,
            order_count: row.order_count,
            items_sold: row.items_sold,
            total_revenue: row.total_revenue,
        }
    }
}

#[derive(QueryableByName)]
struct CategoryRow {
    #[diesel(sql_type = Integer)]
    year: i32,
    #[diesel(sql_type = Nullable<Integer>)]
    month: Option<i32>,
    #[diesel(sql_type = Integer)]
    category_id: i32,
    #[diesel(sql_type = Text)]
    category_name: String,
    #[diesel(sql_type = BigInt)]
    order_count: i64,
    #[diesel(sql_type = BigInt)]
    items_sold: i64,
    #[diesel(sql_type = BigInt)]
    total_revenue: i64,
}

impl From<CategoryRow> for CategoryRevenue {
    fn from(row: CategoryRow) -> Self {
        Self {
            year: row.year,
            month: row.month,
            category_id: row.category_id,
            category_name: row.category_name,
            order_count: row.order_count,
            items_sold: row.items_sold,
            total_revenue: row.total_revenue,
        }
    }
}

pub struct DieselRevenueRepository {
    pool: DbPool,
}

impl DieselRevenueRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl RevenueRepository for DieselRevenueRepository {
    fn order_monthly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<MonthlyRevenue>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows: Vec<MonthlyRow> = sql_query(ORDER_MONTHLY)
            .bind::<Integer, _>(filter.year)
            .bind::<Nullable<Integer>, _>(filter.merchant_id)
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn order_yearly(&self, filter: &RevenueFilter) -> Result<Vec<YearlyRevenue>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows: Vec<YearlyRow> = sql_query(ORDER_YEARLY)
            .bind::<Integer, _>(filter.first_year())
            .bind::<Integer, _>(filter.year)
            .bind::<Nullable<Integer>, _>(filter.merchant_id)
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn category_monthly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows: Vec<CategoryRow> = sql_query(CATEGORY_MONTHLY)
            .bind::<Integer, _>(filter.year)
            .bind::<Nullable<Integer>, _>(filter.merchant_id)
            .bind::<Nullable<Integer>, _>(filter.category_id)
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn category_yearly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows: Vec<CategoryRow> = sql_query(CATEGORY_YEARLY)
            .bind::<Integer, _>(filter.first_year())
            .bind::<Integer, _>(filter.year)
            .bind::<Nullable<Integer>, _>(filter.merchant_id)
            .bind::<Nullable<Integer>, _>(filter.category_id)
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
