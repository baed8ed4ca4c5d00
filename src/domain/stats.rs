use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of years a yearly report covers, ending with the requested year.
pub const YEARLY_WINDOW: i32 = 5;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RevenueFilter {
    #[validate(range(min = 1970, max = 9999))]
    pub year: i32,
    #[validate(range(min = 1))]
    pub merchant_id: Option<i32>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
}

impl RevenueFilter {
    pub fn first_year(&self) -> i32 {
        self.year - (YEARLY_WINDOW - 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: i32,
    pub order_count: i64,
    pub items_sold: i64,
    pub total_revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRevenue {
    pub year: i32,
    pub order_count: i64,
    pub items_sold: i64,
    pub total_revenue: i64,
}

/// Revenue of one category, per month when `month` is set and per year
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    pub category_id: i32,
    pub category_name: String,
    pub order_count: i64,
    pub items_sold: i64,
    pub total_revenue: i64,
}
