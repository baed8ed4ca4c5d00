use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::review::{Review, ReviewDetail, ReviewDetailRequest, ReviewRequest};
use crate::schema::{review_details, reviews};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewRow {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub name: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(ReviewRow => Review {
    id, user_id, product_id, name, comment, rating, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = reviews)]
pub struct ReviewValues {
    pub user_id: i32,
    pub product_id: i32,
    pub name: String,
    pub comment: String,
    pub rating: i32,
    pub updated_at: DateTime<Utc>,
}

values_from!(ReviewRequest => ReviewValues { user_id, product_id, name, comment, rating });

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = review_details)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewDetailRow {
    pub id: i32,
    pub review_id: i32,
    pub detail_type: String,
    pub url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(ReviewDetailRow => ReviewDetail {
    id, review_id, detail_type, url, caption, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = review_details)]
#[diesel(treat_none_as_null = true)]
pub struct ReviewDetailValues {
    pub review_id: i32,
    pub detail_type: String,
    pub url: String,
    pub caption: Option<String>,
    pub updated_at: DateTime<Utc>,
}

values_from!(ReviewDetailRequest => ReviewDetailValues { review_id, detail_type, url, caption });
