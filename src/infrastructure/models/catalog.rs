use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;

use crate::domain::catalog::{
    Banner, BannerRequest, Category, CategoryRequest, Product, ProductRequest, Slider,
    SliderRequest,
};
use crate::schema::{banners, categories, products, sliders};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = banners)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BannerRow {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(BannerRow => Banner {
    id, name, start_date, end_date, start_time, end_time, is_active,
    created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = banners)]
pub struct BannerValues {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

values_from!(BannerRequest => BannerValues {
    name, start_date, end_date, start_time, end_time, is_active,
});

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sliders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SliderRow {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(SliderRow => Slider { id, name, image, created_at, updated_at, deleted_at });

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = sliders)]
pub struct SliderValues {
    pub name: String,
    pub image: String,
    pub updated_at: DateTime<Utc>,
}

values_from!(SliderRequest => SliderValues { name, image });

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub slug_category: String,
    pub image_category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(CategoryRow => Category {
    id, name, description, slug_category, image_category,
    created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = categories)]
#[diesel(treat_none_as_null = true)]
pub struct CategoryValues {
    pub name: String,
    pub description: Option<String>,
    pub slug_category: String,
    pub image_category: Option<String>,
    pub updated_at: DateTime<Utc>,
}

values_from!(CategoryRequest => CategoryValues {
    name, description, slug_category, image_category,
});

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub merchant_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub count_in_stock: i32,
    pub brand: String,
    pub weight: i32,
    pub slug_product: String,
    pub image_product: Option<String>,
    pub barcode: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(ProductRow => Product {
    id, merchant_id, category_id, name, description, price, count_in_stock, brand,
    weight, slug_product, image_product, barcode, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductValues {
    pub merchant_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub count_in_stock: i32,
    pub brand: String,
    pub weight: i32,
    pub slug_product: String,
    pub image_product: Option<String>,
    pub barcode: Option<String>,
    pub updated_at: DateTime<Utc>,
}

values_from!(ProductRequest => ProductValues {
    merchant_id, category_id, name, description, price, count_in_stock, brand, weight,
    slug_product, image_product, barcode,
});
