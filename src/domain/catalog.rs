use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::validation::{validate_slug, validate_upload_path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
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

record!(Banner => Banner);

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_banner_window"))]
pub struct BannerRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub is_active: bool,
}

fn validate_banner_window(banner: &BannerRequest) -> Result<(), ValidationError> {
    let start = banner.start_date.and_time(banner.start_time);
    let end = banner.end_date.and_time(banner.end_time);
    if end > start {
        Ok(())
    } else {
        Err(ValidationError::new("banner_window"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(Slider => Slider, upload: image);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SliderRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255), custom(function = "validate_upload_path"))]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub slug_category: String,
    pub image_category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(Category => Category, upload: image_category);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 255), custom(function = "validate_slug"))]
    pub slug_category: String,
    #[validate(length(max = 255), custom(function = "validate_upload_path"))]
    pub image_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
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

record!(Product => Product, upload: image_product);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(range(min = 1))]
    pub merchant_id: i32,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 0))]
    pub count_in_stock: i32,
    #[validate(length(min = 1, max = 255))]
    pub brand: String,
    #[validate(range(min = 0))]
    pub weight: i32,
    #[validate(length(max = 255), custom(function = "validate_slug"))]
    pub slug_product: String,
    #[validate(length(max = 255), custom(function = "validate_upload_path"))]
    pub image_product: Option<String>,
    #[validate(length(max = 255))]
    pub barcode: Option<String>,
}
