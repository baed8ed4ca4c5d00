use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_upload_path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
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

record!(Review => Review, cascades: [ReviewDetail]);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub comment: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

/// A photo or video attached to a review. `url` points at the uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDetail {
    pub id: i32,
    pub review_id: i32,
    #[serde(rename = "type")]
    pub detail_type: String,
    pub url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(ReviewDetail => ReviewDetail, upload: url);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewDetailRequest {
    #[validate(range(min = 1))]
    pub review_id: i32,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 10))]
    pub detail_type: String,
    #[validate(length(min = 1, max = 255), custom(function = "validate_upload_path"))]
    pub url: String,
    #[validate(length(max = 255))]
    pub caption: Option<String>,
}
