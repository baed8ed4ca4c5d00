use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_phone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(
    Merchant => Merchant,
    cascades: [MerchantAward, MerchantBusiness, MerchantDetail, MerchantPolicy, MerchantSocialLink],
);

fn default_status() -> String {
    "inactive".to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MerchantRequest {
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(custom(function = "validate_phone"))]
    pub contact_phone: String,
    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantAward {
    pub id: i32,
    pub merchant_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub issued_by: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(MerchantAward => MerchantAward);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MerchantAwardRequest {
    #[validate(range(min = 1))]
    pub merchant_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub issued_by: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    #[validate(url)]
    pub certificate_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantBusiness {
    pub id: i32,
    pub merchant_id: i32,
    pub business_type: String,
    pub tax_id: Option<String>,
    pub established_year: Option<i32>,
    pub number_of_employees: Option<i32>,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(MerchantBusiness => MerchantBusiness);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MerchantBusinessRequest {
    #[validate(range(min = 1))]
    pub merchant_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub business_type: String,
    #[validate(length(max = 50))]
    pub tax_id: Option<String>,
    #[validate(range(min = 1800, max = 2100))]
    pub established_year: Option<i32>,
    #[validate(range(min = 0))]
    pub number_of_employees: Option<i32>,
    #[validate(url)]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantDetail {
    pub id: i32,
    pub merchant_id: i32,
    pub display_name: String,
    pub cover_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub short_description: Option<String>,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(MerchantDetail => MerchantDetail, cascades: [MerchantSocialLink]);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MerchantDetailRequest {
    #[validate(range(min = 1))]
    pub merchant_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub display_name: String,
    pub cover_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub short_description: Option<String>,
    #[validate(url)]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantPolicy {
    pub id: i32,
    pub merchant_id: i32,
    pub policy_type: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(MerchantPolicy => MerchantPolicy);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MerchantPolicyRequest {
    #[validate(range(min = 1))]
    pub merchant_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub policy_type: String,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantSocialLink {
    pub id: i32,
    pub merchant_detail_id: i32,
    pub platform: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

record!(MerchantSocialLink => MerchantSocialLink);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MerchantSocialLinkRequest {
    #[validate(range(min = 1))]
    pub merchant_detail_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub platform: String,
    #[validate(url)]
    pub url: String,
}
