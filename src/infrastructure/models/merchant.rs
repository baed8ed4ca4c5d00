use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::merchant::{
    Merchant, MerchantAward, MerchantAwardRequest, MerchantBusiness, MerchantBusinessRequest,
    MerchantDetail, MerchantDetailRequest, MerchantPolicy, MerchantPolicyRequest,
    MerchantRequest, MerchantSocialLink, MerchantSocialLinkRequest,
};
use crate::schema::{
    merchant_awards, merchant_businesses, merchant_details, merchant_policies,
    merchant_social_links, merchants,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = merchants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MerchantRow {
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

row_into!(MerchantRow => Merchant {
    id, user_id, name, description, address, contact_email, contact_phone, status,
    created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = merchants)]
#[diesel(treat_none_as_null = true)]
pub struct MerchantValues {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

values_from!(MerchantRequest => MerchantValues {
    user_id, name, description, address, contact_email, contact_phone, status,
});

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = merchant_awards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MerchantAwardRow {
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

row_into!(MerchantAwardRow => MerchantAward {
    id, merchant_id, title, description, issued_by, issue_date, expiry_date,
    certificate_url, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = merchant_awards)]
#[diesel(treat_none_as_null = true)]
pub struct MerchantAwardValues {
    pub merchant_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub issued_by: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

values_from!(MerchantAwardRequest => MerchantAwardValues {
    merchant_id, title, description, issued_by, issue_date, expiry_date, certificate_url,
});

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = merchant_businesses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MerchantBusinessRow {
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

row_into!(MerchantBusinessRow => MerchantBusiness {
    id, merchant_id, business_type, tax_id, established_year, number_of_employees,
    website_url, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = merchant_businesses)]
#[diesel(treat_none_as_null = true)]
pub struct MerchantBusinessValues {
    pub merchant_id: i32,
    pub business_type: String,
    pub tax_id: Option<String>,
    pub established_year: Option<i32>,
    pub number_of_employees: Option<i32>,
    pub website_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

values_from!(MerchantBusinessRequest => MerchantBusinessValues {
    merchant_id, business_type, tax_id, established_year, number_of_employees, website_url,
});

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = merchant_details)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MerchantDetailRow {
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

row_into!(MerchantDetailRow => MerchantDetail {
    id, merchant_id, display_name, cover_image_url, logo_url, short_description,
    website_url, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = merchant_details)]
#[diesel(treat_none_as_null = true)]
pub struct MerchantDetailValues {
    pub merchant_id: i32,
    pub display_name: String,
    pub cover_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub short_description: Option<String>,
    pub website_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

values_from!(MerchantDetailRequest => MerchantDetailValues {
    merchant_id, display_name, cover_image_url, logo_url, short_description, website_url,
});

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = merchant_policies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MerchantPolicyRow {
    pub id: i32,
    pub merchant_id: i32,
    pub policy_type: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(MerchantPolicyRow => MerchantPolicy {
    id, merchant_id, policy_type, title, description, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = merchant_policies)]
pub struct MerchantPolicyValues {
    pub merchant_id: i32,
    pub policy_type: String,
    pub title: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

values_from!(MerchantPolicyRequest => MerchantPolicyValues {
    merchant_id, policy_type, title, description,
});

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = merchant_social_links)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MerchantSocialLinkRow {
    pub id: i32,
    pub merchant_detail_id: i32,
    pub platform: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

row_into!(MerchantSocialLinkRow => MerchantSocialLink {
    id, merchant_detail_id, platform, url, created_at, updated_at, deleted_at,
});

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = merchant_social_links)]
pub struct MerchantSocialLinkValues {
    pub merchant_detail_id: i32,
    pub platform: String,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

values_from!(MerchantSocialLinkRequest => MerchantSocialLinkValues {
    merchant_detail_id, platform, url,
});
