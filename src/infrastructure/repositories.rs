use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use super::models::account::{RoleRow, RoleValues, UserRow, UserValues};
use super::models::catalog::{
    BannerRow, BannerValues, CategoryRow, CategoryValues, ProductRow, ProductValues, SliderRow,
    SliderValues,
};
use super::models::merchant::{
    MerchantAwardRow, MerchantAwardValues, MerchantBusinessRow, MerchantBusinessValues,
    MerchantDetailRow, MerchantDetailValues, MerchantPolicyRow, MerchantPolicyValues,
    MerchantRow, MerchantSocialLinkRow, MerchantSocialLinkValues, MerchantValues,
};
use super::models::order::{OrderItemRow, ShippingAddressRow, ShippingAddressValues};
use super::models::review::{ReviewDetailRow, ReviewDetailValues, ReviewRow, ReviewValues};
use super::models::transaction::{TransactionRow, TransactionValues};
use crate::domain::account::{Role, RoleRequest, User, UserRequest};
use crate::domain::catalog::{
    Banner, BannerRequest, Category, CategoryRequest, Product, ProductRequest, Slider,
    SliderRequest,
};
use crate::domain::errors::RepositoryError;
use crate::domain::merchant::{
    Merchant, MerchantAward, MerchantAwardRequest, MerchantBusiness, MerchantBusinessRequest,
    MerchantDetail, MerchantDetailRequest, MerchantPolicy, MerchantPolicyRequest,
    MerchantRequest, MerchantSocialLink, MerchantSocialLinkRequest,
};
use crate::domain::order::{OrderItem, ShippingAddress, ShippingAddressRequest};
use crate::domain::ports::ShippingAddressLookup;
use crate::domain::review::{Review, ReviewDetail, ReviewDetailRequest, ReviewRequest};
use crate::domain::transaction::{NewTransaction, Transaction};
use crate::schema::shipping_addresses;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<DieselError> for RepositoryError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::Conflict(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                RepositoryError::NotFound(info.message().to_string())
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for RepositoryError {
    fn from(e: r2d2::Error) -> Self {
        RepositoryError::Pool(e.to_string())
    }
}

// ── Repositories ──────────────────────────────────────────────────────────────

soft_delete_repository!(
    DieselBannerRepository, banners, BannerRow => Banner,
    search: [name],
    input: BannerRequest => BannerValues,
);

soft_delete_repository!(
    DieselSliderRepository, sliders, SliderRow => Slider,
    search: [name],
    input: SliderRequest => SliderValues,
);

soft_delete_repository!(
    DieselCategoryRepository, categories, CategoryRow => Category,
    search: [name, slug_category],
    input: CategoryRequest => CategoryValues,
);

soft_delete_repository!(
    DieselProductRepository, products, ProductRow => Product,
    search: [name, brand, slug_product],
    input: ProductRequest => ProductValues,
);

soft_delete_repository!(
    DieselMerchantRepository, merchants, MerchantRow => Merchant,
    search: [name, contact_email, address],
    input: MerchantRequest => MerchantValues,
);

soft_delete_repository!(
    DieselMerchantAwardRepository, merchant_awards, MerchantAwardRow => MerchantAward,
    search: [title, issued_by],
    input: MerchantAwardRequest => MerchantAwardValues,
);

soft_delete_repository!(
    DieselMerchantBusinessRepository, merchant_businesses, MerchantBusinessRow => MerchantBusiness,
    search: [business_type],
    input: MerchantBusinessRequest => MerchantBusinessValues,
);

soft_delete_repository!(
    DieselMerchantDetailRepository, merchant_details, MerchantDetailRow => MerchantDetail,
    search: [display_name],
    input: MerchantDetailRequest => MerchantDetailValues,
);

soft_delete_repository!(
    DieselMerchantPolicyRepository, merchant_policies, MerchantPolicyRow => MerchantPolicy,
    search: [policy_type, title],
    input: MerchantPolicyRequest => MerchantPolicyValues,
);

soft_delete_repository!(
    DieselMerchantSocialLinkRepository, merchant_social_links,
    MerchantSocialLinkRow => MerchantSocialLink,
    search: [platform, url],
    input: MerchantSocialLinkRequest => MerchantSocialLinkValues,
);

soft_delete_repository!(
    DieselUserRepository, users, UserRow => User,
    search: [firstname, lastname, email],
    input: UserRequest => UserValues,
);

soft_delete_repository!(
    DieselRoleRepository, roles, RoleRow => Role,
    search: [role_name],
    input: RoleRequest => RoleValues,
);

soft_delete_repository!(
    DieselReviewRepository, reviews, ReviewRow => Review,
    search: [name, comment],
    cascaded_uploads: review_details.review_id => url,
    input: ReviewRequest => ReviewValues,
);

soft_delete_repository!(
    DieselReviewDetailRepository, review_details, ReviewDetailRow => ReviewDetail,
    search: [detail_type, url],
    input: ReviewDetailRequest => ReviewDetailValues,
);

soft_delete_repository!(
    DieselShippingAddressRepository, shipping_addresses, ShippingAddressRow => ShippingAddress,
    search: [address, city, province, country, courier],
    input: ShippingAddressRequest => ShippingAddressValues,
);

soft_delete_repository!(
    DieselTransactionRepository, transactions, TransactionRow => Transaction,
    search: [payment_method, payment_status],
    input: NewTransaction => TransactionValues,
);

soft_delete_repository!(
    DieselOrderItemRepository, order_items, OrderItemRow => OrderItem,
    search: [],
);

impl ShippingAddressLookup for DieselShippingAddressRepository {
    fn find_by_order(&self, order_id: i32) -> Result<Option<ShippingAddress>, RepositoryError> {
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
