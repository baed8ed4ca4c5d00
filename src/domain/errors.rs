use std::fmt;

use thiserror::Error;

/// Every entity that owns a service surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Banner,
    Category,
    Merchant,
    MerchantAward,
    MerchantBusiness,
    MerchantDetail,
    MerchantPolicy,
    MerchantSocialLink,
    Order,
    OrderItem,
    Product,
    Review,
    ReviewDetail,
    Role,
    ShippingAddress,
    Slider,
    Transaction,
    User,
}

impl Entity {
    pub const fn name(self) -> &'static str {
        match self {
            Entity::Banner => "banner",
            Entity::Category => "category",
            Entity::Merchant => "merchant",
            Entity::MerchantAward => "merchant_award",
            Entity::MerchantBusiness => "merchant_business",
            Entity::MerchantDetail => "merchant_detail",
            Entity::MerchantPolicy => "merchant_policy",
            Entity::MerchantSocialLink => "merchant_social_link",
            Entity::Order => "order",
            Entity::OrderItem => "order_item",
            Entity::Product => "product",
            Entity::Review => "review",
            Entity::ReviewDetail => "review_detail",
            Entity::Role => "role",
            Entity::ShippingAddress => "shipping_address",
            Entity::Slider => "slider",
            Entity::Transaction => "transaction",
            Entity::User => "user",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FindAll,
    FindActive,
    FindTrashed,
    FindById,
    Create,
    Update,
    Trash,
    Restore,
    DeletePermanent,
    RestoreAll,
    DeleteAllPermanent,
    Report,
}

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Operation::FindAll => "find_all",
            Operation::FindActive => "find_active",
            Operation::FindTrashed => "find_trashed",
            Operation::FindById => "find_by_id",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Trash => "trash",
            Operation::Restore => "restore",
            Operation::DeletePermanent => "delete_permanent",
            Operation::RestoreAll => "restore_all",
            Operation::DeleteAllPermanent => "delete_all_permanent",
            Operation::Report => "report",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("user not found")]
    UserNotFound,
    #[error("merchant not found")]
    MerchantNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("order has no items")]
    OrderItemsEmpty,
    #[error("order item quantity must be greater than zero")]
    InvalidQuantity,
    #[error("shipping address not found for order")]
    ShippingAddressNotFound,
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("transaction is already settled")]
    AlreadySettled,
    #[error("failed to send transaction email")]
    NotifyFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("user not found")]
    UserNotFound,
    #[error("merchant not found")]
    MerchantNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("insufficient product stock")]
    InsufficientStock,
    #[error("order has no items")]
    NoItems,
}

/// Errors returned across the service boundary.
///
/// Every value is static: the underlying cause is logged together with the
/// call's trace id and never carried to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("{0} already exists")]
    AlreadyExists(Entity),
    #[error("invalid {0} request")]
    InvalidRequest(Entity),
    #[error("{0} {1} failed")]
    Failed(Entity, Operation),
    #[error("{0} upload not found")]
    UploadNotFound(Entity),
    #[error("failed to remove {0} upload")]
    UploadRemoval(Entity),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    #[error("referenced row not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("connection pool error: {0}")]
    Pool(String),
}

/// Outcome of an order write that can be refused for business reasons.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error(transparent)]
    Rejected(#[from] OrderError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
#[error("cache error: {0}")]
pub struct CacheError(pub String);

#[derive(Debug, Error)]
#[error("publish error: {0}")]
pub struct PublishError(pub String);

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload not found: {0}")]
    NotFound(String),
    #[error("failed to remove upload {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("upload path {0} is outside the upload directory")]
    OutsideRoot(String),
}
